//! Toggle hotkey binding
//!
//! A binding is a set of modifier flags plus one main key. The listener
//! thread matches incoming key presses against the currently saved binding,
//! so rebinding takes effect without restarting it.

use rdev::Key;
use std::fmt;

/// Main keys offered by the hotkey settings dropdown.
pub const SELECTABLE_KEYS: [Key; 12] = [
    Key::F1,
    Key::F2,
    Key::F3,
    Key::F4,
    Key::F5,
    Key::F6,
    Key::F7,
    Key::F8,
    Key::F9,
    Key::F10,
    Key::F11,
    Key::F12,
];

/// Modifier flags tracked alongside the main key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    /// Update the held-modifier state from a key transition.
    pub fn apply(&mut self, key: Key, pressed: bool) {
        match key {
            Key::ControlLeft | Key::ControlRight => self.ctrl = pressed,
            Key::ShiftLeft | Key::ShiftRight => self.shift = pressed,
            Key::Alt | Key::AltGr => self.alt = pressed,
            _ => {}
        }
    }
}

/// A hotkey combination: modifiers plus a main key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hotkey {
    pub modifiers: Modifiers,
    pub key: Key,
}

impl Default for Hotkey {
    /// The stock binding: plain F6.
    fn default() -> Self {
        Self {
            modifiers: Modifiers::default(),
            key: Key::F6,
        }
    }
}

impl Hotkey {
    /// True when `key` going down under `held` modifiers fires this binding.
    pub fn matches(&self, key: Key, held: Modifiers) -> bool {
        key == self.key && held == self.modifiers
    }
}

/// Display name for a selectable main key.
pub fn key_label(key: Key) -> &'static str {
    match key {
        Key::F1 => "F1",
        Key::F2 => "F2",
        Key::F3 => "F3",
        Key::F4 => "F4",
        Key::F5 => "F5",
        Key::F6 => "F6",
        Key::F7 => "F7",
        Key::F8 => "F8",
        Key::F9 => "F9",
        Key::F10 => "F10",
        Key::F11 => "F11",
        Key::F12 => "F12",
        _ => "?",
    }
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.ctrl {
            write!(f, "Ctrl+")?;
        }
        if self.modifiers.shift {
            write!(f, "Shift+")?;
        }
        if self.modifiers.alt {
            write!(f, "Alt+")?;
        }
        write!(f, "{}", key_label(self.key))
    }
}
