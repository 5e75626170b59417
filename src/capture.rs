//! One-shot capture of a pointer position
//!
//! While the capture mode is armed, the next pointer press inside the window
//! records its coordinates instead of interacting with the widgets. The mode
//! is sticky: it stays armed after a capture until toggled off again.

use std::fmt;

/// Last captured pointer location, in window coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorPosition {
    pub x: i32,
    pub y: i32,
}

impl fmt::Display for CursorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl CursorPosition {
    /// Parse `"x,y"` text from the position field.
    pub fn parse(text: &str) -> Option<Self> {
        let (x, y) = text.split_once(',')?;
        Some(Self {
            x: x.trim().parse().ok()?,
            y: y.trim().parse().ok()?,
        })
    }
}

/// Capture mode flag plus the recorded position
#[derive(Debug, Default)]
pub struct PositionCapture {
    active: bool,
    position: CursorPosition,
}

impl PositionCapture {
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Flip the capture mode; returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }

    pub fn position(&self) -> CursorPosition {
        self.position
    }

    /// Record a pointer press; ignored while the mode is off.
    pub fn record(&mut self, x: i32, y: i32) {
        if self.active {
            self.position = CursorPosition { x, y };
        }
    }

    /// Set the position directly (the `"x,y"` field path).
    pub fn set(&mut self, position: CursorPosition) {
        self.position = position;
    }

    /// Reset the position to the origin.
    pub fn clear(&mut self) {
        self.position = CursorPosition::default();
    }

    /// Text shown under the position widgets
    pub fn label(&self) -> String {
        format!("Cursor Position: {}", self.position)
    }
}
