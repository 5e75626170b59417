//! Global hotkey listening using rdev

use rdev::{listen, Event, EventType};
use std::sync::{mpsc, Arc, Mutex, PoisonError};
use std::thread;
use tracing::{debug, error, info};

use crate::hotkey::{Hotkey, Modifiers};

/// Event sent when the toggle hotkey fires
#[derive(Debug, Clone)]
pub struct ToggleRequested {
    /// Timestamp when the key press was detected
    pub timestamp: std::time::Instant,
}

/// Rebindable hotkey slot shared with the listener thread
pub type SharedHotkey = Arc<Mutex<Hotkey>>;

/// Wrap a binding so the settings UI and the listener can share it.
pub fn shared_hotkey(hotkey: Hotkey) -> SharedHotkey {
    Arc::new(Mutex::new(hotkey))
}

/// Read the current binding, surviving a poisoned lock.
pub fn current_binding(binding: &SharedHotkey) -> Hotkey {
    *binding.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Listener that watches global keyboard events for the toggle binding
pub struct HotkeyListener {
    /// Sender for toggle events
    sender: mpsc::Sender<ToggleRequested>,

    /// Binding to match; re-read on every key press
    binding: SharedHotkey,
}

impl HotkeyListener {
    /// Create a new HotkeyListener with the given channel sender and binding
    pub fn new(sender: mpsc::Sender<ToggleRequested>, binding: SharedHotkey) -> Self {
        Self { sender, binding }
    }

    /// Start listening for keyboard events in a background thread
    ///
    /// This function spawns a new thread that listens for global keyboard
    /// events, tracking held modifiers itself. Whenever the saved binding
    /// fires, it sends an event through the channel.
    ///
    /// Returns a JoinHandle for the listener thread.
    pub fn start(self) -> thread::JoinHandle<()> {
        thread::spawn(move || {
            info!("Hotkey listener started");

            let sender = self.sender;
            let binding = self.binding;
            let mut held = Modifiers::default();

            let callback = move |event: Event| match event.event_type {
                EventType::KeyPress(key) => {
                    held.apply(key, true);

                    let current = current_binding(&binding);
                    if current.matches(key, held) {
                        debug!("Toggle hotkey {} detected", current);

                        let toggle_event = ToggleRequested {
                            timestamp: std::time::Instant::now(),
                        };

                        if let Err(e) = sender.send(toggle_event) {
                            error!("Failed to send toggle event: {}", e);
                        }
                    }
                }
                EventType::KeyRelease(key) => held.apply(key, false),
                _ => {}
            };

            if let Err(e) = listen(callback) {
                error!("Error in hotkey listener: {:?}", e);
            }
        })
    }
}

/// Create a channel for toggle events and return both ends
pub fn create_event_channel() -> (mpsc::Sender<ToggleRequested>, mpsc::Receiver<ToggleRequested>) {
    mpsc::channel()
}
