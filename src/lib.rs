//! BlazeClick - GUI auto-clicker driving an external click helper
//!
//! This library provides components for:
//! - Parsing the interval / click-count fields into a frozen click config
//! - Running the click loop on a background worker thread
//! - Global hotkey listening (toggle clicking from anywhere in the session)
//! - One-shot capture of a pointer position for display

pub mod capture;
pub mod config;
pub mod controller;
pub mod gui;
pub mod hotkey;
pub mod hotkey_listener;
pub mod injector;
pub mod worker;

pub use capture::{CursorPosition, PositionCapture};
pub use config::{ClickConfig, FieldWarning};
pub use controller::{Phase, ToggleController};
pub use hotkey::Hotkey;
pub use hotkey_listener::HotkeyListener;
pub use injector::{ClickBackend, ProcessClicker};
pub use worker::{CancelToken, ClickWorker};

use thiserror::Error;

/// Main error type for BlazeClick
#[derive(Error, Debug)]
pub enum ClickerError {
    #[error("Failed to launch click helper '{program}': {source}")]
    SpawnHelper {
        program: String,
        source: std::io::Error,
    },

    #[error("Hotkey listener error: {0}")]
    Listener(String),

    #[error("Channel error: {0}")]
    Channel(String),
}
