//! BlazeClick - GUI auto-clicker driving an external click helper
//!
//! Repeatedly launches the external click helper at a configurable interval
//! and count, toggled from anywhere in the session via a global hotkey.

use blazeclick::{
    gui::ClickerApp,
    hotkey_listener::{create_event_channel, shared_hotkey, HotkeyListener},
    injector::{ProcessClicker, DEFAULT_HELPER},
    ClickBackend, Hotkey,
};
use clap::Parser;
use eframe::egui;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Command line flags
#[derive(Parser, Debug)]
#[command(name = "blazeclick", about = "GUI auto-clicker driving an external click helper")]
struct Cli {
    /// Click helper executable to launch for each run
    #[arg(long, default_value = DEFAULT_HELPER)]
    clicker_path: String,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> eframe::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let _subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .init();

    info!("BlazeClick starting...");
    info!("Click helper: '{}'", cli.clicker_path);

    // The binding is shared between the settings UI and the listener thread.
    let binding = shared_hotkey(Hotkey::default());

    // Hotkey events cross into the GUI loop over this channel.
    let (sender, receiver) = create_event_channel();
    let listener = HotkeyListener::new(sender, Arc::clone(&binding));
    let _listener_handle = listener.start();

    info!(
        "Hotkey listener ready - press {} to start/stop clicking",
        Hotkey::default()
    );

    let backend: Arc<dyn ClickBackend> = Arc::new(ProcessClicker::new(cli.clicker_path));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([400.0, 450.0])
            .with_resizable(false),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        "Auto Clicker",
        options,
        Box::new(move |_cc| Box::new(ClickerApp::new(backend, binding, receiver))),
    )
}
