//! Start/stop state machine shared by the button and the global hotkey

use std::sync::Arc;
use tracing::info;

use crate::config::ClickConfig;
use crate::injector::ClickBackend;
use crate::worker::ClickWorker;

/// The two phases of the clicker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Clicking,
}

/// Owns the running worker and flips between phases.
///
/// Both toggle sources - the start/stop button and the global hotkey event -
/// funnel through [`ToggleController::toggle`], so they can never disagree
/// about the state.
pub struct ToggleController {
    backend: Arc<dyn ClickBackend>,
    worker: Option<ClickWorker>,
}

impl ToggleController {
    pub fn new(backend: Arc<dyn ClickBackend>) -> Self {
        Self {
            backend,
            worker: None,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.worker.is_some() {
            Phase::Clicking
        } else {
            Phase::Idle
        }
    }

    pub fn is_clicking(&self) -> bool {
        self.phase() == Phase::Clicking
    }

    /// Flip the state; returns the phase entered.
    ///
    /// Starting freezes `config` for the whole run and spawns a fresh worker.
    /// Stopping cancels the worker's token and lets the thread wind down on
    /// its own; the current helper invocation is never interrupted.
    pub fn toggle(&mut self, config: ClickConfig) -> Phase {
        match self.worker.take() {
            Some(worker) => {
                worker.cancel();
                info!("Clicking stopped");
                Phase::Idle
            }
            None => {
                info!(
                    "Clicking started (interval={}ms, clicks={}, double={})",
                    config.interval_ms, config.max_clicks, config.double_click
                );
                self.worker = Some(ClickWorker::spawn(Arc::clone(&self.backend), config));
                Phase::Clicking
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClickerError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts dispatches; never fails.
    #[derive(Default)]
    struct CountingBackend {
        dispatched: AtomicUsize,
    }

    impl ClickBackend for CountingBackend {
        fn dispatch(&self, _config: &ClickConfig, _remaining: i64) -> Result<(), ClickerError> {
            self.dispatched.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn test_starts_idle() {
        let controller = ToggleController::new(Arc::new(CountingBackend::default()));
        assert_eq!(controller.phase(), Phase::Idle);
        assert!(!controller.is_clicking());
    }

    #[test]
    fn test_toggle_walks_idle_clicking_idle() {
        let mut controller = ToggleController::new(Arc::new(CountingBackend::default()));

        assert_eq!(controller.toggle(ClickConfig::default()), Phase::Clicking);
        assert!(controller.is_clicking());

        assert_eq!(controller.toggle(ClickConfig::default()), Phase::Idle);
        assert!(!controller.is_clicking());
    }

    #[test]
    fn test_repeated_cycles_always_return_to_idle() {
        let mut controller = ToggleController::new(Arc::new(CountingBackend::default()));

        for _ in 0..2 {
            controller.toggle(ClickConfig::default());
            assert!(controller.is_clicking());
            controller.toggle(ClickConfig::default());
            assert!(!controller.is_clicking());
        }
    }

    #[test]
    fn test_each_start_spawns_a_fresh_worker() {
        let backend = Arc::new(CountingBackend::default());
        let mut controller = ToggleController::new(backend.clone());

        controller.toggle(ClickConfig::default());
        controller.toggle(ClickConfig::default());
        controller.toggle(ClickConfig::default());
        assert!(controller.is_clicking());
        controller.toggle(ClickConfig::default());

        // Both runs had a chance to dispatch at least once.
        std::thread::sleep(std::time::Duration::from_millis(200));
        assert!(backend.dispatched.load(Ordering::SeqCst) >= 1);
    }
}
