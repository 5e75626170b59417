//! The click loop worker
//!
//! Each start press spawns one worker thread that repeatedly fires the click
//! backend until its cancel token is flipped. All blocking (the pacing sleep
//! and the helper process wait) happens here so the GUI thread never stalls.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{error, info};

use crate::config::ClickConfig;
use crate::injector::ClickBackend;

/// Pause between helper invocations.
const ITERATION_PACE: Duration = Duration::from_millis(100);

/// Cloneable stop signal, checked at the top of each loop iteration.
///
/// Stop latency is bounded by one iteration: the pacing sleep plus however
/// long the current helper invocation takes.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Handle to a running click loop
pub struct ClickWorker {
    token: CancelToken,
    handle: thread::JoinHandle<()>,
}

impl ClickWorker {
    /// Spawn the click loop on a dedicated thread.
    pub fn spawn(backend: Arc<dyn ClickBackend>, config: ClickConfig) -> Self {
        let token = CancelToken::new();
        let loop_token = token.clone();
        let handle = thread::spawn(move || run_loop(backend, config, loop_token));
        Self { token, handle }
    }

    /// Ask the loop to stop after its current invocation.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Wait for the loop thread to finish.
    pub fn join(self) -> thread::Result<()> {
        self.handle.join()
    }
}

fn run_loop(backend: Arc<dyn ClickBackend>, config: ClickConfig, token: CancelToken) {
    info!(
        "Click loop started (interval={}ms, clicks={}, double={})",
        config.interval_ms, config.max_clicks, config.double_click
    );

    let mut remaining = config.max_clicks;
    while !token.is_cancelled() {
        if let Err(e) = backend.dispatch(&config, remaining) {
            // The loop dies with the helper; the front-end keeps whatever
            // state it had.
            error!("Click helper invocation failed: {}", e);
            return;
        }

        if !config.is_unbounded() {
            remaining -= 1;
        }
        // TODO: `remaining` only counts down; decide whether reaching zero
        // should cancel the loop instead of relying on an external stop.

        thread::sleep(ITERATION_PACE);
    }

    info!("Click loop stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClickerError;
    use std::sync::mpsc;
    use std::sync::Mutex;

    /// Records every dispatch and reports it over a channel.
    struct RecordingBackend {
        calls: Mutex<Vec<(i64, i64, bool)>>,
        notify: Mutex<mpsc::Sender<()>>,
        fail: bool,
    }

    impl RecordingBackend {
        fn new(fail: bool) -> (Arc<Self>, mpsc::Receiver<()>) {
            let (tx, rx) = mpsc::channel();
            let backend = Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                notify: Mutex::new(tx),
                fail,
            });
            (backend, rx)
        }

        fn calls(&self) -> Vec<(i64, i64, bool)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl ClickBackend for RecordingBackend {
        fn dispatch(&self, config: &ClickConfig, remaining: i64) -> Result<(), ClickerError> {
            self.calls
                .lock()
                .unwrap()
                .push((config.interval_ms, remaining, config.double_click));
            let _ = self.notify.lock().unwrap().send(());
            if self.fail {
                return Err(ClickerError::Channel("backend down".to_string()));
            }
            Ok(())
        }
    }

    #[test]
    fn test_cancel_token_flips_once() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());
        token.cancel();
        assert!(token.is_cancelled());

        let clone = token.clone();
        assert!(clone.is_cancelled());
    }

    #[test]
    fn test_immediate_stop_allows_at_most_one_invocation() {
        let (backend, _rx) = RecordingBackend::new(false);
        let config = ClickConfig {
            interval_ms: 50,
            max_clicks: 3,
            double_click: false,
        };

        let worker = ClickWorker::spawn(backend.clone(), config);
        worker.cancel();
        worker.join().unwrap();

        let calls = backend.calls();
        assert!(calls.len() <= 1, "saw {} invocations", calls.len());
        assert!(calls.iter().all(|&(_, _, double)| !double));
    }

    #[test]
    fn test_budget_counts_down_without_stopping_the_loop() {
        let (backend, rx) = RecordingBackend::new(false);
        let config = ClickConfig {
            interval_ms: 10,
            max_clicks: 2,
            double_click: false,
        };

        let worker = ClickWorker::spawn(backend.clone(), config);
        // Wait out four invocations; the loop must run past a zero budget.
        for _ in 0..4 {
            rx.recv_timeout(Duration::from_secs(5)).unwrap();
        }
        worker.cancel();
        worker.join().unwrap();

        let remaining: Vec<i64> = backend.calls().iter().map(|&(_, r, _)| r).collect();
        assert_eq!(&remaining[..4], &[2, 1, 0, -1]);
    }

    #[test]
    fn test_unbounded_budget_never_decrements() {
        let (backend, rx) = RecordingBackend::new(false);
        let config = ClickConfig::default();

        let worker = ClickWorker::spawn(backend.clone(), config);
        for _ in 0..3 {
            rx.recv_timeout(Duration::from_secs(5)).unwrap();
        }
        worker.cancel();
        worker.join().unwrap();

        let calls = backend.calls();
        assert!(calls.iter().all(|&(_, remaining, _)| remaining == -1));
    }

    #[test]
    fn test_dispatch_failure_terminates_the_worker() {
        let (backend, _rx) = RecordingBackend::new(true);
        let worker = ClickWorker::spawn(backend.clone(), ClickConfig::default());

        // No cancel: the failed dispatch alone must end the thread.
        worker.join().unwrap();
        assert_eq!(backend.calls().len(), 1);
    }

    #[test]
    fn test_frozen_config_reaches_the_backend() {
        let (backend, rx) = RecordingBackend::new(false);
        let config = ClickConfig {
            interval_ms: 250,
            max_clicks: -1,
            double_click: true,
        };

        let worker = ClickWorker::spawn(backend.clone(), config);
        rx.recv_timeout(Duration::from_secs(5)).unwrap();
        worker.cancel();
        worker.join().unwrap();

        let (interval, _, double) = backend.calls()[0];
        assert_eq!(interval, 250);
        assert!(double);
    }
}
