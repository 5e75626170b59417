//! Invocation of the external click helper
//!
//! The actual click injection lives in a standalone helper executable. Each
//! click-loop iteration launches it as a child process with positional
//! arguments; the helper's timing precision, exit codes and side effects are
//! its own business.

use std::process::Command;
use tracing::{debug, warn};

use crate::config::ClickConfig;
use crate::ClickerError;

/// Default helper program, resolved through PATH or the working directory.
pub const DEFAULT_HELPER: &str = "autoclicker.exe";

/// Dispatch seam between the click loop and the helper process.
///
/// The loop only needs "fire one invocation"; tests substitute a recording
/// fake.
pub trait ClickBackend: Send + Sync {
    /// Fire one helper invocation for the given frozen config and the
    /// remaining click budget.
    fn dispatch(&self, config: &ClickConfig, remaining_clicks: i64) -> Result<(), ClickerError>;
}

/// Backend that shells out to the helper executable
pub struct ProcessClicker {
    program: String,
}

impl ProcessClicker {
    /// Create a backend for the given helper program.
    ///
    /// The program is not probed here; a missing helper only surfaces when
    /// the first invocation fails to spawn.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Helper program this backend launches
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for ProcessClicker {
    fn default() -> Self {
        Self::new(DEFAULT_HELPER)
    }
}

impl ClickBackend for ProcessClicker {
    fn dispatch(&self, config: &ClickConfig, remaining_clicks: i64) -> Result<(), ClickerError> {
        debug!(
            "Launching '{}' (interval={}ms, clicks={}, double={})",
            self.program, config.interval_ms, remaining_clicks, config.double_click
        );

        // Helper argument order: interval, click budget, single-run marker,
        // double-click flag.
        let status = Command::new(&self.program)
            .arg(config.interval_ms.to_string())
            .arg(remaining_clicks.to_string())
            .arg("1")
            .arg(if config.double_click { "1" } else { "0" })
            .status()
            .map_err(|source| ClickerError::SpawnHelper {
                program: self.program.clone(),
                source,
            })?;

        // The helper's exit status is informational only.
        if !status.success() {
            warn!("Click helper exited with {}", status);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_backend_targets_helper_executable() {
        let backend = ProcessClicker::default();
        assert_eq!(backend.program(), DEFAULT_HELPER);
    }

    #[test]
    fn test_missing_helper_fails_on_dispatch_not_construction() {
        // Construction never probes the program.
        let backend = ProcessClicker::new("definitely-not-a-real-helper");

        let err = backend
            .dispatch(&ClickConfig::default(), -1)
            .expect_err("spawn should fail");
        match err {
            ClickerError::SpawnHelper { program, .. } => {
                assert_eq!(program, "definitely-not-a-real-helper");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_helper_exit_status_does_not_fail_dispatch() {
        // `false` exits non-zero; dispatch still reports success.
        let backend = ProcessClicker::new("false");
        backend
            .dispatch(&ClickConfig::default(), 3)
            .expect("non-zero exit is not an error");
    }
}
