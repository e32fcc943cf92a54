//! Display topology switcher for workstation lock/unlock transitions
//!
//! A locked workstation can leave the displays stuck in a cloned topology
//! that persists after unlock. This tool is invoked by an external
//! lock-event hook with a single action argument and issues one
//! display-configuration call in response: `lock` collapses to a cloned
//! topology, `unlock` waits out the compositor transition and restores the
//! extended one. Outcomes are visible only in the run log; the tool never
//! prints and always exits 0.

pub mod action;
pub mod display;
pub mod log;

#[cfg(test)]
mod testutil;

// Re-export commonly used types
pub use action::{Action, UNLOCK_DELAY};
pub use display::{DisplayTopologyController, SystemDisplayController, Topology};
pub use log::RunLogger;

/// Execute one invocation: settle delay for `unlock`, one topology-apply
/// call, best-effort log line.
///
/// Returns the platform status code, which is recorded for diagnostics and
/// never branched on. When `logger` is `None` (no resolvable log location),
/// logging is skipped entirely.
pub fn run(
    action: Action,
    display: &dyn DisplayTopologyController,
    logger: Option<&RunLogger>,
) -> i32 {
    if action == Action::Unlock {
        std::thread::sleep(UNLOCK_DELAY);
    }

    let result = display.apply_topology(action.topology());

    if let Some(logger) = logger {
        // The switch has already happened; a logging failure must not undo
        // or signal anything, so the result is discarded.
        let _ = logger.append(action, result);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    use tempfile::TempDir;

    use crate::testutil::RecordingController;

    #[test]
    fn test_run_lock_applies_clone_without_delay() {
        let controller = RecordingController::with_status(0);

        let start = Instant::now();
        let result = run(Action::Lock, &controller, None);

        assert!(start.elapsed() < UNLOCK_DELAY);
        assert_eq!(result, 0);
        assert_eq!(*controller.applied.borrow(), vec![Topology::Clone]);
    }

    #[test]
    fn test_run_unlock_waits_then_extends() {
        let controller = RecordingController::with_status(0);

        let start = Instant::now();
        run(Action::Unlock, &controller, None);

        assert!(start.elapsed() >= UNLOCK_DELAY);
        assert_eq!(*controller.applied.borrow(), vec![Topology::Extend]);
    }

    #[test]
    fn test_run_logs_action_and_status() {
        let temp_dir = TempDir::new().unwrap();
        let logger = RunLogger::new(temp_dir.path());
        let controller = RecordingController::with_status(87);

        let result = run(Action::Lock, &controller, Some(&logger));

        assert_eq!(result, 87);
        let content = std::fs::read_to_string(logger.log_path()).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(content.contains("lock (result: 87)"));
    }

    #[test]
    fn test_run_swallows_logging_failure() {
        let temp_dir = TempDir::new().unwrap();
        // A plain file where the log directory should be, so every append
        // fails.
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let logger = RunLogger::new(&blocker);
        let controller = RecordingController::with_status(3);

        let result = run(Action::Lock, &controller, Some(&logger));

        // The display call still happened and its status is still returned.
        assert_eq!(result, 3);
        assert_eq!(*controller.applied.borrow(), vec![Topology::Clone]);
    }
}
