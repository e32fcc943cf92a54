//! Shared test utilities
//!
//! Common helpers used across test modules. Only compiled in test builds.

use std::cell::RefCell;

use crate::display::{DisplayTopologyController, Topology};

/// Test double that records every applied topology and returns a preset
/// status code.
pub struct RecordingController {
    /// Status code reported from every `apply_topology` call.
    pub status: i32,
    /// Topologies applied so far, in call order.
    pub applied: RefCell<Vec<Topology>>,
}

impl RecordingController {
    /// Create a controller that reports `status` on every call.
    pub fn with_status(status: i32) -> Self {
        Self {
            status,
            applied: RefCell::new(Vec::new()),
        }
    }
}

impl DisplayTopologyController for RecordingController {
    fn apply_topology(&self, topology: Topology) -> i32 {
        self.applied.borrow_mut().push(topology);
        self.status
    }
}
