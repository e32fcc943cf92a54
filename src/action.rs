//! Lock-event actions and the topology each one selects

use std::time::Duration;

use clap::ValueEnum;

use crate::display::Topology;

/// Settle delay before the unlock switch. The desktop compositor needs time
/// to finish its unlock transition before a mode switch will stick; 500 ms
/// is a tuned value, not a computed one. Lower it if extending feels slow,
/// raise it if the switch occasionally fails to take.
pub const UNLOCK_DELAY: Duration = Duration::from_millis(500);

/// A workstation lock-event action, taken from the first CLI argument.
///
/// Parsed case-insensitively; anything that is not `lock` or `unlock` means
/// the invocation is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// The workstation is locking: collapse to a cloned topology.
    Lock,
    /// The workstation was unlocked: restore the extended topology.
    Unlock,
}

impl Action {
    /// The display topology this action requests.
    #[must_use]
    pub const fn topology(self) -> Topology {
        match self {
            Self::Lock => Topology::Clone,
            Self::Unlock => Topology::Extend,
        }
    }

    /// Lowercase name, as written to the log line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lock => "lock",
            Self::Unlock => "unlock",
        }
    }
}
