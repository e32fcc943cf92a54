//! Display topology control via the platform display-configuration call

/// Logical arrangement of the connected displays into output surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Mirror the same image onto every connected display.
    Clone,
    /// Give each display its own independent desktop region.
    Extend,
}

/// Capability for applying a display topology.
///
/// The returned status code is platform-defined (0 conventionally means
/// success). Callers record it for diagnostics and never branch on it.
pub trait DisplayTopologyController {
    /// Apply `topology` to the connected displays, returning the platform
    /// status code.
    fn apply_topology(&self, topology: Topology) -> i32;
}

/// Controller backed by the operating system's display-configuration call.
///
/// On Windows this issues `SetDisplayConfig` with empty path and mode
/// arrays, which leaves the driver to resolve the requested topology from
/// the outputs it already knows about. On other targets it is a stub that
/// reports success, so the surrounding logic stays portable.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemDisplayController;

impl DisplayTopologyController for SystemDisplayController {
    fn apply_topology(&self, topology: Topology) -> i32 {
        apply(topology)
    }
}

#[cfg(windows)]
fn apply(topology: Topology) -> i32 {
    use windows::Win32::Devices::Display::{
        SetDisplayConfig, SDC_APPLY, SDC_TOPOLOGY_CLONE, SDC_TOPOLOGY_EXTEND,
    };

    let flags = match topology {
        Topology::Clone => SDC_APPLY | SDC_TOPOLOGY_CLONE,
        Topology::Extend => SDC_APPLY | SDC_TOPOLOGY_EXTEND,
    };

    // No path or mode arrays: the topology flag alone is enough, the driver
    // fills in the layout from the currently attached outputs.
    unsafe { SetDisplayConfig(None, None, flags) }
}

#[cfg(not(windows))]
fn apply(_topology: Topology) -> i32 {
    0
}
