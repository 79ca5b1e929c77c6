//! Host environment readiness gate.
//!
//! Whether the model environment is loaded and compatible is decided by the
//! caller, not by ambient global state: the readiness check is an explicit
//! dependency passed into the batch entry point, so tests can fake it.

/// Readiness gate for the host model environment.
pub trait HostEnv {
    /// True when the host model is loaded and compatible.
    fn is_ready(&self) -> bool;
}

/// A plain boolean works as a trivial gate.
impl HostEnv for bool {
    fn is_ready(&self) -> bool {
        *self
    }
}

/// Host gate that is always ready. Useful for standalone use and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadyHost;

impl HostEnv for ReadyHost {
    fn is_ready(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_gate() {
        assert!(true.is_ready());
        assert!(!false.is_ready());
    }

    #[test]
    fn test_ready_host() {
        assert!(ReadyHost.is_ready());
    }
}
