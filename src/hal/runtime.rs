//! # Runtime environment classification.
//!
//! [`RuntimeKind`] tells the core whether the process is executing on real
//! robot hardware or in a simulated environment. It is a process-level
//! constant reported by the HAL; the controller and dispatcher capture it at
//! construction.

/// Kind of environment the process is running in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeKind {
    /// First-generation real robot controller.
    Hardware,
    /// Second-generation real robot controller.
    Hardware2,
    /// Desktop simulation.
    Simulation,
}

impl RuntimeKind {
    /// True when running in a simulated environment.
    #[inline]
    pub fn is_simulation(self) -> bool {
        self == RuntimeKind::Simulation
    }

    /// True when running on real robot hardware (either variant).
    #[inline]
    pub fn is_real(self) -> bool {
        matches!(self, RuntimeKind::Hardware | RuntimeKind::Hardware2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates_partition_the_kinds() {
        for kind in [
            RuntimeKind::Hardware,
            RuntimeKind::Hardware2,
            RuntimeKind::Simulation,
        ] {
            assert_ne!(kind.is_real(), kind.is_simulation());
        }
    }
}
