//! Error types for the sandbox.

use std::fmt;

use crate::utils::allocator::ParticleId;

/// Errors raised by fallible sandbox operations.
///
/// The simulation itself never fails once its collections are built; the
/// only fallible surface is constraint construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysicsError {
    /// A constraint's two endpoints refer to the same particle.
    InvalidConstraint,
    /// A particle id does not exist in the world's particle store.
    UnknownParticle(ParticleId),
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConstraint => {
                write!(f, "cannot constrain a particle to itself")
            }
            Self::UnknownParticle(id) => {
                write!(f, "unknown particle id {}", id.index())
            }
        }
    }
}

impl std::error::Error for PhysicsError {}

/// Convenient Result type alias for sandbox operations.
pub type Result<T> = std::result::Result<T, PhysicsError>;
