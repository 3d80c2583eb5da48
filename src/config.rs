//! Global configuration constants for the Verlet Playground sandbox.

/// Default gravity applied to every free particle, in units per frame²
/// (canvas space, +y is down).
pub const WORLD_GRAVITY: f32 = 0.5;

/// Default bounce factor applied when a particle hits the world bounds.
pub const DEFAULT_BOUNCE: f32 = 0.9;

/// Default per-frame friction applied to the implicit velocity.
pub const DEFAULT_FRICTION: f32 = 0.999;

/// Number of constraint relaxation passes performed per step.
pub const RELAXATION_PASSES: u32 = 10;

/// Pointer distance (in canvas units) within which a particle is hovered.
pub const PICK_RADIUS: f32 = 10.0;

/// Nominal frame rate the host scheduler is expected to tick at.
pub const DEFAULT_FRAME_RATE: f32 = 60.0;
