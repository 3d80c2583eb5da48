use serde::{Deserialize, Serialize};

/// Common math types re-exported for convenience.
pub use glam::Vec2;

/// Axis-aligned world box particles collide against, origin at top-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
