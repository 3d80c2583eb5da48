use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_BOUNCE, DEFAULT_FRICTION};
use crate::core::types::Bounds;
use crate::render::{RenderBackend, Stroke, HOVER_HIGHLIGHT, SELECTION_HIGHLIGHT};

/// A Verlet point mass.
///
/// Velocity is implicit: `position - prev_position`. Pinned particles are
/// excluded from integration and constraint displacement and only move via
/// direct user placement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    pub position: Vec2,
    pub prev_position: Vec2,
    /// Velocity retained after a bounds collision, in `[0, 1]`.
    pub bounce: f32,
    /// Velocity retained per frame, in `[0, 1]`.
    pub friction: f32,
    pub pinned: bool,
    pub visible: bool,
}

impl Particle {
    /// Creates a particle at rest. Hidden by default; pinned and spawned
    /// particles are made visible by their creators.
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            prev_position: position,
            bounce: DEFAULT_BOUNCE,
            friction: DEFAULT_FRICTION,
            pinned: false,
            visible: false,
        }
    }

    /// Creates a particle with an initial implicit velocity.
    pub fn with_velocity(position: Vec2, velocity: Vec2) -> Self {
        Self {
            prev_position: position - velocity,
            ..Self::new(position)
        }
    }

    /// The implicit per-frame velocity.
    pub fn velocity(&self) -> Vec2 {
        self.position - self.prev_position
    }

    /// Moves the particle without imparting velocity (drag placement).
    pub fn place_at(&mut self, position: Vec2) {
        self.position = position;
        self.prev_position = position;
    }

    /// Advances the particle one frame and resolves bounds collision.
    ///
    /// The bounds response is deliberately approximate: each axis is
    /// clamped independently and `prev_position` on that axis is pushed
    /// ahead of the clamped position by the bounce-scaled pre-clamp
    /// velocity, producing a damped reflection on the next frame.
    pub fn integrate(&mut self, bounds: Bounds, gravity: f32) {
        if self.pinned {
            return;
        }

        let velocity = (self.position - self.prev_position) * self.friction;

        self.prev_position = self.position;
        self.position += velocity;
        self.position.y += gravity;

        if self.position.x > bounds.width {
            self.position.x = bounds.width;
            self.prev_position.x = self.position.x + velocity.x * self.bounce;
        } else if self.position.x < 0.0 {
            self.position.x = 0.0;
            self.prev_position.x = self.position.x + velocity.x * self.bounce;
        }

        if self.position.y > bounds.height {
            self.position.y = bounds.height;
            self.prev_position.y = self.position.y + velocity.y * self.bounce;
        } else if self.position.y < 0.0 {
            self.position.y = 0.0;
            self.prev_position.y = self.position.y + velocity.y * self.bounce;
        }
    }

    /// Draws the particle. Visual only; not part of the physical model.
    pub fn render<R: RenderBackend + ?Sized>(
        &self,
        renderer: &mut R,
        is_hovered: bool,
        is_selected: bool,
    ) {
        if is_hovered || is_selected {
            let color = if is_selected {
                SELECTION_HIGHLIGHT
            } else {
                HOVER_HIGHLIGHT
            };
            renderer.draw_point(self.position, Stroke::new(color, 10.0));
        }

        if !self.visible && !self.pinned {
            return;
        }

        let stroke = if self.pinned {
            Stroke::new(crate::render::Color::RED, 5.0)
        } else {
            Stroke::new(crate::render::Color::WHITE, 2.0)
        };
        renderer.draw_point(self.position, stroke);
    }
}
