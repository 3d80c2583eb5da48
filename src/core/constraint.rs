use serde::{Deserialize, Serialize};

use crate::core::particle::Particle;
use crate::error::{PhysicsError, Result};
use crate::render::{Color, RenderBackend, Stroke};
use crate::utils::allocator::{ParticleId, ParticleStore};

/// A pairwise rule relaxed iteratively each step.
///
/// Tagged enum so the world's sweep stays a plain match when further kinds
/// (angular, max-length) are added.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Constraint {
    Distance(DistanceConstraint),
}

impl Constraint {
    pub fn relax(&self, particles: &mut ParticleStore<Particle>) {
        match self {
            Self::Distance(constraint) => constraint.relax(particles),
        }
    }

    pub fn render<R: RenderBackend + ?Sized>(
        &self,
        particles: &ParticleStore<Particle>,
        renderer: &mut R,
    ) {
        match self {
            Self::Distance(constraint) => constraint.render(particles, renderer),
        }
    }
}

/// Forces two particles toward a target separation by positional correction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceConstraint {
    pub a: ParticleId,
    pub b: ParticleId,
    pub rest_length: f32,
    /// Hidden constraints render ghosted rather than being skipped, so
    /// structural bracing stays inspectable.
    pub visible: bool,
}

impl DistanceConstraint {
    /// Builds a constraint with an explicit rest length.
    ///
    /// Fails with [`PhysicsError::InvalidConstraint`] when both endpoints
    /// are the same particle; a self-constraint would divide by zero during
    /// relaxation.
    pub fn new(a: ParticleId, b: ParticleId, rest_length: f32) -> Result<Self> {
        if a == b {
            return Err(PhysicsError::InvalidConstraint);
        }
        Ok(Self {
            a,
            b,
            rest_length,
            visible: true,
        })
    }

    /// Builds a constraint whose rest length is the endpoints' current
    /// Euclidean separation.
    pub fn from_particles(
        a: ParticleId,
        b: ParticleId,
        particles: &ParticleStore<Particle>,
    ) -> Result<Self> {
        let pos_a = particles
            .get(a)
            .ok_or(PhysicsError::UnknownParticle(a))?
            .position;
        let pos_b = particles
            .get(b)
            .ok_or(PhysicsError::UnknownParticle(b))?
            .position;
        Self::new(a, b, pos_a.distance(pos_b))
    }

    /// Marks the constraint as hidden (ghost rendering).
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Applies one positional correction toward the rest length.
    ///
    /// A pinned endpoint never moves; when only one endpoint is free it
    /// absorbs a double share, closing the whole gap alone. Coincident
    /// endpoints are treated as already satisfied and skipped.
    pub fn relax(&self, particles: &mut ParticleStore<Particle>) {
        let Some((a, b)) = particles.get2_mut(self.a, self.b) else {
            return;
        };

        if a.pinned && b.pinned {
            return;
        }

        let delta = b.position - a.position;
        let distance = delta.length();
        if distance == 0.0 {
            return;
        }

        let fraction = (self.rest_length - distance) / distance / 2.0;
        let offset = delta * fraction;

        if !a.pinned {
            let share = if b.pinned { 2.0 } else { 1.0 };
            a.position -= offset * share;
        }

        if !b.pinned {
            let share = if a.pinned { 2.0 } else { 1.0 };
            b.position += offset * share;
        }
    }

    /// Draws the constraint as a line between its endpoints.
    pub fn render<R: RenderBackend + ?Sized>(
        &self,
        particles: &ParticleStore<Particle>,
        renderer: &mut R,
    ) {
        let (Some(a), Some(b)) = (particles.get(self.a), particles.get(self.b)) else {
            return;
        };

        let color = if self.visible {
            Color::WHITE
        } else {
            Color::WHITE.with_alpha(32)
        };
        renderer.draw_line(a.position, b.position, Stroke::new(color, 1.0));
    }
}
