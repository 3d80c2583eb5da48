use crate::{
    config::{RELAXATION_PASSES, WORLD_GRAVITY},
    core::{
        constraint::{Constraint, DistanceConstraint},
        particle::Particle,
        types::Bounds,
    },
    error::Result,
    render::RenderBackend,
    utils::{
        allocator::{ParticleId, ParticleStore},
        logging::ScopedTimer,
    },
};

/// Central simulation container: particles, constraints, and world bounds.
///
/// Collections only grow during a session; constraint insertion order is
/// relaxation order within each pass, so the solve is order-dependent like
/// any iterative relaxation scheme.
pub struct VerletWorld {
    pub particles: ParticleStore<Particle>,
    pub constraints: Vec<Constraint>,
    pub bounds: Bounds,
    pub gravity: f32,
    pub relaxation_passes: u32,
}

impl VerletWorld {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            particles: ParticleStore::new(),
            constraints: Vec::new(),
            bounds,
            gravity: WORLD_GRAVITY,
            relaxation_passes: RELAXATION_PASSES,
        }
    }

    pub fn add_particle(&mut self, particle: Particle) -> ParticleId {
        self.particles.push(particle)
    }

    pub fn particle(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.get(id)
    }

    pub fn particle_mut(&mut self, id: ParticleId) -> Option<&mut Particle> {
        self.particles.get_mut(id)
    }

    /// Inserts an already-validated constraint.
    pub fn add_constraint(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    /// Builds a distance constraint at the endpoints' current separation and
    /// inserts it. Nothing is inserted when construction fails.
    pub fn add_distance_constraint(&mut self, a: ParticleId, b: ParticleId) -> Result<()> {
        let constraint = DistanceConstraint::from_particles(a, b, &self.particles)?;
        self.constraints.push(Constraint::Distance(constraint));
        Ok(())
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Revalidates the collision box, e.g. after a host window resize. The
    /// next integrate pass re-clamps particles against the new box.
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        self.bounds = Bounds::new(width, height);
    }

    /// Advances the simulation one frame: integrate every particle once,
    /// then run the fixed budget of relaxation passes over all constraints
    /// in insertion order.
    pub fn step(&mut self) {
        {
            let _timer = ScopedTimer::new("integrate");
            for particle in self.particles.iter_mut() {
                particle.integrate(self.bounds, self.gravity);
            }
        }

        {
            let _timer = ScopedTimer::new("relax");
            for _ in 0..self.relaxation_passes {
                for constraint in &self.constraints {
                    constraint.relax(&mut self.particles);
                }
            }
        }
    }

    /// Draws all constraints, then all particles, so edges layer beneath
    /// points.
    pub fn render<R: RenderBackend + ?Sized>(
        &self,
        renderer: &mut R,
        hovered: Option<ParticleId>,
        selected: Option<ParticleId>,
    ) {
        for constraint in &self.constraints {
            constraint.render(&self.particles, renderer);
        }

        for id in self.particles.ids() {
            if let Some(particle) = self.particles.get(id) {
                particle.render(renderer, hovered == Some(id), selected == Some(id));
            }
        }
    }
}
