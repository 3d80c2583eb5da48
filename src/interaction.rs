//! Pointer-driven interaction: hover, drag, pin, and runtime topology edits.

use std::collections::HashSet;

use glam::Vec2;
use log::{debug, warn};

use crate::config::PICK_RADIUS;
use crate::core::constraint::{Constraint, DistanceConstraint};
use crate::core::particle::Particle;
use crate::utils::allocator::ParticleId;
use crate::world::VerletWorld;

/// Pointer button identity delivered by the host input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Side length of the spawned quad, in members.
const GROUP_SIZE: usize = 4;

/// Translates pointer events into selection, pinning, and dynamic topology
/// edits on a [`VerletWorld`].
///
/// Right-click spawning follows a quad-building protocol: the first four
/// spawns are chained into a ring with two hidden diagonal braces; later
/// spawns are threaded onto the quad's corners in rotation.
#[derive(Debug, Default)]
pub struct InteractionController {
    selected: Option<ParticleId>,
    hovered: Option<ParticleId>,
    pending_group: Vec<ParticleId>,
    group_insert_index: usize,
    frozen: HashSet<ParticleId>,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<ParticleId> {
        self.selected
    }

    pub fn hovered(&self) -> Option<ParticleId> {
        self.hovered
    }

    pub fn pending_group(&self) -> &[ParticleId] {
        &self.pending_group
    }

    pub fn frozen_count(&self) -> usize {
        self.frozen.len()
    }

    /// Hover update. The first particle within [`PICK_RADIUS`] in iteration
    /// order wins immediately; otherwise the globally nearest particle is
    /// hovered. Only an empty world leaves nothing hovered.
    pub fn pointer_moved(&mut self, world: &VerletWorld, pointer: Vec2) {
        let mut closest = None;
        let mut closest_distance = f32::INFINITY;

        for id in world.particles.ids() {
            let Some(particle) = world.particles.get(id) else {
                continue;
            };
            let distance = pointer.distance(particle.position);

            if distance < PICK_RADIUS {
                self.hovered = Some(id);
                return;
            }

            if distance < closest_distance {
                closest = Some(id);
                closest_distance = distance;
            }
        }

        self.hovered = closest;
    }

    pub fn pointer_pressed(
        &mut self,
        world: &mut VerletWorld,
        pointer: Vec2,
        button: PointerButton,
    ) {
        match button {
            PointerButton::Primary | PointerButton::Middle => self.pick_up(world),
            PointerButton::Secondary => self.spawn(world, pointer),
        }
    }

    /// Drag update: the selection tracks the pointer while pinned, with its
    /// previous position held equal so the implicit velocity stays zero and
    /// the particle does not fling on release.
    pub fn pointer_dragged(
        &mut self,
        world: &mut VerletWorld,
        pointer: Vec2,
        button: PointerButton,
    ) {
        if !matches!(button, PointerButton::Primary | PointerButton::Middle) {
            return;
        }
        let Some(id) = self.selected else {
            return;
        };
        if let Some(particle) = world.particle_mut(id) {
            particle.pinned = true;
            particle.place_at(pointer);
        }
    }

    pub fn pointer_released(&mut self, world: &mut VerletWorld, button: PointerButton) {
        if button != PointerButton::Primary {
            return;
        }
        if let Some(id) = self.selected.take() {
            if let Some(particle) = world.particle_mut(id) {
                particle.pinned = false;
            }
        }
    }

    /// Picks up the hovered particle, releasing every frozen spawn and
    /// abandoning any in-progress quad.
    fn pick_up(&mut self, world: &mut VerletWorld) {
        let Some(id) = self.hovered.take() else {
            return;
        };

        self.selected = Some(id);
        for frozen_id in self.frozen.drain() {
            if let Some(particle) = world.particle_mut(frozen_id) {
                particle.pinned = false;
            }
        }
        self.pending_group.clear();
        self.group_insert_index = 0;

        debug!("picked up particle {:?}", id);
    }

    /// Spawns a pinned particle at the pointer and wires it into the world
    /// per the quad protocol.
    fn spawn(&mut self, world: &mut VerletWorld, pointer: Vec2) {
        let mut particle = Particle::new(pointer);
        particle.visible = true;
        particle.pinned = true;

        let id = world.add_particle(particle);
        self.frozen.insert(id);
        self.selected = Some(id);
        self.hovered = None;

        if self.pending_group.len() < GROUP_SIZE {
            self.pending_group.push(id);
            let appended_at = self.group_insert_index;
            self.group_insert_index += 1;

            if appended_at > 0 {
                let previous = self.pending_group[appended_at - 1];
                self.connect(world, id, previous);
            }

            if self.pending_group.len() == GROUP_SIZE {
                self.close_quad(world);
            }
        } else if self.frozen.len() > GROUP_SIZE {
            let corner = self.pending_group[self.group_insert_index];
            self.connect(world, corner, id);
            self.group_insert_index = (self.group_insert_index + 1) % self.pending_group.len();
            self.selected = Some(self.pending_group[self.group_insert_index]);
        }

        debug!(
            "spawned particle {:?} at ({:.1}, {:.1}), group {}/{}",
            id,
            pointer.x,
            pointer.y,
            self.pending_group.len(),
            GROUP_SIZE
        );
    }

    /// Closes the quad ring and adds the two hidden diagonal braces. Runs
    /// exactly once, on the append that makes the group four members.
    fn close_quad(&mut self, world: &mut VerletWorld) {
        let group = &self.pending_group;

        self.connect(world, group[0], group[3]);

        for (a, b) in [(group[0], group[2]), (group[1], group[3])] {
            match DistanceConstraint::from_particles(a, b, &world.particles) {
                Ok(brace) => world.add_constraint(Constraint::Distance(brace.hidden())),
                Err(err) => warn!("skipping brace {:?}-{:?}: {}", a, b, err),
            }
        }

        self.group_insert_index = 0;
        self.selected = Some(self.pending_group[0]);
    }

    fn connect(&self, world: &mut VerletWorld, a: ParticleId, b: ParticleId) {
        if let Err(err) = world.add_distance_constraint(a, b) {
            warn!("skipping constraint {:?}-{:?}: {}", a, b, err);
        }
    }
}
