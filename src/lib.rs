//! Verlet Playground – an interactive 2D particle sandbox.
//!
//! This crate exposes a small simulation engine built around Verlet
//! integration and iterative distance-constraint relaxation, plus a pointer
//! interaction layer for picking up, pinning, and wiring together particles
//! at runtime. Rendering is an external collaborator behind the
//! [`RenderBackend`] trait; the core never touches a real canvas.

pub mod config;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod utils;
pub mod world;

pub use glam::Vec2;

pub use crate::core::{
    constraint::{Constraint, DistanceConstraint},
    particle::Particle,
    types::Bounds,
};
pub use error::{PhysicsError, Result};
pub use interaction::{InteractionController, PointerButton};
pub use render::{Color, NoopRenderer, RenderBackend, Stroke};
pub use utils::allocator::{ParticleId, ParticleStore};
pub use world::VerletWorld;

use std::time::Instant;

use config::DEFAULT_FRAME_RATE;
use utils::logging::warn_if_frame_budget_exceeded;

/// High-level convenience wrapper that owns a [`VerletWorld`] and its
/// [`InteractionController`].
///
/// The host event loop drives one [`Sandbox::tick`] per display refresh and
/// forwards pointer and resize events between ticks; everything runs on a
/// single thread, so each frame observes input mutations atomically.
pub struct Sandbox {
    world: VerletWorld,
    controller: InteractionController,
}

impl Sandbox {
    /// Creates a sandbox with the provided canvas dimensions.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            world: VerletWorld::new(Bounds::new(width, height)),
            controller: InteractionController::new(),
        }
    }

    pub fn world(&self) -> &VerletWorld {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut VerletWorld {
        &mut self.world
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    /// Advances the simulation one frame and draws it: integrate, relax,
    /// then render constraints beneath particles.
    pub fn tick<R: RenderBackend>(&mut self, renderer: &mut R) {
        let start = Instant::now();

        renderer.begin_frame();
        self.world.step();
        self.world
            .render(renderer, self.controller.hovered(), self.controller.selected());

        warn_if_frame_budget_exceeded(start.elapsed(), 1000.0 / DEFAULT_FRAME_RATE);
    }

    /// Pointer move with no buttons held: hover update.
    pub fn pointer_moved(&mut self, pointer: Vec2) {
        self.controller.pointer_moved(&self.world, pointer);
    }

    pub fn pointer_pressed(&mut self, pointer: Vec2, button: PointerButton) {
        self.controller.pointer_pressed(&mut self.world, pointer, button);
    }

    pub fn pointer_dragged(&mut self, pointer: Vec2, button: PointerButton) {
        self.controller.pointer_dragged(&mut self.world, pointer, button);
    }

    pub fn pointer_released(&mut self, button: PointerButton) {
        self.controller.pointer_released(&mut self.world, button);
    }

    /// Host window resize: the collision box follows the new canvas size.
    pub fn resized(&mut self, width: f32, height: f32) {
        self.world.set_bounds(width, height);
    }
}
