//! Draw contract between the simulation and its rendering collaborator.
//!
//! The core never talks to a real canvas; it calls into a [`RenderBackend`]
//! once per tick. Hosts implement the trait over whatever surface they have,
//! and tests run against [`NoopRenderer`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// Highlight ring drawn under a selected particle.
pub const SELECTION_HIGHLIGHT: Color = Color::rgb(128, 170, 255);

/// Highlight ring drawn under a hovered particle.
pub const HOVER_HIGHLIGHT: Color = Color::rgba(255, 0, 0, 128);

/// Stroke style for points and lines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub weight: f32,
}

impl Stroke {
    pub fn new(color: Color, weight: f32) -> Self {
        Self { color, weight }
    }
}

/// Trait implemented by rendering collaborators.
pub trait RenderBackend {
    /// Current drawing surface width in canvas units.
    fn width(&self) -> f32;

    /// Current drawing surface height in canvas units.
    fn height(&self) -> f32;

    /// Called once at the start of every tick, before any draw call.
    fn begin_frame(&mut self) {}

    fn draw_point(&mut self, position: Vec2, stroke: Stroke);

    fn draw_line(&mut self, a: Vec2, b: Vec2, stroke: Stroke);

    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32);
}

/// Default backend that draws nothing. Used headless and in tests.
#[derive(Debug, Clone, Copy)]
pub struct NoopRenderer {
    pub width: f32,
    pub height: f32,
}

impl NoopRenderer {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for NoopRenderer {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

impl RenderBackend for NoopRenderer {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn draw_point(&mut self, _position: Vec2, _stroke: Stroke) {}

    fn draw_line(&mut self, _a: Vec2, _b: Vec2, _stroke: Stroke) {}

    fn draw_text(&mut self, _text: &str, _x: f32, _y: f32, _size: f32) {}
}
