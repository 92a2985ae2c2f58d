//! The two canvases compared at the end of a round
//!
//! Both live in the same canvas-local square, [-0.5, 0.5] on each axis.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::shape::Primitive;
use crate::clamp_to_canvas;

/// Anything that can report whether a canvas-local point carries ink
pub trait Coverage {
    fn has_ink(&self, point: Vec2) -> bool;
}

/// The reference image: an ordered, read-only set of primitives
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    primitives: Vec<Primitive>,
}

impl Composition {
    pub(crate) fn from_primitives(primitives: Vec<Primitive>) -> Self {
        Self { primitives }
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

impl Coverage for Composition {
    fn has_ink(&self, point: Vec2) -> bool {
        self.primitives.iter().any(|p| p.contains(point))
    }
}

/// The player's canvas: an append-only list of ink dots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopySurface {
    dots: Vec<Vec2>,
    dot_radius: f32,
}

impl CopySurface {
    pub fn new(dot_radius: f32) -> Self {
        Self {
            dots: Vec::new(),
            dot_radius,
        }
    }

    /// Stamp a dot at `point`, clamped into the canvas. Returns where it landed.
    pub fn add_ink(&mut self, point: Vec2) -> Vec2 {
        let point = clamp_to_canvas(point);
        self.dots.push(point);
        point
    }

    pub fn dots(&self) -> &[Vec2] {
        &self.dots
    }

    pub fn dot_radius(&self) -> f32 {
        self.dot_radius
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }
}

impl Coverage for CopySurface {
    fn has_ink(&self, point: Vec2) -> bool {
        let r2 = self.dot_radius * self.dot_radius;
        self.dots.iter().any(|d| d.distance_squared(point) <= r2)
    }
}
