//! Primitive shapes placed on the reference canvas
//!
//! Each shape is a unit sprite: it fits inside a 1×1 square centred on the
//! origin. Its canvas-local size is `sprite_size × scale`.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::sdf::{sd_box, sd_circle, sd_equilateral_triangle, sd_hexagon};
use crate::rotate_degrees;

/// Shape types available to the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
    Hexagon,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Circle,
        ShapeKind::Square,
        ShapeKind::Triangle,
        ShapeKind::Hexagon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Square => "Square",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::Hexagon => "Hexagon",
        }
    }

    /// Signed distance in unit-sprite space
    pub fn unit_distance(&self, p: Vec2) -> f32 {
        match self {
            ShapeKind::Circle => sd_circle(p, Vec2::ZERO, 0.5),
            ShapeKind::Square => sd_box(p, Vec2::splat(0.5)),
            // Shifted down so the bounding box, not the centroid, is centred
            ShapeKind::Triangle => {
                sd_equilateral_triangle(p + Vec2::new(0.0, 3.0_f32.sqrt() / 12.0), 0.5)
            }
            // Circumradius 0.5 so the corners touch the sprite edge
            ShapeKind::Hexagon => sd_hexagon(p, 0.5 * 3.0_f32.sqrt() / 2.0),
        }
    }
}

/// A placed primitive (immutable once generated)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    pub kind: ShapeKind,
    /// Grid cell the primitive was placed on
    pub cell: IVec2,
    /// Canvas-local centre
    pub position: Vec2,
    /// Counter-clockwise rotation in degrees, [0, 360)
    pub rotation_deg: f32,
    /// Canvas-local size of the shape (sprite size × primitive scale)
    pub size: f32,
}

impl Primitive {
    /// Signed distance from a canvas-local point to this primitive
    pub fn signed_distance(&self, p: Vec2) -> f32 {
        let local = rotate_degrees(p - self.position, -self.rotation_deg) / self.size;
        self.kind.unit_distance(local) * self.size
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        self.signed_distance(p) <= 0.0
    }

    /// Radius of a circle around `position` that encloses the whole shape
    pub fn bounding_radius(&self) -> f32 {
        self.size * std::f32::consts::FRAC_1_SQRT_2
    }
}
