//! Copy Sketch - a drawing-accuracy minigame
//!
//! Core modules:
//! - `sim`: Deterministic simulation (generation, scoring, round state machine)
//! - `settings`: Data-driven game tuning, loaded from JSON
//! - `hud`: Display-ready snapshots of the round state
//! - `renderer`: Text rendering of canvases for the terminal frontend

pub mod error;
pub mod hud;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{GameError, SurfaceKind};
pub use hud::HudSnapshot;
pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the clock will accept before clamping (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Lives at the start of a session
    pub const STARTING_LIVES: u8 = 3;
    /// Primitives in the first round
    pub const STARTING_PRIMITIVES: u32 = 1;

    /// Round length in seconds
    pub const TIMER_LENGTH: f32 = 5.0;
    /// Percent correct needed to keep a life
    pub const MINIMUM_PERCENT: f32 = 70.0;
    /// Samples per axis when comparing canvases
    pub const SCORING_GRID_WIDTH: u32 = 100;

    /// Grid cells span [-CELL_RANGE, CELL_RANGE] on each axis
    pub const CELL_RANGE: i32 = 4;
    /// Canvas-local distance between adjacent cells
    pub const CELL_SPACING: f32 = 0.1;
    /// Canvas-local size of an unscaled sprite
    pub const SPRITE_SIZE: f32 = 16.0;
    /// Scale applied to every primitive. At 2 canvas units across, even a
    /// triangle on a corner cell covers over 30% of the canvas.
    pub const PRIMITIVE_SCALE: f32 = 0.125;
    /// Scale applied to every ink dot (0.2 canvas units across)
    pub const INK_DOT_SCALE: f32 = 0.0125;
    /// Largest accepted `cell_range`
    pub const MAX_CELL_RANGE: i32 = 64;
    /// Largest accepted scoring grid width
    pub const MAX_SCORING_GRID_WIDTH: u32 = 2048;

    /// Canvases cover [-CANVAS_HALF_EXTENT, CANVAS_HALF_EXTENT] on both axes
    pub const CANVAS_HALF_EXTENT: f32 = 0.5;

    /// Random cell picks before falling back to scanning free cells
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 64;
    /// Undrained events kept before the oldest are dropped
    pub const MAX_PENDING_EVENTS: usize = 64;
}

/// Rotate a vector counter-clockwise by `degrees`
#[inline]
pub fn rotate_degrees(v: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(v)
}

/// Clamp a point into the canvas square
#[inline]
pub fn clamp_to_canvas(p: Vec2) -> Vec2 {
    use consts::CANVAS_HALF_EXTENT;
    p.clamp(Vec2::splat(-CANVAS_HALF_EXTENT), Vec2::splat(CANVAS_HALF_EXTENT))
}

/// Map a world-space pointer onto a canvas placed at `origin` with side `size`
///
/// The result is clamped into the canvas, so a pointer outside the canvas
/// paints along its nearest edge.
pub fn world_to_canvas(world: Vec2, origin: Vec2, size: f32) -> Vec2 {
    if size <= 0.0 {
        return Vec2::ZERO;
    }
    clamp_to_canvas((world - origin) / size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_degrees_quarter_turn() {
        let v = rotate_degrees(Vec2::X, 90.0);
        assert!(v.x.abs() < 1e-6);
        assert!((v.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_world_to_canvas_clamps() {
        // Copy canvas centred at (5, 0), 10 units wide
        let origin = Vec2::new(5.0, 0.0);
        assert_eq!(world_to_canvas(Vec2::new(5.0, 0.0), origin, 10.0), Vec2::ZERO);
        assert_eq!(
            world_to_canvas(Vec2::new(7.5, 2.5), origin, 10.0),
            Vec2::new(0.25, 0.25)
        );
        assert_eq!(
            world_to_canvas(Vec2::new(-20.0, 9.0), origin, 10.0),
            Vec2::new(-0.5, 0.5)
        );
    }
}
