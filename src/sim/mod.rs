//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod generator;
pub mod scoring;
pub mod sdf;
pub mod shape;
pub mod state;
pub mod surface;
pub mod tick;

pub use autopilot::Autopilot;
pub use generator::{ImageGenerator, round_rng};
pub use scoring::{RoundScore, compare, percent_correct, sample_points, score_round};
pub use sdf::{sd_box, sd_circle, sd_equilateral_triangle, sd_hexagon};
pub use shape::{Primitive, ShapeKind};
pub use state::{
    GameEvent, GameOverReason, GamePhase, GameState, Round, RoundOutcome, RoundReport,
};
pub use surface::{Composition, CopySurface, Coverage};
pub use tick::{FrameClock, TickInput, start_game, tick};
