//! Similarity scoring by grid sampling
//!
//! A `w × w` grid of sample points is laid over the shared canvas square.
//! A sample matches when both canvases agree on whether it carries ink, and
//! the score is the percentage of matching samples. Containment is tested
//! at the sample point only, so thin strokes can fall between samples at
//! low resolutions.

use glam::Vec2;

use super::surface::{Composition, CopySurface, Coverage};
use crate::error::{GameError, SurfaceKind};

/// Outcome of comparing two canvases
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundScore {
    pub matching: u64,
    pub total: u64,
    /// 100 × matching / total
    pub percent: f32,
}

/// Canvas-local sample points, row by row
///
/// For an even width the points are `k / w` for `k` in `[-w/2, w/2)`.
pub fn sample_points(grid_width: u32) -> impl Iterator<Item = Vec2> {
    let w = grid_width.max(1) as i64;
    let half = w / 2;
    (0..w).flat_map(move |i| {
        let x = (i - half) as f32 / w as f32;
        (0..w).map(move |j| Vec2::new(x, (j - half) as f32 / w as f32))
    })
}

/// Compare two canvases on a `grid_width × grid_width` grid
pub fn compare<R, C>(reference: &R, copy: &C, grid_width: u32) -> RoundScore
where
    R: Coverage + ?Sized,
    C: Coverage + ?Sized,
{
    let w = grid_width.max(1);
    let total = u64::from(w) * u64::from(w);
    let matching = sample_points(w)
        .filter(|&p| reference.has_ink(p) == copy.has_ink(p))
        .count() as u64;

    RoundScore {
        matching,
        total,
        percent: 100.0 * matching as f32 / total as f32,
    }
}

/// Percent of grid samples on which both canvases agree, in [0, 100]
pub fn percent_correct<R, C>(reference: &R, copy: &C, grid_width: u32) -> f32
where
    R: Coverage + ?Sized,
    C: Coverage + ?Sized,
{
    compare(reference, copy, grid_width).percent
}

/// Score a round's canvases, failing fast if either one is missing
pub fn score_round(
    reference: Option<&Composition>,
    copy: Option<&CopySurface>,
    grid_width: u32,
) -> Result<RoundScore, GameError> {
    let reference = reference.ok_or(GameError::MissingSurface(SurfaceKind::Reference))?;
    let copy = copy.ok_or(GameError::MissingSurface(SurfaceKind::Copy))?;
    Ok(compare(reference, copy, grid_width))
}
