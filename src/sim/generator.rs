//! Random reference image generation
//!
//! Primitives are dropped onto a square grid of cells, one per cell, with a
//! random shape and rotation.

use std::collections::HashSet;

use glam::IVec2;
use rand::Rng;
use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_pcg::Pcg32;

use super::shape::{Primitive, ShapeKind};
use super::surface::Composition;
use crate::consts::{MAX_CELL_RANGE, MAX_PLACEMENT_ATTEMPTS};
use crate::error::GameError;
use crate::settings::Settings;

/// Seeded RNG for one round.
///
/// Mixing the run seed with a golden-ratio hash of the round serial gives
/// variety between rounds while keeping a run reproducible.
pub fn round_rng(seed: u64, round_serial: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed.wrapping_add(round_serial.wrapping_mul(2654435761)))
}

/// Builds reference compositions from the generation settings
#[derive(Debug, Clone)]
pub struct ImageGenerator {
    cell_range: i32,
    cell_spacing: f32,
    primitive_size: f32,
    palette: Vec<ShapeKind>,
}

impl ImageGenerator {
    pub fn new(settings: &Settings) -> Self {
        let palette = if settings.palette.is_empty() {
            ShapeKind::ALL.to_vec()
        } else {
            settings.palette.clone()
        };
        Self {
            cell_range: settings.cell_range.clamp(0, MAX_CELL_RANGE),
            cell_spacing: settings.cell_spacing,
            primitive_size: settings.sprite_size * settings.primitive_scale,
            palette,
        }
    }

    /// Number of distinct cells a composition can use
    pub fn available_cells(&self) -> u32 {
        let side = 2 * u64::from(self.cell_range.unsigned_abs()) + 1;
        u32::try_from(side * side).unwrap_or(u32::MAX)
    }

    /// Generate a composition of `count` primitives on distinct cells
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: u32,
    ) -> Result<Composition, GameError> {
        let available = self.available_cells();
        if count > available {
            return Err(GameError::GenerationExhausted {
                requested: count,
                available,
            });
        }

        let mut used = HashSet::with_capacity(count as usize);
        let mut primitives = Vec::with_capacity(count as usize);

        for _ in 0..count {
            let kind = self.pick_shape(rng);
            let cell = self.pick_cell(rng, &used).ok_or(GameError::GenerationExhausted {
                requested: count,
                available,
            })?;
            used.insert(cell);

            // Whole degrees, [0, 360)
            let rotation_deg = rng.random_range(0..360) as f32;

            primitives.push(Primitive {
                kind,
                cell,
                position: cell.as_vec2() * self.cell_spacing,
                rotation_deg,
                size: self.primitive_size,
            });
        }

        log::debug!("Generated composition with {} primitives", primitives.len());
        Ok(Composition::from_primitives(primitives))
    }

    fn pick_shape<R: Rng + ?Sized>(&self, rng: &mut R) -> ShapeKind {
        self.palette[rng.random_range(0..self.palette.len())]
    }

    /// Pick an unused cell: rejection sampling first, then a uniform pick
    /// among the remaining free cells once the attempt budget runs out.
    fn pick_cell<R: Rng + ?Sized>(&self, rng: &mut R, used: &HashSet<IVec2>) -> Option<IVec2> {
        let range = self.cell_range;

        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let cell = IVec2::new(
                rng.random_range(-range..=range),
                rng.random_range(-range..=range),
            );
            if !used.contains(&cell) {
                return Some(cell);
            }
        }

        let free: Vec<IVec2> = (-range..=range)
            .flat_map(|x| (-range..=range).map(move |y| IVec2::new(x, y)))
            .filter(|cell| !used.contains(cell))
            .collect();
        free.choose(rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn generator() -> ImageGenerator {
        ImageGenerator::new(&Settings::default())
    }

    #[test]
    fn test_generate_count_and_ranges() {
        let mut rng = round_rng(42, 0);
        let composition = generator().generate(&mut rng, 12).unwrap();
        assert_eq!(composition.len(), 12);

        for prim in composition.primitives() {
            assert!(prim.cell.x.abs() <= 4 && prim.cell.y.abs() <= 4);
            assert!((prim.position - prim.cell.as_vec2() * 0.1).length() < 1e-6);
            assert!((0.0..360.0).contains(&prim.rotation_deg));
            assert_eq!(prim.rotation_deg.fract(), 0.0);
            assert!((prim.size - 2.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_generate_full_grid() {
        let mut rng = round_rng(7, 3);
        let composition = generator().generate(&mut rng, 81).unwrap();
        let cells: HashSet<IVec2> = composition.primitives().iter().map(|p| p.cell).collect();
        assert_eq!(cells.len(), 81);
    }

    #[test]
    fn test_generate_exhausted() {
        let mut rng = round_rng(7, 3);
        assert_eq!(
            generator().generate(&mut rng, 82),
            Err(GameError::GenerationExhausted {
                requested: 82,
                available: 81
            })
        );
    }

    #[test]
    fn test_single_cell_grid() {
        let settings = Settings {
            cell_range: 0,
            ..Settings::default()
        };
        let generator = ImageGenerator::new(&settings);
        let mut rng = round_rng(1, 1);
        let composition = generator.generate(&mut rng, 1).unwrap();
        assert_eq!(composition.primitives()[0].cell, IVec2::ZERO);
        assert!(generator.generate(&mut rng, 2).is_err());
    }

    #[test]
    fn test_oversized_range_is_capped() {
        let settings = Settings {
            cell_range: 40_000,
            ..Settings::default()
        };
        let generator = ImageGenerator::new(&settings);
        let side = 2 * MAX_CELL_RANGE as u32 + 1;
        assert_eq!(generator.available_cells(), side * side);

        let composition = generator.generate(&mut round_rng(4, 0), 3).unwrap();
        assert!(composition
            .primitives()
            .iter()
            .all(|p| p.cell.x.abs() <= MAX_CELL_RANGE && p.cell.y.abs() <= MAX_CELL_RANGE));
    }

    #[test]
    fn test_palette_restricts_shapes() {
        let settings = Settings {
            palette: vec![ShapeKind::Triangle],
            ..Settings::default()
        };
        let mut rng = round_rng(9, 0);
        let composition = ImageGenerator::new(&settings).generate(&mut rng, 20).unwrap();
        assert!(composition
            .primitives()
            .iter()
            .all(|p| p.kind == ShapeKind::Triangle));
    }

    #[test]
    fn test_same_seed_same_composition() {
        let a = generator().generate(&mut round_rng(123, 5), 10).unwrap();
        let b = generator().generate(&mut round_rng(123, 5), 10).unwrap();
        assert_eq!(a, b);
        let c = generator().generate(&mut round_rng(123, 6), 10).unwrap();
        assert_ne!(a, c);
    }

    proptest! {
        #[test]
        fn prop_generate_distinct_cells(seed in any::<u64>(), count in 1u32..=81) {
            let composition = generator().generate(&mut round_rng(seed, 0), count).unwrap();
            prop_assert_eq!(composition.len(), count as usize);
            let cells: HashSet<IVec2> = composition.primitives().iter().map(|p| p.cell).collect();
            prop_assert_eq!(cells.len(), count as usize);
        }

        #[test]
        fn prop_generate_over_capacity_fails(seed in any::<u64>(), extra in 1u32..200) {
            let result = generator().generate(&mut round_rng(seed, 0), 81 + extra);
            let is_exhausted = matches!(result, Err(GameError::GenerationExhausted { .. }));
            prop_assert!(is_exhausted);
        }
    }
}
