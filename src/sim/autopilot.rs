//! Demo player that traces the reference image
//!
//! Used by the terminal frontend and tests. Each round it plans a lattice of
//! ink dots inside every primitive, then stamps one dot per tick. Lower
//! accuracy jitters each dot further from its planned spot.

use std::collections::VecDeque;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{GamePhase, GameState};
use super::surface::Composition;
use super::tick::TickInput;
use crate::consts::CANVAS_HALF_EXTENT;

/// Largest jitter, reached at zero accuracy (canvas-local units)
const MAX_JITTER: f32 = 0.2;

#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    accuracy: f32,
    planned_round: Option<u32>,
    strokes: VecDeque<Vec2>,
}

impl Autopilot {
    /// `accuracy` is clamped to 0..=1; 1 traces without jitter
    pub fn new(seed: u64, accuracy: f32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            accuracy: accuracy.clamp(0.0, 1.0),
            planned_round: None,
            strokes: VecDeque::new(),
        }
    }

    /// Decide this tick's input from the current state
    pub fn next_input(&mut self, state: &GameState) -> TickInput {
        match state.phase {
            GamePhase::PreRound => TickInput {
                start: true,
                ..Default::default()
            },
            GamePhase::Drawing => {
                if let Some(round) = state.round() {
                    if self.planned_round != Some(round.number) {
                        self.plan(&round.reference, round.copy.dot_radius());
                        self.planned_round = Some(round.number);
                    }
                }
                match self.strokes.pop_front() {
                    Some(p) => TickInput {
                        pointer: Some(p),
                        pen_down: true,
                        ..Default::default()
                    },
                    None => TickInput::default(),
                }
            }
            _ => TickInput::default(),
        }
    }

    /// Queue dots over the canvas wherever the reference has ink
    fn plan(&mut self, reference: &Composition, dot_radius: f32) {
        self.strokes.clear();

        let spacing = dot_radius.max(0.005) * 1.5;
        let jitter = (1.0 - self.accuracy) * MAX_JITTER;
        let steps = (2.0 * CANVAS_HALF_EXTENT / spacing).ceil() as i32;
        // Keep dots from bleeding far past the edge
        let inset = -0.5 * dot_radius;

        for i in 0..=steps {
            for j in 0..=steps {
                let p = Vec2::splat(-CANVAS_HALF_EXTENT) + Vec2::new(i as f32, j as f32) * spacing;
                if reference.primitives().iter().any(|prim| prim.signed_distance(p) <= inset) {
                    let offset = self.jitter(jitter);
                    self.strokes.push_back(p + offset);
                }
            }
        }

        // Shapes thinner than a dot still get one stamp
        for prim in reference.primitives() {
            let reached = self.strokes.iter().any(|&p| prim.signed_distance(p) <= 0.0);
            if !reached {
                let offset = self.jitter(jitter);
                self.strokes.push_back(prim.position + offset);
            }
        }

        log::debug!("Autopilot planned {} dots", self.strokes.len());
    }

    fn jitter(&mut self, amount: f32) -> Vec2 {
        if amount <= 0.0 {
            return Vec2::ZERO;
        }
        Vec2::new(
            self.rng.random_range(-amount..=amount),
            self.rng.random_range(-amount..=amount),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::settings::Settings;
    use crate::sim::state::{GameEvent, RoundReport};
    use crate::sim::tick::tick;

    fn play_first_round(accuracy: f32) -> RoundReport {
        let mut state = GameState::new(2024, Settings::default());
        let mut pilot = Autopilot::new(1, accuracy);
        for _ in 0..1_000 {
            let input = pilot.next_input(&state);
            tick(&mut state, &input, SIM_DT);
            for event in state.drain_events() {
                if let GameEvent::RoundEnded(report) = event {
                    return report;
                }
            }
        }
        panic!("round never ended");
    }

    #[test]
    fn test_starts_from_pre_round() {
        let state = GameState::new(1, Settings::default());
        let mut pilot = Autopilot::new(1, 1.0);
        assert!(pilot.next_input(&state).start);
    }

    #[test]
    fn test_plans_inside_reference() {
        let mut state = GameState::new(5, Settings::default());
        let mut pilot = Autopilot::new(1, 1.0);
        let input = pilot.next_input(&state);
        tick(&mut state, &input, SIM_DT);

        let input = pilot.next_input(&state);
        let pointer = input.pointer.unwrap();
        assert!(input.pen_down);
        let reference = &state.round().unwrap().reference;
        assert!(reference.primitives().iter().any(|p| p.contains(pointer)));
    }

    #[test]
    fn test_accurate_tracing_beats_sloppy() {
        let accurate = play_first_round(1.0);
        let sloppy = play_first_round(0.0);
        assert!(accurate.percent > sloppy.percent);
        assert!(accurate.percent >= 70.0);
    }
}
