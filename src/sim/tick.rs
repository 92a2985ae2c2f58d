//! Fixed timestep simulation tick
//!
//! Drives the round state machine: start, draw until the timer expires,
//! score, then advance or end the session.

use glam::Vec2;

use super::generator::{ImageGenerator, round_rng};
use super::scoring::score_round;
use super::state::{
    GameEvent, GameOverReason, GamePhase, GameState, Round, RoundOutcome, RoundReport,
};
use super::surface::CopySurface;
use crate::consts::*;
use crate::error::GameError;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Start a session from the pre-round screen (click/tap/space)
    pub start: bool,
    /// Pointer position in copy-canvas space
    pub pointer: Option<Vec2>,
    /// Pen pressed: stamp ink at the pointer
    pub pen_down: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.time_ticks += 1;

    match state.phase {
        GamePhase::PreRound => {
            if input.start {
                if let Err(err) = start_game(state) {
                    log::warn!("Could not start round: {err}");
                }
            }
        }

        GamePhase::Drawing => {
            if input.pen_down {
                if let (Some(pointer), Some(round)) = (input.pointer, state.round.as_mut()) {
                    let point = round.copy.add_ink(pointer);
                    let number = round.number;
                    state.emit(GameEvent::InkStamped {
                        round: number,
                        point,
                    });
                }
            }

            state.timer = (state.timer - dt).max(0.0);
            if state.timer <= 0.0 {
                end_round(state);
            }
        }

        // Passed through within a single tick, never resting here
        GamePhase::Scoring
        | GamePhase::RoundPassed
        | GamePhase::RoundFailed
        | GamePhase::GameOver => {}
    }
}

/// Start the first round of a session
///
/// Returns `Ok(false)` when the session is not waiting in `PreRound`.
pub fn start_game(state: &mut GameState) -> Result<bool, GameError> {
    if state.phase != GamePhase::PreRound {
        return Ok(false);
    }
    begin_round(state)?;
    Ok(true)
}

/// Generate the reference, hand out a blank copy and start the timer
fn begin_round(state: &mut GameState) -> Result<(), GameError> {
    let generator = ImageGenerator::new(&state.settings);
    let mut rng = round_rng(state.seed, state.round_serial);
    let reference = generator.generate(&mut rng, state.primitives)?;

    state.round_serial += 1;
    state.rounds_played += 1;
    state.timer = state.settings.timer_length;

    let number = state.rounds_played;
    let primitives = state.primitives;
    state.round = Some(Round {
        number,
        reference: reference.clone(),
        copy: CopySurface::new(state.settings.ink_dot_radius()),
    });
    state.enter(GamePhase::Drawing);

    log::info!("Round {number} started with {primitives} primitives");
    state.emit(GameEvent::RoundStarted { round: number, primitives });
    state.emit(GameEvent::CompositionReady {
        round: number,
        composition: reference,
    });
    state.emit(GameEvent::CopySurfaceReady { round: number });
    Ok(())
}

/// Score the finished round and decide what comes next
fn end_round(state: &mut GameState) {
    state.enter(GamePhase::Scoring);

    let round = state.round.take();
    let number = round.as_ref().map_or(state.rounds_played, |r| r.number);
    let scored = score_round(
        round.as_ref().map(|r| &r.reference),
        round.as_ref().map(|r| &r.copy),
        state.settings.scoring_grid_width,
    );
    drop(round);
    log::debug!("Released canvases for round {number}");

    let primitives = state.primitives;
    state.timer = state.settings.timer_length;
    state.primitives += 1;

    let (percent, error) = match scored {
        Ok(score) => (score.percent, None),
        Err(err) => {
            log::warn!("Round {number} could not be scored: {err}");
            (0.0, Some(err))
        }
    };

    let outcome = if error.is_none() && percent >= state.settings.minimum_percent {
        state.enter(GamePhase::RoundPassed);
        state.total_score += percent;
        RoundOutcome::Passed
    } else {
        state.enter(GamePhase::RoundFailed);
        state.lives = state.lives.saturating_sub(1);
        RoundOutcome::Failed
    };

    log::info!(
        "Round {number}: {percent:.1}% correct, {outcome:?}, {} lives left",
        state.lives
    );
    state.emit(GameEvent::RoundEnded(RoundReport {
        round: number,
        primitives,
        percent,
        outcome,
        lives: state.lives,
        total_score: state.total_score,
        error,
    }));

    if state.lives == 0 {
        game_over(state, GameOverReason::OutOfLives);
        return;
    }

    if let Err(err) = begin_round(state) {
        log::warn!("Could not start round {}: {err}", state.rounds_played + 1);
        game_over(state, GameOverReason::BoardExhausted);
    }
}

/// Report the final score and reset to a fresh session
fn game_over(state: &mut GameState, reason: GameOverReason) {
    state.enter(GamePhase::GameOver);
    log::info!(
        "Game over after {} rounds ({reason:?}), total score {:.1}",
        state.rounds_played,
        state.total_score
    );
    state.emit(GameEvent::GameOver {
        final_score: state.total_score,
        rounds_played: state.rounds_played,
        reason,
    });

    state.reset();
    state.enter(GamePhase::PreRound);
}

/// Turns variable frame times into fixed simulation ticks
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    accumulator: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run as many fixed ticks as the elapsed frame time covers.
    /// One-shot inputs are cleared after the first tick consumes them.
    pub fn advance(&mut self, state: &mut GameState, input: &mut TickInput, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(state, input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            input.start = false;
        }
        substeps
    }
}
