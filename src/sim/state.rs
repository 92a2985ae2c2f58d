//! Game state and core session types
//!
//! The round counters are plain serializable data; the canvases of the round
//! in progress and the pending events are runtime-only.

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::surface::{Composition, CopySurface};
use crate::consts::*;
use crate::error::GameError;
use crate::settings::Settings;

/// Current phase of the session
///
/// `PreRound` and `Drawing` are the resting phases. The others are passed
/// through on the tick that ends a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the start action
    PreRound,
    /// Timer running, copy surface accepting ink
    Drawing,
    /// Comparing the canvases
    Scoring,
    /// Score met the threshold
    RoundPassed,
    /// Score fell short, a life was lost
    RoundFailed,
    /// Lives exhausted
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::PreRound => "PreRound",
            GamePhase::Drawing => "Drawing",
            GamePhase::Scoring => "Scoring",
            GamePhase::RoundPassed => "RoundPassed",
            GamePhase::RoundFailed => "RoundFailed",
            GamePhase::GameOver => "GameOver",
        }
    }

    /// Whether the state machine allows moving from `self` to `next`
    pub fn can_transition_to(self, next: GamePhase) -> bool {
        use GamePhase::*;
        matches!(
            (self, next),
            (PreRound, Drawing)
                | (Drawing, Scoring)
                | (Scoring, RoundPassed)
                | (Scoring, RoundFailed)
                | (RoundPassed, Drawing)
                | (RoundFailed, Drawing)
                | (RoundFailed, GameOver)
                // The board can run out of free cells when advancing
                | (RoundPassed, GameOver)
                | (GameOver, PreRound)
        )
    }

    /// Whether pointer input paints the copy surface
    pub fn accepts_input(self) -> bool {
        self == GamePhase::Drawing
    }
}

/// Pass/fail verdict for a finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Passed,
    Failed,
}

/// Everything the frontend needs to show a finished round
#[derive(Debug, Clone, PartialEq)]
pub struct RoundReport {
    /// 1-based round number within the session
    pub round: u32,
    /// Primitives in the scored composition
    pub primitives: u32,
    /// Percent correct, 0 when scoring failed
    pub percent: f32,
    pub outcome: RoundOutcome,
    /// Lives left after this round
    pub lives: u8,
    /// Session score after this round
    pub total_score: f32,
    /// Set when the round could not be scored
    pub error: Option<GameError>,
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    /// Lives reached zero
    OutOfLives,
    /// The next round needed more primitives than the grid has cells
    BoardExhausted,
}

/// Notifications for the frontend, in the order they happened
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    RoundStarted {
        round: u32,
        primitives: u32,
    },
    /// The reference image to show for this round
    CompositionReady {
        round: u32,
        composition: Composition,
    },
    /// A blank copy surface is ready for pointer input
    CopySurfaceReady {
        round: u32,
    },
    /// Ink landed on the copy at this canvas-local point
    InkStamped {
        round: u32,
        point: Vec2,
    },
    RoundEnded(RoundReport),
    GameOver {
        final_score: f32,
        rounds_played: u32,
        reason: GameOverReason,
    },
}

/// Canvases owned by the round in progress
#[derive(Debug, Clone)]
pub struct Round {
    /// 1-based round number within the session
    pub number: u32,
    pub reference: Composition,
    pub copy: CopySurface,
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Tuning in effect for this session
    pub settings: Settings,
    /// Current phase
    pub phase: GamePhase,
    /// Primitives in the current (or next) round, always >= 1
    pub primitives: u32,
    /// Lives remaining, 0..=STARTING_LIVES
    pub lives: u8,
    /// Seconds left in the current round, 0..=timer_length
    pub timer: f32,
    /// Sum of percents from passed rounds
    pub total_score: f32,
    /// Rounds started since the last reset
    pub rounds_played: u32,
    /// Rounds started over the whole run (feeds the round RNG)
    pub round_serial: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Canvases of the round in progress
    #[serde(skip)]
    pub(crate) round: Option<Round>,
    /// Undrained notifications
    #[serde(skip)]
    events: VecDeque<GameEvent>,
}

impl GameState {
    /// Create a session in `PreRound` with the given seed and settings
    ///
    /// Settings that fail validation are replaced by the defaults.
    pub fn new(seed: u64, settings: Settings) -> Self {
        let settings = match settings.validate() {
            Ok(()) => settings,
            Err(err) => {
                log::warn!("Ignoring settings ({err}), using defaults");
                Settings::default()
            }
        };
        let timer = settings.timer_length;
        Self {
            seed,
            settings,
            phase: GamePhase::PreRound,
            primitives: STARTING_PRIMITIVES,
            lives: STARTING_LIVES,
            timer,
            total_score: 0.0,
            rounds_played: 0,
            round_serial: 0,
            time_ticks: 0,
            round: None,
            events: VecDeque::new(),
        }
    }

    /// The round in progress, if any
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Fraction of the round timer already used, 0..=1
    pub fn timer_progress(&self) -> f32 {
        if !(self.settings.timer_length > 0.0) {
            return 1.0;
        }
        (1.0 - self.timer / self.settings.timer_length).clamp(0.0, 1.0)
    }

    /// Take all pending events, oldest first
    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    /// Queue an event, dropping the oldest once the queue is full
    pub(crate) fn emit(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            log::warn!("Event queue full, dropping oldest event");
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Move to `next`, logging the transition
    pub(crate) fn enter(&mut self, next: GamePhase) {
        debug_assert!(
            self.phase.can_transition_to(next),
            "illegal transition {} -> {}",
            self.phase.as_str(),
            next.as_str()
        );
        log::debug!("Phase {} -> {}", self.phase.as_str(), next.as_str());
        self.phase = next;
    }

    /// Back to a fresh session: N = 1, full lives, no score
    pub(crate) fn reset(&mut self) {
        self.primitives = STARTING_PRIMITIVES;
        self.lives = STARTING_LIVES;
        self.total_score = 0.0;
        self.rounds_played = 0;
        self.timer = self.settings.timer_length;
        self.round = None;
    }
}
