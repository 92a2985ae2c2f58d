//! Display-ready view of the session
//!
//! The frontend binds these values to its widgets; nothing here feeds back
//! into the simulation.

use serde::Serialize;

use crate::sim::{GameOverReason, GamePhase, GameState, RoundOutcome, RoundReport};

/// Snapshot of everything the HUD shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HudSnapshot {
    pub phase: GamePhase,
    /// Whole seconds left, rounded up
    pub countdown: u32,
    /// Timer bar fill, 0 at round start to 1 at expiry
    pub timer_fill: f32,
    pub lives: u8,
    pub primitives: u32,
    pub total_score: f32,
}

impl HudSnapshot {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            phase: state.phase,
            countdown: state.timer.max(0.0).ceil() as u32,
            timer_fill: state.timer_progress(),
            lives: state.lives,
            primitives: state.primitives,
            total_score: state.total_score,
        }
    }

    pub fn lives_label(&self) -> String {
        format!("Attempts Remaining: {}", self.lives)
    }

    /// One-line status for text frontends
    pub fn status_line(&self) -> String {
        format!(
            "{} | {}s | {} | Shapes: {} | Score: {:.1}",
            self.phase.as_str(),
            self.countdown,
            self.lives_label(),
            self.primitives,
            self.total_score
        )
    }
}

/// Result screen text for a finished round
pub fn round_summary(report: &RoundReport) -> Vec<String> {
    let mut lines = vec![format!("{:.1}%", report.percent), "Copied Correctly".to_string()];
    if let Some(err) = &report.error {
        lines.push(format!("Round could not be scored: {err}"));
    }
    match report.outcome {
        RoundOutcome::Passed => {
            lines.push("Great Job!".to_string());
            lines.push(format!("Total Score: {:.1}", report.total_score));
        }
        RoundOutcome::Failed => {
            lines.push("Not Good Enough!".to_string());
            lines.push(format!("{} Attempts Remaining", report.lives));
        }
    }
    lines
}

/// Start screen text after a session ends
pub fn game_over_summary(
    final_score: f32,
    rounds_played: u32,
    reason: GameOverReason,
) -> Vec<String> {
    let headline = match reason {
        GameOverReason::OutOfLives => "Out of attempts!",
        GameOverReason::BoardExhausted => "The canvas is full - you copied them all!",
    };
    vec![
        headline.to_string(),
        format!("Rounds Played: {rounds_played}"),
        format!("Total Score: {final_score:.1}"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_snapshot_of_fresh_session() {
        let state = GameState::new(1, Settings::default());
        let hud = HudSnapshot::from_state(&state);
        assert_eq!(hud.countdown, 5);
        assert_eq!(hud.timer_fill, 0.0);
        assert_eq!(hud.lives_label(), "Attempts Remaining: 3");
        assert!(hud.status_line().starts_with("PreRound | 5s"));
    }

    #[test]
    fn test_countdown_rounds_up() {
        let mut state = GameState::new(1, Settings::default());
        state.timer = 3.2;
        let hud = HudSnapshot::from_state(&state);
        assert_eq!(hud.countdown, 4);
        assert!((hud.timer_fill - 0.36).abs() < 1e-5);
    }

    #[test]
    fn test_round_summary() {
        let mut report = RoundReport {
            round: 2,
            primitives: 2,
            percent: 82.5,
            outcome: RoundOutcome::Passed,
            lives: 3,
            total_score: 160.0,
            error: None,
        };
        assert_eq!(
            round_summary(&report),
            vec!["82.5%", "Copied Correctly", "Great Job!", "Total Score: 160.0"]
        );

        report.outcome = RoundOutcome::Failed;
        report.lives = 1;
        assert_eq!(round_summary(&report)[2..], ["Not Good Enough!", "1 Attempts Remaining"]);
    }

    #[test]
    fn test_game_over_summary() {
        let lines = game_over_summary(245.0, 4, GameOverReason::OutOfLives);
        assert_eq!(lines, vec!["Out of attempts!", "Rounds Played: 4", "Total Score: 245.0"]);
    }
}
