//! Terminal-free simulation driven by the autopilot
//!
//! Useful for smoke-testing the core and for checking that a seed
//! reproduces a run. Each finished game is followed by a restart until the
//! tick budget is spent.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::autopilot;
use crate::game::{GameConfig, GameError, Session};

/// Summary of a headless run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeadlessReport {
    pub ticks: u64,
    pub games_finished: u32,
    pub high_score: u32,
    pub targets_consumed: u64,
    /// Score of the game still running when the budget ran out
    pub final_score: u32,
}

impl HeadlessReport {
    fn on_game_over(&mut self, score: u32) {
        self.games_finished += 1;
        self.high_score = self.high_score.max(score);
    }
}

pub struct HeadlessMode {
    session: Session,
    tick_budget: u64,
}

impl HeadlessMode {
    pub fn new(config: GameConfig, tick_budget: u64) -> Result<Self> {
        let session = Session::new(&config).context("Failed to start session")?;
        Ok(Self {
            session,
            tick_budget,
        })
    }

    pub fn run(&mut self) -> Result<HeadlessReport> {
        let mut report = HeadlessReport::default();

        while report.ticks < self.tick_budget {
            if !self.session.is_playing() {
                self.session.restart().context("Failed to restart session")?;
            }

            self.session.request_direction(autopilot::next_direction(&self.session));
            report.ticks += 1;

            match self.session.tick() {
                Ok(outcome) => {
                    if outcome.consumed_target {
                        report.targets_consumed += 1;
                    }
                    if let Some(collision) = outcome.collision {
                        debug!(?collision, score = self.session.score(), "Autopilot crashed");
                        report.on_game_over(self.session.score());
                    }
                }
                Err(GameError::GridExhausted { cells }) => {
                    warn!(cells, "Autopilot filled the grid");
                    report.targets_consumed += 1;
                    report.on_game_over(self.session.score());
                }
                Err(err) => return Err(err).context("Failed to advance session"),
            }
        }

        report.final_score = if self.session.is_playing() {
            self.session.score()
        } else {
            0
        };
        report.high_score = report.high_score.max(report.final_score);

        info!(
            ticks = report.ticks,
            games = report.games_finished,
            high_score = report.high_score,
            targets = report.targets_consumed,
            "Headless run complete"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_full_budget() {
        let mut mode = HeadlessMode::new(GameConfig::small().with_seed(8), 300).unwrap();
        let report = mode.run().unwrap();

        assert_eq!(report.ticks, 300);
        assert!(report.targets_consumed > 0);
        assert_eq!(report.high_score % 10, 0);
    }

    #[test]
    fn test_zero_budget() {
        let mut mode = HeadlessMode::new(GameConfig::small().with_seed(8), 0).unwrap();
        let report = mode.run().unwrap();
        assert_eq!(report, HeadlessReport::default());
    }

    #[test]
    fn test_same_seed_same_report() {
        let run = || {
            HeadlessMode::new(GameConfig::new(12, 8).with_seed(21), 500)
                .unwrap()
                .run()
                .unwrap()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_restarts_after_each_crash() {
        // On a 2x1 grid the agent starts at (1,0) facing the right wall and
        // may not reverse, so every game lasts one tick.
        let mut mode = HeadlessMode::new(GameConfig::new(2, 1).with_seed(4), 10).unwrap();
        let report = mode.run().unwrap();

        assert_eq!(report.ticks, 10);
        assert_eq!(report.games_finished, 10);
        assert_eq!(report.high_score, 0);
        assert_eq!(report.targets_consumed, 0);
    }
}
