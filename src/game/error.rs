use thiserror::Error;

/// Failures surfaced by the simulation core
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// `tick` was called after the session reached GameOver
    #[error("session is over; restart before ticking")]
    GameOver,
    /// The agent covers every cell, so no target can be placed
    #[error("no free cell left for a target on a grid of {cells} cells")]
    GridExhausted { cells: usize },
    /// A scripted starting state breaks a board rule
    #[error("invalid starting state: {0}")]
    InvalidState(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
