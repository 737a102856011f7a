//! Core simulation for Snake
//!
//! This module contains the grid model, the agent, target placement and the
//! session state machine, without any I/O or rendering dependencies. Drivers
//! call [`Session::tick`] at a fixed rate and poll its read-only queries.

pub mod agent;
pub mod config;
pub mod direction;
pub mod error;
pub mod grid;
pub mod session;
pub mod target;

// Re-export commonly used types
pub use agent::{Agent, Collision};
pub use config::GameConfig;
pub use direction::Direction;
pub use error::GameError;
pub use grid::{Grid, Position};
pub use session::{Phase, Session, TickOutcome};
pub use target::place_target;
