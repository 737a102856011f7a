//! Term Snake - a grid snake game for the terminal
//!
//! This library provides:
//! - Core simulation: grid, agent, target placement and the session state machine (game module)
//! - Key mapping for terminal input (input module)
//! - ratatui rendering of a session (render module)
//! - Interactive and headless drivers (modes module)

pub mod game;
pub mod input;
pub mod modes;
pub mod render;
