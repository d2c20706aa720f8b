//! Snake - the classic grid game with a terminal front end
//!
//! This library provides:
//! - Core game logic with no clock or I/O (game module)
//! - Key mapping for the arrow keys, restart and quit (input module)
//! - ratatui rendering from a pure paint list (render module)
//! - Session counters for the header (metrics module)
//! - The interactive terminal loop and its tick scheduler (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
