//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O, timer or rendering
//! dependencies. Front ends drive it by calling `tick` on their own schedule.

pub mod action;
pub mod config;
pub mod engine;
pub mod observer;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::{ConfigError, FoodPlacement, GameConfig};
pub use engine::{GameEngine, TickOutcome};
pub use observer::{GameObserver, NoopObserver};
pub use state::{Cell, CollisionType, GameState, Snake};
