use super::state::GameState;

/// Outputs the engine drives: the render, score and game-over sinks
///
/// Every hook has an empty default so front ends only implement what they
/// display. Hooks run synchronously inside `start`/`tick` and see the state
/// after the mutation that triggered them.
pub trait GameObserver {
    /// A fresh run began; any game-over display should be cleared
    fn on_start(&mut self, _state: &GameState) {}

    /// The score changed to `score`
    fn on_score(&mut self, _score: u32) {}

    /// A tick completed and the snake is still alive
    fn on_render(&mut self, _state: &GameState) {}

    /// The run ended; called once per run
    fn on_game_over(&mut self, _state: &GameState) {}
}

/// Observer that ignores every notification
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl GameObserver for NoopObserver {}
