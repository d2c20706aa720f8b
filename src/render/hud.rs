use crate::game::{GameObserver, GameState};

/// What the score and game-over displays currently show
///
/// Fed by the engine through [`GameObserver`], read by the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hud {
    pub score: u32,
    pub game_over: bool,
}

impl Hud {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameObserver for Hud {
    fn on_start(&mut self, _state: &GameState) {
        self.game_over = false;
    }

    fn on_score(&mut self, score: u32) {
        self.score = score;
    }

    fn on_game_over(&mut self, _state: &GameState) {
        self.game_over = true;
    }
}
