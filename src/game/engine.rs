use super::{
    action::Direction,
    config::{FoodPlacement, GameConfig},
    observer::GameObserver,
    state::{Cell, CollisionType, GameState, Snake},
};
use rand::{rngs::StdRng, seq::IteratorRandom, Rng, SeedableRng};
use tracing::{debug, info, trace};

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The snake advanced one cell
    Moved { ate_food: bool },
    /// The snake collided; the run is over
    GameOver(CollisionType),
    /// The run was already over; nothing changed
    Halted,
}

/// The game engine: owns the state and applies all transitions
///
/// The engine has no clock. Something outside calls [`GameEngine::tick`] once
/// per period and forwards direction requests through
/// [`GameEngine::set_direction`].
pub struct GameEngine<R = StdRng> {
    config: GameConfig,
    rng: R,
    state: GameState,
    /// Set once a direction change was applied since the last tick
    direction_latched: bool,
}

impl GameEngine<StdRng> {
    /// Create an engine with an entropy-seeded random source
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an engine whose food placement is reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine with a fresh, started state
    ///
    /// Observers are not notified; call [`GameEngine::start`] to announce a run.
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        let placeholder = GameState::new(Snake::new(Cell::new(0, 0)), Cell::new(0, 0));
        let mut engine = Self {
            config,
            rng,
            state: placeholder,
            direction_latched: false,
        };
        engine.reset_state();
        engine
    }

    /// Resume from an existing state snapshot
    pub fn from_state(config: GameConfig, rng: R, state: GameState) -> Self {
        Self {
            config,
            rng,
            state,
            direction_latched: false,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_alive(&self) -> bool {
        self.state.alive
    }

    /// Reset the game to its initial state and announce the new run
    pub fn start<O: GameObserver + ?Sized>(&mut self, observer: &mut O) {
        self.reset_state();
        self.direction_latched = false;

        info!(
            head_x = self.state.snake.head().x,
            head_y = self.state.snake.head().y,
            food_x = self.state.food.x,
            food_y = self.state.food.y,
            "game started"
        );

        observer.on_start(&self.state);
        observer.on_score(self.state.score);
    }

    /// Request a new direction; returns whether it was applied
    ///
    /// Ignored after game over, after an earlier change in the same tick, and
    /// when `requested` is the reverse of the current direction.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        if !self.state.alive || self.direction_latched {
            return false;
        }
        if self.state.direction.is_opposite(requested) {
            trace!(?requested, current = ?self.state.direction, "reversal ignored");
            return false;
        }

        debug!(from = ?self.state.direction, to = ?requested, "direction changed");
        self.state.direction = requested;
        self.direction_latched = true;
        true
    }

    /// Advance the simulation by one step
    pub fn tick<O: GameObserver + ?Sized>(&mut self, observer: &mut O) -> TickOutcome {
        if !self.state.alive {
            return TickOutcome::Halted;
        }

        self.direction_latched = false;

        let grid_size = self.grid_step();
        let new_head = self
            .state
            .snake
            .head()
            .stepped(self.state.direction, grid_size);

        if let Some(collision) = self.check_collision(new_head) {
            self.state.alive = false;
            info!(
                ?collision,
                score = self.state.score,
                length = self.state.snake.len(),
                "game over"
            );
            observer.on_game_over(&self.state);
            return TickOutcome::GameOver(collision);
        }

        self.state.snake.push_head(new_head);

        let ate_food = new_head == self.state.food;
        if ate_food {
            self.state.score += 1;
            self.state.food = self.place_food();
            debug!(
                score = self.state.score,
                food_x = self.state.food.x,
                food_y = self.state.food.y,
                "food eaten"
            );
            observer.on_score(self.state.score);
        } else {
            self.state.snake.pop_tail();
        }

        trace!(head_x = new_head.x, head_y = new_head.y, "tick");
        observer.on_render(&self.state);

        TickOutcome::Moved { ate_food }
    }

    /// Check the projected head against the walls and the pre-move body
    fn check_collision(&self, head: Cell) -> Option<CollisionType> {
        if !self.is_in_bounds(head) {
            return Some(CollisionType::Wall);
        }

        if self.state.snake.occupies(head) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    fn is_in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0
            && i64::from(cell.x) < i64::from(self.config.board_width)
            && cell.y >= 0
            && i64::from(cell.y) < i64::from(self.config.board_height)
    }

    /// One segment at the board center, moving right, with fresh food
    fn reset_state(&mut self) {
        let center = self.cell_at(self.config.columns() / 2, self.config.rows() / 2);

        self.state = GameState::new(Snake::new(center), center);
        self.state.food = self.place_food();
    }

    /// Step length in board units
    fn grid_step(&self) -> i32 {
        i32::try_from(self.config.grid_size).unwrap_or(i32::MAX)
    }

    /// Top-left corner of column `col`, row `row`
    ///
    /// Validated configs always fit; others saturate instead of wrapping negative.
    fn cell_at(&self, col: u32, row: u32) -> Cell {
        let grid_size = u64::from(self.config.grid_size);
        let to_i32 = |v: u64| i32::try_from(v).unwrap_or(i32::MAX);
        Cell::new(
            to_i32(u64::from(col) * grid_size),
            to_i32(u64::from(row) * grid_size),
        )
    }

    /// Pick a food cell according to the configured placement policy
    fn place_food(&mut self) -> Cell {
        match self.config.food_placement {
            FoodPlacement::Uniform => self.random_cell(),
            FoodPlacement::AvoidSnake => self.random_free_cell(),
        }
    }

    /// Uniform over all cells; x and y are drawn independently
    fn random_cell(&mut self) -> Cell {
        let col = self.rng.gen_range(0..self.config.columns().max(1));
        let row = self.rng.gen_range(0..self.config.rows().max(1));
        self.cell_at(col, row)
    }

    /// Uniform over cells the snake does not cover, or any cell when none are free
    fn random_free_cell(&mut self) -> Cell {
        let (columns, rows) = (self.config.columns(), self.config.rows());
        let cells: Vec<Cell> = (0..rows)
            .flat_map(|row| (0..columns).map(move |col| (col, row)))
            .map(|(col, row)| self.cell_at(col, row))
            .collect();

        let snake = &self.state.snake;
        let free = cells
            .into_iter()
            .filter(|cell| !snake.occupies(*cell))
            .choose(&mut self.rng);

        match free {
            Some(cell) => cell,
            None => self.random_cell(),
        }
    }
}
