use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use snake_game::game::{
    Cell, CollisionType, Direction, GameConfig, GameEngine, GameObserver, GameState, Snake,
    TickOutcome,
};
use std::collections::HashSet;

#[derive(Default)]
struct Sinks {
    renders: usize,
    scores: Vec<u32>,
    game_overs: usize,
}

impl GameObserver for Sinks {
    fn on_score(&mut self, score: u32) {
        self.scores.push(score);
    }

    fn on_render(&mut self, _state: &GameState) {
        self.renders += 1;
    }

    fn on_game_over(&mut self, _state: &GameState) {
        self.game_overs += 1;
    }
}

fn engine_from(segments: Vec<Cell>, food: Cell, direction: Direction) -> GameEngine {
    let snake = Snake::from_segments(segments).expect("non-empty snake");
    let state = GameState::new(snake, food).with_direction(direction);
    GameEngine::from_state(GameConfig::default(), StdRng::seed_from_u64(11), state)
}

#[test]
fn eating_food_grows_snake_and_scores() {
    let mut engine = engine_from(vec![Cell::new(200, 200)], Cell::new(220, 200), Direction::Right);
    let mut sinks = Sinks::default();

    let outcome = engine.tick(&mut sinks);

    assert_eq!(outcome, TickOutcome::Moved { ate_food: true });
    let state = engine.state();
    assert_eq!(state.snake.len(), 2);
    assert_eq!(state.snake.head(), Cell::new(220, 200));
    assert_eq!(state.score, 1);
    assert_eq!(sinks.scores, vec![1]);
    assert_eq!(sinks.renders, 1);
    assert!(state.food.x % 20 == 0 && state.food.y % 20 == 0);
}

#[test]
fn rightmost_column_hits_wall() {
    let mut engine = engine_from(vec![Cell::new(380, 100)], Cell::new(0, 0), Direction::Right);
    let mut sinks = Sinks::default();

    let outcome = engine.tick(&mut sinks);

    assert_eq!(outcome, TickOutcome::GameOver(CollisionType::Wall));
    assert!(!engine.state().alive);
    assert_eq!(engine.state().snake.segments(), &[Cell::new(380, 100)]);
    assert_eq!(sinks.game_overs, 1);
    assert_eq!(sinks.renders, 0);
}

#[test]
fn moving_onto_own_segment_ends_game() {
    let mut engine = engine_from(
        vec![Cell::new(100, 100), Cell::new(120, 100), Cell::new(100, 120)],
        Cell::new(0, 0),
        Direction::Down,
    );

    let outcome = engine.tick(&mut Sinks::default());

    assert_eq!(outcome, TickOutcome::GameOver(CollisionType::SelfCollision));
    assert!(!engine.state().alive);
    assert_eq!(engine.state().snake.len(), 3);
}

#[test]
fn reversal_is_rejected() {
    let mut engine = GameEngine::with_seed(GameConfig::default(), 5);
    engine.start(&mut Sinks::default());

    assert!(!engine.set_direction(Direction::Left));
    assert_eq!(engine.state().direction, Direction::Right);
}

#[test]
fn terminated_engine_ignores_ticks_and_turns() {
    let mut engine = engine_from(vec![Cell::new(380, 100)], Cell::new(0, 0), Direction::Right);
    let mut sinks = Sinks::default();
    engine.tick(&mut sinks);
    let frozen = engine.state().clone();

    for direction in [Direction::Up, Direction::Down, Direction::Left] {
        assert!(!engine.set_direction(direction));
        assert_eq!(engine.tick(&mut sinks), TickOutcome::Halted);
    }

    assert_eq!(engine.state(), &frozen);
    assert_eq!(sinks.game_overs, 1);
}

#[test]
fn only_first_turn_per_tick_counts() {
    let mut engine = engine_from(vec![Cell::new(200, 200)], Cell::new(0, 0), Direction::Right);

    // Up then Left would reverse through Up within one tick
    assert!(engine.set_direction(Direction::Up));
    assert!(!engine.set_direction(Direction::Left));
    engine.tick(&mut Sinks::default());

    assert_eq!(engine.state().snake.head(), Cell::new(200, 180));
    assert_eq!(engine.state().direction, Direction::Up);
}

#[test]
fn random_play_keeps_invariants() {
    let mut engine = GameEngine::with_seed(GameConfig::with_cells(8, 8), 2024);
    let mut pick = StdRng::seed_from_u64(99);
    let directions = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    for _ in 0..20 {
        let mut sinks = Sinks::default();
        engine.start(&mut sinks);
        let mut eaten = 0;

        for _ in 0..500 {
            let before = engine.state().snake.len();
            let direction = *directions.choose(&mut pick).unwrap();
            engine.set_direction(direction);

            match engine.tick(&mut sinks) {
                TickOutcome::Moved { ate_food } => {
                    let state = engine.state();
                    let unique: HashSet<Cell> = state.snake.segments().iter().copied().collect();
                    assert_eq!(unique.len(), state.snake.len());

                    let expected = if ate_food { before + 1 } else { before };
                    assert_eq!(state.snake.len(), expected);

                    if ate_food {
                        eaten += 1;
                    }
                    assert_eq!(state.score, eaten);
                }
                TickOutcome::GameOver(_) => {
                    assert_eq!(engine.state().snake.len(), before);
                    break;
                }
                TickOutcome::Halted => unreachable!("ticked after game over"),
            }
        }

        assert!(sinks.game_overs <= 1);
    }
}
