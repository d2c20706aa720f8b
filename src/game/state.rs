use super::action::Direction;

/// A cell on the board, addressed by its top-left corner in board units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move cell by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move cell one grid step in a direction
    pub fn stepped(&self, direction: Direction, grid_size: i32) -> Self {
        let (dx, dy) = direction.offset(grid_size);
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    body: Vec<Cell>,
}

impl Snake {
    /// Create a one-segment snake
    pub fn new(head: Cell) -> Self {
        Self { body: vec![head] }
    }

    /// Create a snake from head-first segments; `None` when empty
    pub fn from_segments(body: Vec<Cell>) -> Option<Self> {
        if body.is_empty() {
            None
        } else {
            Some(Self { body })
        }
    }

    /// Get the head position
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// All segments, head first
    pub fn segments(&self) -> &[Cell] {
        &self.body
    }

    /// Check if any segment, tail included, occupies `cell`
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Put a new head in front of the body
    pub fn push_head(&mut self, head: Cell) {
        self.body.insert(0, head);
    }

    /// Drop the last segment; a lone head is never removed
    pub fn pop_tail(&mut self) -> Option<Cell> {
        if self.body.len() > 1 {
            self.body.pop()
        } else {
            None
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false: a snake keeps at least its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that ended a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the board
    Wall,
    /// Snake ran into its own body
    SelfCollision,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Cell,
    pub score: u32,
    pub direction: Direction,
    pub alive: bool,
}

impl GameState {
    /// Create a live state moving right with zero score
    pub fn new(snake: Snake, food: Cell) -> Self {
        Self {
            snake,
            food,
            score: 0,
            direction: Direction::Right,
            alive: true,
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_movement() {
        let cell = Cell::new(100, 100);
        assert_eq!(cell.stepped(Direction::Right, 20), Cell::new(120, 100));
        assert_eq!(cell.stepped(Direction::Left, 20), Cell::new(80, 100));
        assert_eq!(cell.stepped(Direction::Down, 20), Cell::new(100, 120));
        assert_eq!(cell.stepped(Direction::Up, 20), Cell::new(100, 80));
    }

    #[test]
    fn test_snake_from_segments() {
        assert!(Snake::from_segments(Vec::new()).is_none());

        let snake =
            Snake::from_segments(vec![Cell::new(40, 0), Cell::new(20, 0), Cell::new(0, 0)])
                .unwrap();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(40, 0));
        assert_eq!(snake.segments()[2], Cell::new(0, 0));
    }

    #[test]
    fn test_snake_head_and_tail_moves() {
        let mut snake = Snake::new(Cell::new(0, 0));
        snake.push_head(Cell::new(20, 0));
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Cell::new(20, 0));

        assert_eq!(snake.pop_tail(), Some(Cell::new(0, 0)));
        assert_eq!(snake.pop_tail(), None);
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn test_occupies_includes_tail() {
        let snake =
            Snake::from_segments(vec![Cell::new(40, 0), Cell::new(20, 0), Cell::new(0, 0)])
                .unwrap();
        assert!(snake.occupies(Cell::new(40, 0)));
        assert!(snake.occupies(Cell::new(0, 0)));
        assert!(!snake.occupies(Cell::new(60, 0)));
    }
}
