use ratatui::style::Color;

use crate::game::{Cell, GameState};

/// What occupies a drawn cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    Head,
    Body,
    Food,
}

impl TileKind {
    pub fn fill(&self) -> Color {
        match self {
            TileKind::Head => Color::Rgb(0x00, 0xff, 0x00),
            TileKind::Body => Color::Rgb(0x00, 0xaa, 0x00),
            TileKind::Food => Color::Rgb(0xff, 0x00, 0x00),
        }
    }

    pub fn outline(&self) -> Color {
        match self {
            TileKind::Head | TileKind::Body => Color::Rgb(0x00, 0x00, 0x00),
            TileKind::Food => Color::Rgb(0x44, 0x00, 0x00),
        }
    }
}

/// One filled, outlined square of `grid_size` at `cell`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub cell: Cell,
    pub kind: TileKind,
}

/// Tiles to paint for `state`, in paint order: snake head to tail, then food
///
/// Later tiles cover earlier ones, so food on top of the body stays visible.
pub fn draw_list(state: &GameState) -> Vec<Tile> {
    let segments = state.snake.segments();
    let mut tiles = Vec::with_capacity(segments.len() + 1);

    for (index, cell) in segments.iter().enumerate() {
        let kind = if index == 0 {
            TileKind::Head
        } else {
            TileKind::Body
        };
        tiles.push(Tile { cell: *cell, kind });
    }

    tiles.push(Tile {
        cell: state.food,
        kind: TileKind::Food,
    });

    tiles
}
