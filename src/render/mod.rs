//! Terminal rendering
//!
//! `tiles` turns a `GameState` into a paint list without touching any surface;
//! `renderer` paints that list and the HUD with ratatui.

pub mod hud;
pub mod renderer;
pub mod tiles;

pub use hud::Hud;
pub use renderer::{Renderer, Scene};
pub use tiles::{draw_list, Tile, TileKind};
