//! Plain-data copy of the game for renderers.

use crate::board::Cell;
use crate::shapes::{Shape, SHAPE_LIBRARY};
use crate::types::{PlacementEvent, GRID_SIZE, OFFER_SLOTS};

/// Read-only copy of everything a renderer needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; GRID_SIZE as usize]; GRID_SIZE as usize],
    pub offered: [Shape; OFFER_SLOTS],
    pub score: u32,
    pub game_over: bool,
    pub episode_id: u32,
    pub seed: u32,
    pub placements: u32,
    pub lines: u32,
    pub last_event: Option<PlacementEvent>,
}

impl GameSnapshot {
    /// False once the game is over; nothing can be placed until a restart.
    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; GRID_SIZE as usize]; GRID_SIZE as usize],
            offered: [SHAPE_LIBRARY[0]; OFFER_SLOTS],
            score: 0,
            game_over: false,
            episode_id: 0,
            seed: 0,
            placements: 0,
            lines: 0,
            last_event: None,
        }
    }
}
