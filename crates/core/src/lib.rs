//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules and state management: the placement
//! and clearing engine. It has **no dependencies** on UI, terminals or I/O:
//!
//! - **Deterministic**: the same seed produces the same sequence of offered blocks
//! - **Atomic**: one call validates, places, clears, scores, refills and re-checks
//! - **Fast**: fixed-size arrays, no allocation on the placement path
//!
//! # Module Structure
//!
//! - [`board`]: 10x10 grid with per-cell colors, placement checks and line clearing
//! - [`game_state`]: offered blocks, score, terminal flag, and the placement turn
//! - [`shapes`]: the seven-shape block library
//! - [`rng`]: seeded uniform shape dealer
//! - [`scoring`]: line clear points
//! - [`snapshot`]: read-only copy of the state for renderers
//!
//! # Game Rules
//!
//! - Three blocks are offered; placing one replaces only that slot
//! - A block fits if every filled cell lands on an empty cell inside the grid
//! - Full rows and full columns are detected together, then all cleared
//! - 1 line scores 100, 2 lines 300, n >= 3 lines 500 * n
//! - The game ends when no offered block fits anywhere; only a restart continues
//!
//! # Example
//!
//! ```
//! use block_blast_core::GameState;
//! use block_blast_types::SlotIndex;
//!
//! let mut game = GameState::new(12345);
//! let slot = SlotIndex::new(0).unwrap();
//!
//! // Every library shape fits in the top-left corner of an empty grid.
//! assert!(game.is_valid_placement(slot, 0, 0));
//! assert!(game.try_place(slot, 0, 0));
//! assert!(!game.board().is_empty());
//!
//! // Anchors that push the block off the grid are rejected.
//! assert!(!game.try_place(slot, -1, -1));
//!
//! game.restart();
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod game_state;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use block_blast_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, ClearedLines, FilledCell};
pub use game_state::{has_valid_move, is_valid_placement, GameState};
pub use rng::{ShapeDealer, SimpleRng};
pub use scoring::{calculate_line_score, calculate_score, ScoreResult};
pub use shapes::{get_shape, Shape, SHAPE_LIBRARY};
pub use snapshot::GameSnapshot;
