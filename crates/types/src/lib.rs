//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the core rules, the controller, and the terminal renderer alike.
//!
//! # Grid Dimensions
//!
//! - **Grid**: 10 x 10 cells, `(x, y)` with `x` left to right and `y` top to bottom
//! - **Offered slots**: 3 blocks are on offer at any time
//! - **Shape masks**: at most 6 x 6 cells
//!
//! # Scoring
//!
//! | Lines cleared | Points |
//! |---------------|--------|
//! | 0 | 0 |
//! | 1 | 100 |
//! | 2 | 300 |
//! | n >= 3 | 500 * n |
//!
//! Rows and columns count the same. A row and a column cleared by the same
//! placement are two lines.
//!
//! # Examples
//!
//! ```
//! use block_blast_types::{SlotIndex, GRID_SIZE};
//!
//! assert_eq!(GRID_SIZE, 10);
//!
//! let slot = SlotIndex::new(2).unwrap();
//! assert_eq!(slot.get(), 2);
//! assert!(SlotIndex::new(3).is_none());
//! ```

/// Grid width and height in cells.
pub const GRID_SIZE: u8 = 10;

/// Number of offered blocks the player chooses from.
pub const OFFER_SLOTS: usize = 3;

/// Maximum width/height of any shape mask.
pub const MAX_SHAPE_DIM: usize = 6;

/// Points for clearing exactly one line.
pub const SINGLE_LINE_SCORE: u32 = 100;

/// Points for clearing exactly two lines at once.
pub const DOUBLE_LINE_SCORE: u32 = 300;

/// Points per line when three or more lines clear at once.
pub const MULTI_LINE_SCORE_PER_LINE: u32 = 500;

/// Upper bound (inclusive) for the cosmetic per-placement occupancy marker.
pub const MARKER_MAX: u16 = 1000;


/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Linear interpolation towards `other`, `t` in `[0, 1]`.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }
}

/// Two-stop gradient identity of a shape (and of every cell it fills).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorPair {
    pub start: Color,
    pub end: Color,
}

impl ColorPair {
    pub const fn new(start: Color, end: Color) -> Self {
        Self { start, end }
    }
}

/// The seven shapes of the block library.
///
/// - **Single**: 1x1
/// - **Square**: 2x2
/// - **Ell**: 2 wide, 3 tall L
/// - **Line4**: 1x4 vertical bar
/// - **Tee**: 3 wide, 2 tall T
/// - **Row6**: 6x1 horizontal bar
/// - **Column6**: 1x6 vertical bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Single,
    Square,
    Ell,
    Line4,
    Tee,
    Row6,
    Column6,
}

impl ShapeKind {
    /// Catalog order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Single,
        ShapeKind::Square,
        ShapeKind::Ell,
        ShapeKind::Line4,
        ShapeKind::Tee,
        ShapeKind::Row6,
        ShapeKind::Column6,
    ];
}

/// Index of one of the offered-block slots.
///
/// Only `0..OFFER_SLOTS` can be constructed, so an out-of-range slot is not a
/// runtime condition anywhere downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotIndex(u8);

impl SlotIndex {
    pub const ALL: [SlotIndex; OFFER_SLOTS] = [SlotIndex(0), SlotIndex(1), SlotIndex(2)];

    pub fn new(index: usize) -> Option<Self> {
        if index < OFFER_SLOTS {
            Some(SlotIndex(index as u8))
        } else {
            None
        }
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }
}

/// Player actions, produced by key mapping and consumed by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Pick up the block in a slot
    Select(SlotIndex),
    /// Drop the current selection
    Deselect,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    /// Place the selected block at the cursor
    Drop,
    /// Start a fresh game
    Restart,
}

/// Core-side event emitted after a successful placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PlacementEvent {
    pub rows_cleared: u8,
    pub cols_cleared: u8,
    pub score_delta: u32,
    pub game_over: bool,
}

impl PlacementEvent {
    pub fn lines_cleared(&self) -> u32 {
        self.rows_cleared as u32 + self.cols_cleared as u32
    }
}
