//! Game state module - manages the complete game state
//!
//! This module ties together the board, the offered blocks, the shape dealer
//! and scoring. The only way to change a running game is [`GameState::try_place`],
//! which validates, fills, clears lines, scores, refills the used slot and
//! re-checks whether any move remains, all in one call.

use log::{debug, info};

use crate::board::Board;
use crate::rng::ShapeDealer;
use crate::scoring::{calculate_score, ScoreResult};
use crate::shapes::Shape;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Whether `shape` may sit on `board` with its top-left corner at `(x, y)`.
///
/// Pure: checks every occupied mask cell for bounds and collisions.
pub fn is_valid_placement(board: &Board, shape: &Shape, x: i16, y: i16) -> bool {
    board.can_place(shape, x, y)
}

/// Whether any of `offered` fits anywhere on `board`.
///
/// Scans every anchor of the grid for each slot and stops at the first fit.
pub fn has_valid_move(board: &Board, offered: &[Shape]) -> bool {
    let size = GRID_SIZE as i16;
    offered.iter().any(|shape| {
        (0..size).any(|y| (0..size).any(|x| is_valid_placement(board, shape, x, y)))
    })
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    offered: [Shape; OFFER_SLOTS],
    dealer: ShapeDealer,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Successful placements in this episode.
    placements: u32,
    /// Rows plus columns cleared in this episode.
    lines: u32,
    /// Outcome of the last placement (consumed by observers).
    last_event: Option<PlacementEvent>,
    score: u32,
    game_over: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut dealer = ShapeDealer::new(seed);
        let offered = [dealer.draw(), dealer.draw(), dealer.draw()];

        Self {
            board: Board::new(),
            offered,
            dealer,
            episode_id: 0,
            placements: 0,
            lines: 0,
            last_event: None,
            score: 0,
            game_over: false,
        }
    }

    /// Create a game from an arranged board and offer.
    ///
    /// The terminal flag is computed immediately, so a position with no moves
    /// starts out over.
    pub fn from_parts(board: Board, offered: [Shape; OFFER_SLOTS], seed: u32) -> Self {
        let game_over = !has_valid_move(&board, &offered);
        Self {
            board,
            offered,
            dealer: ShapeDealer::new(seed),
            episode_id: 0,
            placements: 0,
            lines: 0,
            last_event: None,
            score: 0,
            game_over,
        }
    }

    /// Reset to a fresh game in place.
    ///
    /// The dealer keeps its stream, so the new offer is not a replay of the old one.
    pub fn restart(&mut self) {
        self.board.clear();
        for slot in SlotIndex::ALL {
            self.offered[slot.get()] = self.dealer.draw();
        }
        self.episode_id = self.episode_id.wrapping_add(1);
        self.placements = 0;
        self.lines = 0;
        self.last_event = None;
        self.score = 0;
        self.game_over = false;
        info!("restart: episode {}", self.episode_id);
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn placements(&self) -> u32 {
        self.placements
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn seed(&self) -> u32 {
        self.dealer.seed()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn offered(&self) -> &[Shape; OFFER_SLOTS] {
        &self.offered
    }

    pub fn shape_at(&self, slot: SlotIndex) -> Shape {
        self.offered[slot.get()]
    }

    /// Outcome of the last placement without consuming it.
    pub fn last_event(&self) -> Option<PlacementEvent> {
        self.last_event
    }

    /// Take and clear the last placement event.
    pub fn take_last_event(&mut self) -> Option<PlacementEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = self.board.to_grid();
        out.offered = self.offered;
        out.score = self.score;
        out.game_over = self.game_over;
        out.episode_id = self.episode_id;
        out.seed = self.dealer.seed();
        out.placements = self.placements;
        out.lines = self.lines;
        out.last_event = self.last_event;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Whether the block in `slot` fits with its top-left corner at `(x, y)`.
    pub fn is_valid_placement(&self, slot: SlotIndex, x: i16, y: i16) -> bool {
        is_valid_placement(&self.board, &self.offered[slot.get()], x, y)
    }

    /// Whether any offered block fits anywhere. Does not touch the terminal flag.
    pub fn has_valid_move(&self) -> bool {
        has_valid_move(&self.board, &self.offered)
    }

    /// Validate and place the block in `slot` at `(x, y)`.
    ///
    /// Returns false, changing nothing, if the game is over or the block does not
    /// fit. Otherwise the placement and all of its consequences are applied and
    /// true is returned.
    pub fn try_place(&mut self, slot: SlotIndex, x: i16, y: i16) -> bool {
        if self.game_over || !self.is_valid_placement(slot, x, y) {
            return false;
        }
        self.place_block(slot, x, y);
        true
    }

    /// Place without validating, then clear, refill and re-check for moves.
    fn place_block(&mut self, slot: SlotIndex, x: i16, y: i16) {
        let shape = self.offered[slot.get()];
        let marker = self.dealer.next_marker();
        self.board.fill_shape(&shape, x, y, marker);
        self.placements = self.placements.wrapping_add(1);

        let result = self.clear_lines();

        self.offered[slot.get()] = self.dealer.draw();

        self.update_game_over();

        self.last_event = Some(PlacementEvent {
            rows_cleared: result.rows as u8,
            cols_cleared: result.cols as u8,
            score_delta: result.total,
            game_over: self.game_over,
        });
    }

    /// Clear complete rows and columns and add their points.
    fn clear_lines(&mut self) -> ScoreResult {
        let cleared = self.board.clear_full_lines();
        let result = calculate_score(cleared.rows.len() as u32, cleared.cols.len() as u32);

        if result.lines() > 0 {
            self.lines = self.lines.saturating_add(result.lines());
            self.score = self.score.saturating_add(result.total);
            debug!(
                "cleared rows {:?} cols {:?}: +{} (score {})",
                cleared.rows.as_slice(),
                cleared.cols.as_slice(),
                result.total,
                self.score
            );
        }

        result
    }

    /// Recompute the terminal flag. Once set it stays set until restart.
    fn update_game_over(&mut self) {
        if self.game_over {
            return;
        }
        if !self.has_valid_move() {
            self.game_over = true;
            info!(
                "game over: score {} after {} placements",
                self.score, self.placements
            );
        }
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_offered(&mut self, slot: SlotIndex, shape: Shape) {
        self.offered[slot.get()] = shape;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::FilledCell;
    use crate::shapes::{get_shape, SHAPE_LIBRARY};
    use std::num::NonZeroU16;

    const SLOT0: SlotIndex = SlotIndex::ALL[0];
    const SLOT1: SlotIndex = SlotIndex::ALL[1];
    const SLOT2: SlotIndex = SlotIndex::ALL[2];

    fn filled() -> Option<FilledCell> {
        Some(FilledCell {
            marker: NonZeroU16::new(1).unwrap(),
            colors: get_shape(ShapeKind::Square).colors(),
        })
    }

    fn state_with(shapes: [ShapeKind; 3]) -> GameState {
        let mut state = GameState::new(12345);
        for (slot, kind) in SlotIndex::ALL.into_iter().zip(shapes) {
            state.set_offered(slot, get_shape(kind));
        }
        state
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);
        assert!(state.board().is_empty());
        assert_eq!(state.score(), 0);
        assert!(!state.game_over());
        assert_eq!(state.placements(), 0);
        assert_eq!(state.lines(), 0);
        assert!(state.last_event().is_none());
        for shape in state.offered() {
            assert!(SHAPE_LIBRARY.contains(shape));
        }
    }

    #[test]
    fn test_same_seed_same_offer() {
        let a = GameState::new(777);
        let b = GameState::new(777);
        assert_eq!(a.offered(), b.offered());
    }

    #[test]
    fn test_try_place_fills_mask_cells() {
        let mut state = state_with([ShapeKind::Ell, ShapeKind::Single, ShapeKind::Single]);
        let ell = get_shape(ShapeKind::Ell);

        assert!(state.try_place(SLOT0, 4, 2));

        for (dx, dy) in ell.cells() {
            let cell = state.board().get(4 + dx as i16, 2 + dy as i16).unwrap();
            assert_eq!(cell.map(|c| c.colors), Some(ell.colors()));
        }
        assert_eq!(state.board().filled_count(), 4);
        // The empty corner of the Ell's box stays empty.
        assert!(state.board().is_free(5, 2));
        assert_eq!(state.placements(), 1);
    }

    #[test]
    fn test_try_place_rejects_without_mutation() {
        let mut state = state_with([ShapeKind::Row6, ShapeKind::Single, ShapeKind::Single]);
        let before = state.snapshot();

        assert!(!state.try_place(SLOT0, 5, 0));
        assert!(!state.try_place(SLOT0, -1, 0));
        assert!(!state.try_place(SLOT0, 0, 10));
        assert!(!state.try_place(SLOT0, i16::MAX, i16::MAX));
        assert!(!state.try_place(SLOT0, i16::MIN, 0));

        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn test_try_place_rejects_collision() {
        let mut state = state_with([ShapeKind::Square, ShapeKind::Single, ShapeKind::Single]);
        state.board_mut().set(1, 1, filled());

        assert!(!state.try_place(SLOT0, 0, 0));
        assert!(!state.try_place(SLOT0, 1, 1));
        assert!(state.try_place(SLOT0, 2, 2));
    }

    #[test]
    fn test_placement_refills_only_used_slot() {
        let mut state = state_with([ShapeKind::Single, ShapeKind::Tee, ShapeKind::Column6]);
        assert!(state.try_place(SLOT0, 0, 0));
        assert_eq!(state.shape_at(SLOT1).kind(), ShapeKind::Tee);
        assert_eq!(state.shape_at(SLOT2).kind(), ShapeKind::Column6);
        assert!(SHAPE_LIBRARY.contains(&state.shape_at(SLOT0)));
    }

    #[test]
    fn test_single_row_clear_scores_100() {
        let mut state = state_with([ShapeKind::Single, ShapeKind::Single, ShapeKind::Single]);
        for x in 0..9 {
            state.board_mut().set(x, 9, filled());
        }

        assert!(state.try_place(SLOT0, 9, 9));
        assert_eq!(state.score(), 100);
        assert_eq!(state.lines(), 1);
        for x in 0..10 {
            assert!(state.board().is_free(x, 9));
        }
        let event = state.take_last_event().unwrap();
        assert_eq!(event.rows_cleared, 1);
        assert_eq!(event.cols_cleared, 0);
        assert_eq!(event.score_delta, 100);
        assert!(state.take_last_event().is_none());
    }

    #[test]
    fn test_two_rows_score_300() {
        let mut state = state_with([ShapeKind::Square, ShapeKind::Single, ShapeKind::Single]);
        for y in 0..2 {
            for x in 2..10 {
                state.board_mut().set(x, y, filled());
            }
        }

        assert!(state.try_place(SLOT0, 0, 0));
        assert_eq!(state.score(), 300);
        assert!(state.board().is_empty());
    }

    #[test]
    fn test_three_rows_score_1500() {
        let mut state = state_with([ShapeKind::Ell, ShapeKind::Single, ShapeKind::Single]);
        // The Ell at (0, 7) fills (0,7) (0,8) (0,9) (1,9).
        for y in 7..10 {
            for x in 1..10 {
                state.board_mut().set(x, y, filled());
            }
        }
        state.board_mut().set(1, 9, None);

        assert!(state.try_place(SLOT0, 0, 7));
        assert_eq!(state.score(), 1500);
        assert_eq!(state.lines(), 3);
        assert!(state.board().is_empty());
    }

    #[test]
    fn test_row_and_column_count_as_two_lines() {
        let mut state = state_with([ShapeKind::Single, ShapeKind::Single, ShapeKind::Single]);
        for i in 0..10 {
            if i != 5 {
                state.board_mut().set(i, 3, filled());
            }
            if i != 3 {
                state.board_mut().set(5, i, filled());
            }
        }

        assert!(state.try_place(SLOT0, 5, 3));
        assert_eq!(state.score(), 300);
        assert!(state.board().is_empty());
        let event = state.last_event().unwrap();
        assert_eq!((event.rows_cleared, event.cols_cleared), (1, 1));
        assert_eq!(event.lines_cleared(), 2);
    }

    #[test]
    fn test_score_accumulates() {
        let mut state = state_with([ShapeKind::Single, ShapeKind::Single, ShapeKind::Single]);
        for x in 0..9 {
            state.board_mut().set(x, 0, filled());
            state.board_mut().set(x, 1, filled());
        }
        assert!(state.try_place(SLOT0, 9, 0));
        state.set_offered(SLOT0, get_shape(ShapeKind::Single));
        assert!(state.try_place(SLOT0, 9, 1));
        assert_eq!(state.score(), 200);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut state = state_with([ShapeKind::Single, ShapeKind::Single, ShapeKind::Single]);
        for x in 0..9 {
            state.board_mut().set(x, 0, filled());
        }
        state.board_mut().set(4, 5, filled());
        assert!(state.try_place(SLOT0, 9, 0));
        assert!(state.score() > 0);

        state.restart();

        assert!(state.board().is_empty());
        assert_eq!(state.score(), 0);
        assert_eq!(state.lines(), 0);
        assert_eq!(state.placements(), 0);
        assert!(!state.game_over());
        assert!(state.last_event().is_none());
        assert_eq!(state.episode_id(), 1);
        for shape in state.offered() {
            assert!(SHAPE_LIBRARY.contains(shape));
        }
    }

    #[test]
    fn test_game_over_is_frozen_until_restart() {
        let mut state = state_with([ShapeKind::Square, ShapeKind::Square, ShapeKind::Square]);
        state.game_over = true;
        let before = state.snapshot();

        assert!(!state.try_place(SLOT0, 0, 0));
        assert_eq!(state.snapshot(), before);

        state.restart();
        assert!(!state.game_over());
        assert!(state.try_place(SLOT0, 0, 0));
    }

    #[test]
    fn test_has_valid_move_is_pure() {
        let mut state = state_with([ShapeKind::Row6, ShapeKind::Column6, ShapeKind::Tee]);
        for y in 0..10 {
            for x in 0..10 {
                if (x + y) % 2 == 0 {
                    state.board_mut().set(x, y, filled());
                }
            }
        }
        let before = state.snapshot();
        assert!(!state.has_valid_move());
        assert!(!state.has_valid_move());
        assert_eq!(state.snapshot(), before);
        // Only a placement updates the flag.
        assert!(!state.game_over());
    }

    #[test]
    fn test_from_parts_detects_dead_position() {
        let mut board = Board::new();
        for y in 0..10 {
            for x in 0..10 {
                if (x + y) % 2 == 0 {
                    board.set(x, y, filled());
                }
            }
        }
        let dead = [get_shape(ShapeKind::Square); 3];
        assert!(GameState::from_parts(board.clone(), dead, 1).game_over());

        let alive = [
            get_shape(ShapeKind::Square),
            get_shape(ShapeKind::Single),
            get_shape(ShapeKind::Square),
        ];
        assert!(!GameState::from_parts(board, alive, 1).game_over());
    }
}
