//! Player-facing controller: the game plus a selection and a grid cursor.
//!
//! The core only knows anchors. The controller turns "pick up slot 2, move
//! to this cell, drop" into a centered placement, and keeps enough view state
//! for the renderer to draw the preview.

use crate::core::GameState;
use crate::place::{anchor_for_target, apply_drop, target_in_grid, PlaceError};
use crate::types::{GameAction, PlacementEvent, SlotIndex, GRID_SIZE};

/// Where the selected block would land if dropped now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ghost {
    pub anchor_x: i16,
    pub anchor_y: i16,
    pub valid: bool,
}

/// Selection state handed to the renderer alongside the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionView {
    pub selected: Option<SlotIndex>,
    pub cursor_x: u8,
    pub cursor_y: u8,
    pub ghost: Option<Ghost>,
    pub last_error: Option<PlaceError>,
}

#[derive(Debug, Clone)]
pub struct Controller {
    state: GameState,
    selected: Option<SlotIndex>,
    cursor_x: u8,
    cursor_y: u8,
    last_error: Option<PlaceError>,
}

impl Controller {
    pub fn new(seed: u32) -> Self {
        Self::from_state(GameState::new(seed))
    }

    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            selected: None,
            cursor_x: GRID_SIZE / 2,
            cursor_y: GRID_SIZE / 2,
            last_error: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn selected(&self) -> Option<SlotIndex> {
        self.selected
    }

    pub fn cursor(&self) -> (u8, u8) {
        (self.cursor_x, self.cursor_y)
    }

    pub fn last_error(&self) -> Option<PlaceError> {
        self.last_error
    }

    /// Apply one player action. Returns true if anything changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Select(slot) => self.select(slot),
            GameAction::Deselect => self.deselect(),
            GameAction::MoveLeft => self.move_cursor(-1, 0),
            GameAction::MoveRight => self.move_cursor(1, 0),
            GameAction::MoveUp => self.move_cursor(0, -1),
            GameAction::MoveDown => self.move_cursor(0, 1),
            GameAction::Drop => {
                let (x, y) = (self.cursor_x as i16, self.cursor_y as i16);
                self.drop_at(x, y).is_ok()
            }
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    pub fn select(&mut self, slot: SlotIndex) -> bool {
        if self.state.game_over() {
            self.last_error = Some(PlaceError::GameOver);
            return false;
        }
        self.last_error = None;
        let changed = self.selected != Some(slot);
        self.selected = Some(slot);
        changed
    }

    pub fn deselect(&mut self) -> bool {
        self.selected.take().is_some()
    }

    /// Move the cursor to a grid cell. Off-grid targets are ignored.
    pub fn set_cursor(&mut self, x: i16, y: i16) -> bool {
        if !target_in_grid(x, y) || (x as u8, y as u8) == (self.cursor_x, self.cursor_y) {
            return false;
        }
        self.cursor_x = x as u8;
        self.cursor_y = y as u8;
        true
    }

    fn move_cursor(&mut self, dx: i16, dy: i16) -> bool {
        let max = GRID_SIZE as i16 - 1;
        let x = (self.cursor_x as i16 + dx).clamp(0, max);
        let y = (self.cursor_y as i16 + dy).clamp(0, max);
        self.set_cursor(x, y)
    }

    /// Drop the selected block centered on `(x, y)` and move the cursor there.
    ///
    /// The selection is released on success and kept on a rejected drop.
    pub fn drop_at(&mut self, x: i16, y: i16) -> Result<PlacementEvent, PlaceError> {
        let result = match self.selected {
            None if self.state.game_over() => Err(PlaceError::GameOver),
            None => Err(PlaceError::NoSelection),
            Some(slot) => {
                self.set_cursor(x, y);
                apply_drop(&mut self.state, slot, x, y)
            }
        };

        match result {
            Ok(event) => {
                self.selected = None;
                self.last_error = None;
                log::debug!(
                    "placed: rows={} cols={} delta={} score={}",
                    event.rows_cleared,
                    event.cols_cleared,
                    event.score_delta,
                    self.state.score()
                );
            }
            Err(err) => {
                if err == PlaceError::GameOver {
                    self.selected = None;
                }
                self.last_error = Some(err);
                log::debug!("drop rejected at ({x}, {y}): {}", err.code());
            }
        }
        result
    }

    pub fn restart(&mut self) {
        self.state.restart();
        self.selected = None;
        self.last_error = None;
        self.cursor_x = GRID_SIZE / 2;
        self.cursor_y = GRID_SIZE / 2;
    }

    pub fn selection_view(&self) -> SelectionView {
        let ghost = self.selected.map(|slot| {
            let shape = self.state.shape_at(slot);
            let (anchor_x, anchor_y) =
                anchor_for_target(&shape, self.cursor_x as i16, self.cursor_y as i16);
            Ghost {
                anchor_x,
                anchor_y,
                valid: self.state.is_valid_placement(slot, anchor_x, anchor_y),
            }
        });
        SelectionView {
            selected: self.selected,
            cursor_x: self.cursor_x,
            cursor_y: self.cursor_y,
            ghost,
            last_error: self.last_error,
        }
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(1)
    }
}
