use crate::core::{GameState, Shape};
use crate::types::{PlacementEvent, SlotIndex, GRID_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    GameOver,
    NoSelection,
    TargetOutOfBounds,
    Blocked,
}

impl PlaceError {
    pub fn code(self) -> &'static str {
        match self {
            PlaceError::GameOver => "game_over",
            PlaceError::NoSelection => "no_selection",
            PlaceError::TargetOutOfBounds | PlaceError::Blocked => "invalid_place",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PlaceError::GameOver => "game is over, press R to restart",
            PlaceError::NoSelection => "pick a block first (1-3)",
            PlaceError::TargetOutOfBounds => "target cell is outside the grid",
            PlaceError::Blocked => "block does not fit there",
        }
    }
}

/// Anchor (top-left corner) for a shape dropped with its middle on `(target_x, target_y)`.
pub fn anchor_for_target(shape: &Shape, target_x: i16, target_y: i16) -> (i16, i16) {
    (
        target_x - shape.width() as i16 / 2,
        target_y - shape.height() as i16 / 2,
    )
}

pub fn target_in_grid(target_x: i16, target_y: i16) -> bool {
    let size = GRID_SIZE as i16;
    (0..size).contains(&target_x) && (0..size).contains(&target_y)
}

/// Drop the block in `slot` centered on the target cell.
///
/// The target must be a grid cell; the block is shifted so its middle lands on it.
pub fn apply_drop(
    state: &mut GameState,
    slot: SlotIndex,
    target_x: i16,
    target_y: i16,
) -> Result<PlacementEvent, PlaceError> {
    if state.game_over() {
        return Err(PlaceError::GameOver);
    }
    if !target_in_grid(target_x, target_y) {
        return Err(PlaceError::TargetOutOfBounds);
    }

    let (x, y) = anchor_for_target(&state.shape_at(slot), target_x, target_y);
    if !state.try_place(slot, x, y) {
        return Err(PlaceError::Blocked);
    }

    Ok(state.last_event().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{get_shape, Board, GameState};
    use crate::types::ShapeKind;

    fn state_with(kind: ShapeKind) -> GameState {
        GameState::from_parts(Board::new(), [get_shape(kind); 3], 1)
    }

    #[test]
    fn anchor_centers_the_shape() {
        assert_eq!(anchor_for_target(&get_shape(ShapeKind::Single), 4, 4), (4, 4));
        assert_eq!(anchor_for_target(&get_shape(ShapeKind::Square), 4, 4), (3, 3));
        assert_eq!(anchor_for_target(&get_shape(ShapeKind::Ell), 4, 4), (3, 3));
        assert_eq!(anchor_for_target(&get_shape(ShapeKind::Row6), 4, 4), (1, 4));
        assert_eq!(anchor_for_target(&get_shape(ShapeKind::Column6), 0, 0), (0, -3));
    }

    #[test]
    fn drop_places_centered_block() {
        let mut gs = state_with(ShapeKind::Square);
        let slot = SlotIndex::ALL[0];
        let event = apply_drop(&mut gs, slot, 5, 5).unwrap();
        assert_eq!(event.score_delta, 0);
        for (x, y) in [(4, 4), (5, 4), (4, 5), (5, 5)] {
            assert!(gs.board().is_occupied(x, y));
        }
    }

    #[test]
    fn drop_rejected_outside_grid() {
        let mut gs = state_with(ShapeKind::Single);
        let err = apply_drop(&mut gs, SlotIndex::ALL[1], 10, 0).unwrap_err();
        assert_eq!(err, PlaceError::TargetOutOfBounds);
        assert!(gs.board().is_empty());
    }

    #[test]
    fn drop_rejected_when_block_hangs_off_edge() {
        let mut gs = state_with(ShapeKind::Column6);
        let err = apply_drop(&mut gs, SlotIndex::ALL[0], 0, 1).unwrap_err();
        assert_eq!(err, PlaceError::Blocked);
        assert_eq!(err.code(), "invalid_place");
        assert!(apply_drop(&mut gs, SlotIndex::ALL[0], 0, 3).is_ok());
    }

    #[test]
    fn drop_rejected_when_game_over() {
        let mut board = Board::new();
        let single = get_shape(ShapeKind::Single);
        for y in 0..10 {
            for x in 0..10 {
                if (x + y) % 2 == 0 {
                    board.fill_shape(&single, x, y, std::num::NonZeroU16::MIN);
                }
            }
        }
        let mut gs = GameState::from_parts(board, [get_shape(ShapeKind::Square); 3], 1);
        assert!(gs.game_over());
        let err = apply_drop(&mut gs, SlotIndex::ALL[0], 1, 0).unwrap_err();
        assert_eq!(err, PlaceError::GameOver);
    }
}
