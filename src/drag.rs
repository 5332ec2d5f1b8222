//! Mouse drag-and-drop on top of the controller.
//!
//! Press on a tray slot picks the block up, dragging over the grid moves the
//! target cell, and releasing over a cell drops there. Releasing anywhere
//! off the grid and off the tray puts the block back.

use crate::engine::Controller;
use crate::input::PointerKind;
use crate::term::Hit;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    dragging: bool,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Feed one left-button gesture with what lies under it. Returns true if
    /// the controller changed and the frame needs redrawing.
    pub fn handle(
        &mut self,
        controller: &mut Controller,
        kind: PointerKind,
        hit: Option<Hit>,
    ) -> bool {
        match (kind, hit) {
            (PointerKind::Press, Some(Hit::Slot(slot))) => {
                let error_before = controller.last_error();
                let changed = controller.select(slot);
                self.dragging = controller.selected() == Some(slot);
                changed || self.dragging || controller.last_error() != error_before
            }
            // Click-to-place for a block picked up with the keyboard.
            (PointerKind::Press, Some(Hit::Cell { x, y })) if controller.selected().is_some() => {
                self.dragging = false;
                let placed = controller.drop_at(x as i16, y as i16).is_ok();
                // A rejected drop redraws too, to show the error.
                placed || controller.last_error().is_some()
            }
            (PointerKind::Press, _) => false,

            (PointerKind::Drag, Some(Hit::Cell { x, y })) if self.dragging => {
                controller.set_cursor(x as i16, y as i16)
            }
            (PointerKind::Drag, _) => false,

            (PointerKind::Release, hit) if self.dragging => {
                self.dragging = false;
                match hit {
                    Some(Hit::Cell { x, y }) => {
                        let placed = controller.drop_at(x as i16, y as i16).is_ok();
                        placed || controller.last_error().is_some()
                    }
                    // Released back on the tray: keep the pick for keyboard or click placing.
                    Some(Hit::Slot(_)) => false,
                    None => controller.deselect(),
                }
            }
            (PointerKind::Release, _) => false,
        }
    }
}
