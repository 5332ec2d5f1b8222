//! Left-button mouse gestures.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Press,
    Drag,
    Release,
}

/// A left-button gesture at a terminal cell (0-based column/row).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pointer {
    pub kind: PointerKind,
    pub column: u16,
    pub row: u16,
}

/// Reduce a terminal mouse event to a left-button gesture.
///
/// Plain motion, scrolling and other buttons map to `None`.
pub fn map_mouse_event(event: MouseEvent) -> Option<Pointer> {
    let kind = match event.kind {
        MouseEventKind::Down(MouseButton::Left) => PointerKind::Press,
        MouseEventKind::Drag(MouseButton::Left) => PointerKind::Drag,
        MouseEventKind::Up(MouseButton::Left) => PointerKind::Release,
        _ => return None,
    };
    Some(Pointer {
        kind,
        column: event.column,
        row: event.row,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn left_button_gestures() {
        assert_eq!(
            map_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 3, 4)),
            Some(Pointer {
                kind: PointerKind::Press,
                column: 3,
                row: 4
            })
        );
        assert_eq!(
            map_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), 5, 6)).map(|p| p.kind),
            Some(PointerKind::Drag)
        );
        assert_eq!(
            map_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 0, 0)).map(|p| p.kind),
            Some(PointerKind::Release)
        );
    }

    #[test]
    fn other_mouse_events_ignored() {
        assert_eq!(map_mouse_event(mouse(MouseEventKind::Moved, 1, 1)), None);
        assert_eq!(map_mouse_event(mouse(MouseEventKind::ScrollDown, 1, 1)), None);
        assert_eq!(
            map_mouse_event(mouse(MouseEventKind::Down(MouseButton::Right), 1, 1)),
            None
        );
    }
}
