//! Terminal input module (engine-facing).
//!
//! Independent of any UI framework. Maps `crossterm` key events into
//! [`crate::types::GameAction`] and reduces mouse events to left-button
//! pointer gestures in terminal cell coordinates. Turning a pointer position
//! into a grid cell or tray slot is the renderer's job, since only it knows
//! the layout.

pub mod map;
pub mod pointer;

pub use block_blast_types as types;

pub use map::{handle_key_event, should_quit};
pub use pointer::{map_mouse_event, Pointer, PointerKind};
