//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids widget
//! toolkits and renders into a simple framebuffer that is flushed to the
//! terminal as a diff against the previous frame.
//!
//! - [`fb`]: styled character framebuffer
//! - [`game_view`]: snapshot + selection to framebuffer, and mouse hit-testing
//! - [`renderer`]: crossterm backend

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use block_blast_core as core;
pub use block_blast_engine as engine;
pub use block_blast_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Hit, Layout, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
