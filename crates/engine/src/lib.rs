//! Engine-facing helpers on top of the core rules.
//!
//! - [`place`]: drop translation (target cell to anchor) and placement errors
//! - [`controller`]: selection, cursor and action dispatch for the front end

pub mod controller;
pub mod place;

pub use block_blast_core as core;
pub use block_blast_types as types;

pub use controller::{Controller, Ghost, SelectionView};
pub use place::{anchor_for_target, apply_drop, target_in_grid, PlaceError};
