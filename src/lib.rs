//! Block Blast (workspace facade crate).
//!
//! Re-exports the workspace crates as `block_blast::{core,engine,input,term,types}`
//! and hosts the pieces that tie them together for the terminal binary.

pub use block_blast_core as core;
pub use block_blast_engine as engine;
pub use block_blast_input as input;
pub use block_blast_term as term;
pub use block_blast_types as types;

pub mod config;
pub mod drag;

pub use config::Config;
pub use drag::DragState;
