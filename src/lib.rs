//! Tetrimino (workspace facade crate).
//!
//! Re-exports the member crates under one name: `tetrimino::{types,core,engine}`.
//! The implementation lives in dedicated crates under `crates/`.

pub use tetrimino_core as core;
pub use tetrimino_engine as engine;
pub use tetrimino_types as types;
