//! Sparse, incremental engine for Conway's Game of Life on an unbounded grid.

pub mod enc;
pub mod engine;
pub mod pos;
pub mod window;

pub use enc::{DecodeError, PositionEncoder, RunLengthEncoded};
pub use engine::{GameOfLife, LiveSet};
pub use pos::Pos2;
pub use window::CellWindow;
