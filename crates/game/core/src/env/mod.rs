//! Traits describing read-only maze data.
//!
//! The host game owns the maze; the agent only sees it through
//! [`MazeOracle`]. [`GridMaze`] is an in-memory oracle built from an ASCII
//! layout, used by tooling and tests.
mod error;
mod grid;
mod maze;

pub use error::LayoutError;
pub use grid::{GridMaze, ParsedLayout, parse_layout};
pub use maze::{Item, MazeDimensions, MazeOracle, Neighbours};
