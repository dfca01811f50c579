//! Maze data types and read-only oracles shared across the agent crates.
//!
//! `maze-core` defines the vocabulary the navigation agent speaks: tiles,
//! movement directions, collectible items, adversary states, the per-frame
//! [`WorldSnapshot`] and the [`MazeOracle`] trait through which the host game
//! exposes its static layout. Supporting crates depend on the types
//! re-exported here.
pub mod config;
pub mod env;
pub mod error;
pub mod state;

pub use config::{AgentConfig, ConfigError};
pub use env::{GridMaze, Item, LayoutError, MazeDimensions, MazeOracle, ParsedLayout, parse_layout};
pub use error::GameError;
pub use state::{Adversary, AdversaryState, AgentState, Direction, Tile, WorldSnapshot};
