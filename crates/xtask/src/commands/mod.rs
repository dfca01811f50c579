//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod graph;
mod paths;
mod play;

pub use graph::Graph;
pub use paths::Paths;
pub use play::Play;
