//! Data-driven level and agent configuration loaders.
//!
//! This crate reads the files a host or developer tool feeds the agent:
//! - Level layouts (RON, ASCII rows plus metadata)
//! - Agent tuning (TOML, see [`maze_core::AgentConfig`])
//!
//! Content is consumed by hosts and tooling; the agent itself only ever sees
//! the resulting oracle and configuration values.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, Level, LevelLoader, LoadResult};
