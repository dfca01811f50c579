//! Value types describing positions, headings and the per-frame world.
//!
//! Nothing here is retained across frames by the library: the host hands a
//! fresh [`WorldSnapshot`] to the agent on every call.
mod common;
mod world;

pub use common::{Direction, Tile};
pub use world::{Adversary, AdversaryState, AgentState, WorldSnapshot};
