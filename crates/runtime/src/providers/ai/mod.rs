//! Graph-backed navigation agent.
//!
//! Each frame the agent classifies its tile and applies one steering rule:
//!
//! 1. **Corridor**: hold heading, reverse if a threat waits ahead
//! 2. **Corner**: take the open turn, reverse if the turn is guarded
//! 3. **Dead end**: reverse
//! 4. **Intersection**: score the branches leaving the node
//! 5. **Spawn**: emit the configured spawn heading
//!
//! # Branch scoring
//!
//! At intersections the agent prefers the edge with the best one-hop score,
//! then the best two-hop score, then falls back to hunting the nearest dot
//! (late in a level) or a random safe direction.
//!
//! # Core Components
//!
//! - [`GraphAgent`]: provider implementing [`crate::PlayerProvider`]
//! - [`DecisionContext`]: per-frame view handed to every rule
//! - [`TileClass`]: tile classification with fixed precedence
//! - [`scoring`]: tile and branch scoring plus the fallbacks

pub mod classify;
pub mod context;
pub mod provider;
pub mod scoring;
pub mod tactics;

pub use classify::TileClass;
pub use context::DecisionContext;
pub use provider::GraphAgent;
