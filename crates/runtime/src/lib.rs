//! Navigation agent for grid maze games.
//!
//! This crate turns a [`maze_core::MazeOracle`] into a sparse graph of
//! decision points and drives a per-frame direction policy on top of it.
//! Hosts embed a [`PlayerProvider`] and call it once per frame.
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the provider trait hosts program against
//! - [`graph`] builds the node graph and searches paths through it
//! - [`providers`] hosts the graph-backed decision engine
pub mod api;
pub mod graph;
pub mod providers;

pub use api::{HoldHeadingProvider, PlayerProvider};
pub use graph::{
    Edge, MazeGraph, NodeEdges, directions_along, enumerate_paths, shortest_path,
    walk_to_next_node,
};
pub use providers::ai::{DecisionContext, GraphAgent, TileClass};
