//! Abstraction for sourcing the agent's heading each frame.
//!
//! Hosts plug in [`PlayerProvider`] implementations so a game loop can run
//! with the graph agent, scripted fixtures, or human input.
use maze_core::{Direction, MazeOracle, WorldSnapshot};

/// Per-frame direction source for the player-controlled agent.
///
/// The host calls [`on_level_start`](Self::on_level_start) once per level,
/// [`on_new_life`](Self::on_new_life) after every respawn, and
/// [`decide_direction`](Self::decide_direction) once per frame in between.
pub trait PlayerProvider: Send {
    fn on_level_start(&mut self, maze: &dyn MazeOracle, world: &WorldSnapshot);

    fn on_new_life(&mut self, maze: &dyn MazeOracle, world: &WorldSnapshot);

    /// Heading the agent should take this frame.
    fn decide_direction(&mut self, maze: &dyn MazeOracle, world: &WorldSnapshot) -> Direction;
}

/// A provider that never turns.
/// Useful for testing or as a fallback.
#[derive(Clone, Copy, Debug, Default)]
pub struct HoldHeadingProvider;

impl PlayerProvider for HoldHeadingProvider {
    fn on_level_start(&mut self, _maze: &dyn MazeOracle, _world: &WorldSnapshot) {}

    fn on_new_life(&mut self, _maze: &dyn MazeOracle, _world: &WorldSnapshot) {}

    fn decide_direction(&mut self, _maze: &dyn MazeOracle, world: &WorldSnapshot) -> Direction {
        world.agent.heading
    }
}
