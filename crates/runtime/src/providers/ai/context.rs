//! Read-only view of one frame, shared by every decision step.

use maze_core::{AgentConfig, Direction, MazeOracle, Tile, WorldSnapshot};

use crate::graph::{MazeGraph, walk_to_next_node};

use super::scoring;

/// Everything the policy may look at while choosing a heading.
///
/// Built fresh each frame by [`super::GraphAgent`]; nothing here outlives
/// the call to `decide_direction`.
pub struct DecisionContext<'a, M: MazeOracle + ?Sized> {
    pub maze: &'a M,
    pub world: &'a WorldSnapshot,
    pub graph: &'a MazeGraph,
    pub config: &'a AgentConfig,
}

// Manual impls: a derive would require `M: Clone`.
impl<M: MazeOracle + ?Sized> Clone for DecisionContext<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: MazeOracle + ?Sized> Copy for DecisionContext<'_, M> {}

impl<'a, M: MazeOracle + ?Sized> DecisionContext<'a, M> {
    pub fn new(
        maze: &'a M,
        world: &'a WorldSnapshot,
        graph: &'a MazeGraph,
        config: &'a AgentConfig,
    ) -> Self {
        Self {
            maze,
            world,
            graph,
            config,
        }
    }

    pub fn agent_tile(&self) -> Tile {
        self.world.agent.tile
    }

    pub fn heading(&self) -> Direction {
        self.world.agent.heading
    }

    /// Whether the tile one step from the agent in `direction` is floor.
    pub fn can_move(&self, direction: Direction) -> bool {
        self.maze.is_accessible(self.agent_tile().step(direction))
    }

    /// Whether a dangerous adversary sits within `safe_distance` tiles of
    /// `from` along the corridor leaving it in `direction`.
    ///
    /// The lookahead follows corners and never goes past the next node.
    pub fn threat_ahead(&self, from: Tile, direction: Direction) -> bool {
        walk_to_next_node(self.maze, from, direction)
            .into_iter()
            .take(self.config.safe_distance)
            .any(|tile| self.world.is_threatened_at(tile))
    }

    /// Whether a dangerous adversary is on `tile` or on any tile next to it.
    pub fn threat_around(&self, tile: Tile) -> bool {
        self.world.is_threatened_at(tile)
            || self
                .maze
                .accessible_neighbours(tile)
                .into_iter()
                .any(|neighbour| self.world.is_threatened_at(neighbour))
    }

    pub fn tile_score(&self, tile: Tile) -> i32 {
        scoring::tile_score(self, tile)
    }

    pub fn path_score(&self, tiles: &[Tile]) -> i32 {
        scoring::path_score(self, tiles)
    }
}
