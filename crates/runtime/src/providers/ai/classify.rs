//! Tile classification driving the per-frame policy.

use maze_core::{Item, MazeOracle, Tile};

/// Shape of the agent's tile as the policy sees it.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum TileClass {
    /// Straight segment; keep going unless something is waiting ahead.
    Corridor,
    /// Two open sides on perpendicular axes.
    Corner,
    /// One open side. Teleport tiles never count.
    DeadEnd,
    /// Three or more open sides.
    Intersection,
    /// First frame after a spawn on a tile that is not a dead end.
    Spawn,
}

impl TileClass {
    /// Classifies `tile`, checking in order: corridor, corner, dead end,
    /// intersection. Everything but a dead end yields [`TileClass::Spawn`]
    /// on the first frame of a life.
    ///
    /// A tile is a corridor only when the oracle does not report it as an
    /// intersection, so hosts that mark extra decision points get them
    /// treated as such.
    pub fn of<M: MazeOracle + ?Sized>(maze: &M, tile: Tile, first_step: bool) -> Self {
        let intersection = maze.is_intersection(tile);
        let dead_end = maze.is_dead_end(tile) && maze.tile_item(tile) != Item::Teleport;
        let neighbours = maze.accessible_neighbours(tile);
        let corner = maze.is_accessible(tile)
            && neighbours.len() == 2
            && neighbours[0].x != neighbours[1].x
            && neighbours[0].y != neighbours[1].y;

        if !first_step && !intersection && !dead_end && !corner {
            // Includes isolated floor and teleport ends.
            TileClass::Corridor
        } else if !first_step && corner {
            TileClass::Corner
        } else if dead_end {
            TileClass::DeadEnd
        } else if !first_step && intersection {
            TileClass::Intersection
        } else {
            TileClass::Spawn
        }
    }
}
