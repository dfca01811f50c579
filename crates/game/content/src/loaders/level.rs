//! Level data loader.
//!
//! Loads a maze layout and its spawn markers from a RON file. The layout is
//! stored as ASCII rows so levels stay readable and diffable.

use std::path::Path;

use maze_core::{
    AdversaryState, AgentState, Direction, GridMaze, MazeOracle, Tile, WorldSnapshot, parse_layout,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Level data structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LevelDataRon {
    name: String,
    rows: Vec<String>,
    /// State assigned to every adversary spawn when the level starts.
    #[serde(default = "default_adversary_state")]
    adversary_state: AdversaryState,
}

fn default_adversary_state() -> AdversaryState {
    AdversaryState::Chaser
}

/// A loaded level: the maze plus where everything starts.
#[derive(Debug, Clone)]
pub struct Level {
    pub name: String,
    pub maze: GridMaze,
    pub agent_spawn: Tile,
    pub adversary_spawns: Vec<Tile>,
    pub adversary_state: AdversaryState,
}

impl Level {
    /// Builds the snapshot a host would report on level start.
    pub fn initial_world(&self, heading: Direction) -> WorldSnapshot {
        self.adversary_spawns.iter().fold(
            WorldSnapshot::new(AgentState::new(self.agent_spawn, heading)),
            |world, tile| world.with_adversary(*tile, self.adversary_state),
        )
    }
}

/// Loader for level data from RON files.
pub struct LevelLoader;

impl LevelLoader {
    /// Names accepted by [`LevelLoader::builtin`].
    pub const BUILTIN: [&'static str; 2] = ["classic", "hallway"];

    /// Loads one of the levels embedded in the crate.
    pub fn builtin(name: &str) -> LoadResult<Level> {
        let content = match name {
            "classic" => include_str!("../../data/levels/classic.ron"),
            "hallway" => include_str!("../../data/levels/hallway.ron"),
            other => anyhow::bail!(
                "Unknown built-in level '{}' (expected one of {:?})",
                other,
                Self::BUILTIN
            ),
        };
        Self::parse(content)
    }

    /// Load a level from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing the level
    pub fn load(path: &Path) -> LoadResult<Level> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a level from RON source.
    ///
    /// Levels without a `P` marker spawn the agent on the first accessible
    /// tile in row-major order.
    pub fn parse(content: &str) -> LoadResult<Level> {
        let data: LevelDataRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse level RON: {}", e))?;

        let layout = parse_layout(&data.rows)
            .map_err(|e| anyhow::anyhow!("Invalid layout in level '{}': {}", data.name, e))?;

        let agent_spawn = match layout.agent_spawn {
            Some(tile) => tile,
            None => layout
                .maze
                .dimensions()
                .tiles()
                .find(|tile| layout.maze.is_accessible(*tile))
                .ok_or_else(|| anyhow::anyhow!("Level '{}' has no accessible tile", data.name))?,
        };

        Ok(Level {
            name: data.name,
            maze: layout.maze,
            agent_spawn,
            adversary_spawns: layout.adversary_spawns,
            adversary_state: data.adversary_state,
        })
    }
}
