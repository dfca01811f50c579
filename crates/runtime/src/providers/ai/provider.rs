//! Stateful agent driving the per-frame policy.

use maze_core::{AgentConfig, Direction, MazeOracle, WorldSnapshot};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{DecisionContext, TileClass, tactics};
use crate::api::PlayerProvider;
use crate::graph::MazeGraph;

/// Navigation agent backed by a [`MazeGraph`] of the current level.
///
/// Cross-frame state is limited to the graph, a first-frame flag, the
/// lives counter and the RNG used by the random fallback. With
/// `rng_seed` set, runs are fully reproducible.
#[derive(Debug)]
pub struct GraphAgent {
    config: AgentConfig,
    graph: Option<MazeGraph>,
    first_step: bool,
    lives: u32,
    rng: StdRng,
}

impl GraphAgent {
    pub fn new(config: AgentConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            lives: config.initial_lives,
            config,
            graph: None,
            first_step: true,
            rng,
        }
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Graph of the current level, if one has been built.
    pub fn graph(&self) -> Option<&MazeGraph> {
        self.graph.as_ref()
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn is_first_step(&self) -> bool {
        self.first_step
    }
}

impl Default for GraphAgent {
    fn default() -> Self {
        Self::new(AgentConfig::default())
    }
}

impl PlayerProvider for GraphAgent {
    fn on_level_start(&mut self, maze: &dyn MazeOracle, _world: &WorldSnapshot) {
        let graph = MazeGraph::build(maze);
        tracing::info!(
            "level start: graph has {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        self.graph = Some(graph);
        self.first_step = true;
    }

    fn on_new_life(&mut self, _maze: &dyn MazeOracle, _world: &WorldSnapshot) {
        tracing::info!("new life: {} lives remaining", self.lives);
        self.lives = self.lives.saturating_sub(1);
        self.first_step = true;
    }

    fn decide_direction(&mut self, maze: &dyn MazeOracle, world: &WorldSnapshot) -> Direction {
        let graph = self.graph.get_or_insert_with(|| {
            tracing::warn!("no graph for this level; building it now");
            MazeGraph::build(maze)
        });
        let ctx = DecisionContext::new(maze, world, graph, &self.config);
        let class = TileClass::of(maze, world.agent.tile, self.first_step);

        let direction = match class {
            TileClass::Corridor => tactics::corridor(&ctx),
            TileClass::Corner => tactics::corner(&ctx),
            TileClass::DeadEnd => tactics::dead_end(&ctx),
            TileClass::Intersection => tactics::intersection(&ctx, &mut self.rng),
            TileClass::Spawn => self.config.spawn_heading,
        };
        self.first_step = false;

        tracing::debug!(
            "agent at {} heading {}: {} -> {}",
            world.agent.tile,
            world.agent.heading,
            class,
            direction
        );
        direction
    }
}
