use maze_content::LevelLoader;
use maze_core::{
    AdversaryState, AgentConfig, AgentState, Direction, GridMaze, Item, MazeDimensions, MazeOracle,
    Tile, WorldSnapshot,
};
use maze_runtime::{GraphAgent, HoldHeadingProvider, PlayerProvider};

fn seeded(seed: u64) -> GraphAgent {
    GraphAgent::new(AgentConfig::default().with_seed(seed))
}

/// Starts a level and spends the spawn frame, so the next decision is a
/// regular one.
fn start(agent: &mut GraphAgent, maze: &GridMaze, world: &WorldSnapshot) {
    agent.on_level_start(maze, world);
    agent.decide_direction(maze, world);
}

// Node (4,1): dotted dead end to the Left, blank dead end Down, and a
// blank dead end to the Right.
const TRIDENT: [&str; 5] = [
    "#########", //
    "#...    #", //
    "#### ####", //
    "#### ####", //
    "#########", //
];

// Three intersections in a row along the top; the only dot hangs below
// the far one, out of two-hop reach from the near one.
const CHAIN: [&str; 4] = [
    "###########", //
    "#         #", //
    "## ## ##.##", //
    "###########", //
];

/// Host oracle that reports one straight tile as an intersection.
struct MarkedJunction {
    grid: GridMaze,
    junction: Tile,
}

impl MazeOracle for MarkedJunction {
    fn dimensions(&self) -> MazeDimensions {
        self.grid.dimensions()
    }

    fn is_accessible(&self, tile: Tile) -> bool {
        self.grid.is_accessible(tile)
    }

    fn tile_item(&self, tile: Tile) -> Item {
        self.grid.tile_item(tile)
    }

    fn dots_count(&self) -> usize {
        self.grid.dots_count()
    }

    fn is_intersection(&self, tile: Tile) -> bool {
        tile == self.junction || self.grid.is_intersection(tile)
    }
}

#[test]
fn marked_junction_scores_branches_instead_of_holding() {
    let grid = GridMaze::from_rows(&["##########", "#..      #", "##########"]).unwrap();
    let world = WorldSnapshot::new(AgentState::new(Tile::new(3, 1), Direction::Right));

    let mut agent = seeded(1);
    start(&mut agent, &grid, &world);
    assert_eq!(agent.decide_direction(&grid, &world), Direction::Right);

    let maze = MarkedJunction {
        grid,
        junction: Tile::new(3, 1),
    };
    let mut agent = seeded(1);
    agent.on_level_start(&maze, &world);
    agent.decide_direction(&maze, &world);
    assert!(agent.graph().unwrap().is_node(Tile::new(3, 1)));
    assert_eq!(agent.decide_direction(&maze, &world), Direction::Left);
}

#[test]
fn straight_corridor_holds_heading() {
    let maze = GridMaze::from_rows(&["###########", "#         #", "###########"]).unwrap();
    let mut agent = seeded(1);
    let mut world = WorldSnapshot::new(AgentState::new(Tile::new(2, 1), Direction::Right));
    start(&mut agent, &maze, &world);

    for _ in 0..5 {
        world.agent.tile = world.agent.tile.step(world.agent.heading);
        let direction = agent.decide_direction(&maze, &world);
        assert_eq!(direction, Direction::Right, "at {}", world.agent.tile);
        world.agent.heading = direction;
    }
}

#[test]
fn dead_end_reverses_incoming_heading() {
    let maze = GridMaze::from_rows(&TRIDENT).unwrap();
    let mut agent = seeded(1);
    for heading in [Direction::Left, Direction::Up] {
        let world = WorldSnapshot::new(AgentState::new(Tile::new(1, 1), heading));
        start(&mut agent, &maze, &world);
        assert_eq!(agent.decide_direction(&maze, &world), heading.opposite());
    }
}

#[test]
fn spawn_frame_uses_configured_heading() {
    let maze = GridMaze::from_rows(&TRIDENT).unwrap();
    let config = AgentConfig::default()
        .with_seed(3)
        .with_spawn_heading(Direction::Down);
    let mut agent = GraphAgent::new(config);
    let world = WorldSnapshot::new(AgentState::new(Tile::new(6, 1), Direction::Right));

    agent.on_level_start(&maze, &world);
    assert!(agent.is_first_step());
    assert_eq!(agent.decide_direction(&maze, &world), Direction::Down);
    assert!(!agent.is_first_step());
    assert_eq!(agent.decide_direction(&maze, &world), Direction::Right);

    agent.on_new_life(&maze, &world);
    assert_eq!(agent.decide_direction(&maze, &world), Direction::Down);
}

#[test]
fn prefers_dotted_branch_over_guarded_one() {
    let maze = GridMaze::from_rows(&TRIDENT).unwrap();
    let mut agent = seeded(1);
    let world = WorldSnapshot::new(AgentState::new(Tile::new(4, 1), Direction::Right))
        .with_adversary(Tile::new(5, 1), AdversaryState::Chaser);
    start(&mut agent, &maze, &world);

    assert_eq!(agent.decide_direction(&maze, &world), Direction::Left);
}

#[test]
fn frightened_adversary_draws_the_agent() {
    let maze = GridMaze::from_rows(&["#########", "#       #", "#### ####", "#########"])
        .unwrap();
    let mut agent = seeded(1);
    let world = WorldSnapshot::new(AgentState::new(Tile::new(4, 1), Direction::Down))
        .with_adversary(Tile::new(6, 1), AdversaryState::Frighten);
    start(&mut agent, &maze, &world);

    assert_eq!(agent.decide_direction(&maze, &world), Direction::Right);
}

#[test]
fn uninformative_branches_fall_back_to_a_safe_direction() {
    let maze = GridMaze::from_rows(&["#########", "#       #", "#### ####", "#### ####", "#########"])
        .unwrap();
    let config = AgentConfig::default().with_low_dot_threshold(0);
    let world = WorldSnapshot::new(AgentState::new(Tile::new(4, 1), Direction::Right))
        .with_adversary(Tile::new(5, 1), AdversaryState::Chaser);

    for seed in 0..16 {
        let mut agent = GraphAgent::new(config.clone().with_seed(seed));
        start(&mut agent, &maze, &world);
        let direction = agent.decide_direction(&maze, &world);
        assert!(
            matches!(direction, Direction::Down | Direction::Left),
            "seed {seed} chose {direction}"
        );
    }
}

#[test]
fn few_dots_left_means_heading_for_the_nearest() {
    let maze = GridMaze::from_rows(&CHAIN).unwrap();
    assert!(maze.dots_count() < AgentConfig::DEFAULT_LOW_DOT_THRESHOLD);
    let mut agent = seeded(1);

    let open = WorldSnapshot::new(AgentState::new(Tile::new(2, 1), Direction::Left));
    start(&mut agent, &maze, &open);
    assert_eq!(agent.decide_direction(&maze, &open), Direction::Right);

    let guarded = open.clone().with_adversary(Tile::new(4, 1), AdversaryState::Chaser);
    assert_eq!(agent.decide_direction(&maze, &guarded), Direction::Down);
}

#[test]
fn builds_graph_lazily_when_level_start_was_skipped() {
    let maze = GridMaze::from_rows(&TRIDENT).unwrap();
    let mut agent = seeded(1);
    let world = WorldSnapshot::new(AgentState::new(Tile::new(1, 1), Direction::Left));

    assert!(agent.graph().is_none());
    assert_eq!(agent.decide_direction(&maze, &world), Direction::Right);
    assert_eq!(agent.graph().map(|graph| graph.node_count()), Some(4));
}

#[test]
fn lives_count_down_and_stop_at_zero() {
    let maze = GridMaze::from_rows(&TRIDENT).unwrap();
    let world = WorldSnapshot::new(AgentState::new(Tile::new(4, 1), Direction::Right));
    let mut agent = seeded(1);
    assert_eq!(agent.lives(), 3);

    for expected in [2, 1, 0, 0] {
        agent.on_new_life(&maze, &world);
        assert_eq!(agent.lives(), expected);
    }
}

#[test]
fn same_seed_same_run() {
    let level = LevelLoader::builtin("classic").unwrap();
    let run = |seed: u64| {
        let mut maze = level.maze.clone();
        let mut agent = GraphAgent::new(
            AgentConfig::default()
                .with_seed(seed)
                .with_low_dot_threshold(0),
        );
        let mut world = level.initial_world(Direction::Right);
        agent.on_level_start(&maze, &world);

        let mut trail = Vec::new();
        for _ in 0..60 {
            let direction = agent.decide_direction(&maze, &world);
            let next = world.agent.tile.step(direction);
            if maze.is_accessible(next) {
                world.agent.tile = next;
                maze.consume(next);
            }
            world.agent.heading = direction;
            trail.push(world.agent.tile);
        }
        trail
    };

    assert_eq!(run(42), run(42));
}

#[test]
fn hold_heading_provider_never_turns() {
    let maze = GridMaze::from_rows(&TRIDENT).unwrap();
    let world = WorldSnapshot::new(AgentState::new(Tile::new(1, 1), Direction::Left));
    let mut provider: Box<dyn PlayerProvider> = Box::new(HoldHeadingProvider);

    provider.on_level_start(&maze, &world);
    assert_eq!(provider.decide_direction(&maze, &world), Direction::Left);
}
