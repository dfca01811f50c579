//! Last resorts when no branch scores above zero.

use maze_core::{Direction, MazeOracle, Tile};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::graph::walk_to_next_node;
use crate::providers::ai::DecisionContext;

/// Euclidean-nearest dot or power pellet to `from`.
///
/// Scans row-major; the first of several equally near dots wins.
pub fn nearest_dot<M: MazeOracle + ?Sized>(maze: &M, from: Tile) -> Option<Tile> {
    let mut nearest: Option<(Tile, f64)> = None;
    for tile in maze.dimensions().tiles() {
        if !maze.tile_item(tile).is_collectible() {
            continue;
        }
        let distance = from.euclidean_distance(tile);
        if nearest.is_none_or(|(_, best)| distance < best) {
            nearest = Some((tile, distance));
        }
    }
    nearest.map(|(tile, _)| tile)
}

/// Step toward the nearest dot without walking into a losing corridor.
///
/// Each open neighbour is judged by the tile itself plus the corridor walk
/// leaving it in the same direction; walks scoring below zero are skipped.
/// Of the rest, the neighbour closest to the target dot wins.
pub fn toward_nearest_dot<M: MazeOracle + ?Sized>(
    ctx: &DecisionContext<'_, M>,
) -> Option<Direction> {
    let agent = ctx.agent_tile();
    let target = nearest_dot(ctx.maze, agent)?;
    tracing::trace!("nearest dot from {} is {}", agent, target);

    let mut best: Option<(Direction, f64)> = None;
    for direction in Direction::ALL {
        let neighbour = agent.step(direction);
        if !ctx.maze.is_accessible(neighbour) {
            continue;
        }
        let score = ctx.tile_score(neighbour)
            + ctx.path_score(&walk_to_next_node(ctx.maze, neighbour, direction));
        if score < 0 {
            tracing::trace!("  {} skipped (score={})", direction, score);
            continue;
        }
        let distance = neighbour.euclidean_distance(target);
        if best.is_none_or(|(_, closest)| distance < closest) {
            best = Some((direction, distance));
        }
    }
    best.map(|(direction, _)| direction)
}

/// A uniformly random open direction with no threat within
/// `safe_distance` tiles.
///
/// Directions are drawn without replacement, so at most four are tried.
pub fn random_safe_direction<M, R>(ctx: &DecisionContext<'_, M>, rng: &mut R) -> Option<Direction>
where
    M: MazeOracle + ?Sized,
    R: Rng + ?Sized,
{
    let agent = ctx.agent_tile();
    let mut directions = Direction::ALL;
    directions.shuffle(rng);

    directions
        .into_iter()
        .find(|direction| ctx.can_move(*direction) && !ctx.threat_ahead(agent, *direction))
}

#[cfg(test)]
mod tests {
    use maze_core::{AdversaryState, AgentConfig, AgentState, GridMaze, WorldSnapshot};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::graph::MazeGraph;

    #[test]
    fn nearest_dot_prefers_first_in_scan_order() {
        let maze = GridMaze::from_rows(&["#####", "#. .#", "#   #", "#. .#", "#####"]).unwrap();
        assert_eq!(nearest_dot(&maze, Tile::new(2, 2)), Some(Tile::new(1, 1)));
        assert_eq!(nearest_dot(&maze, Tile::new(3, 3)), Some(Tile::new(3, 3)));

        let empty = GridMaze::from_rows(&["###", "# #", "###"]).unwrap();
        assert_eq!(nearest_dot(&empty, Tile::new(1, 1)), None);
    }

    #[test]
    fn toward_nearest_dot_avoids_guarded_corridor() {
        let maze = GridMaze::from_rows(&["#######", "#.    #", "###.###", "#######"]).unwrap();
        let graph = MazeGraph::build(&maze);
        let config = AgentConfig::default();
        let agent = AgentState::new(Tile::new(3, 1), Direction::Up);

        let open = WorldSnapshot::new(agent);
        let ctx = DecisionContext::new(&maze, &open, &graph, &config);
        assert_eq!(toward_nearest_dot(&ctx), Some(Direction::Down));

        let guarded = WorldSnapshot::new(agent)
            .with_adversary(Tile::new(3, 2), AdversaryState::Chaser);
        let ctx = DecisionContext::new(&maze, &guarded, &graph, &config);
        assert_eq!(toward_nearest_dot(&ctx), Some(Direction::Left));
    }

    #[test]
    fn random_direction_is_open_and_safe() {
        let maze = GridMaze::from_rows(&["#####", "#   #", "## ##", "#####"]).unwrap();
        let graph = MazeGraph::build(&maze);
        let config = AgentConfig::default();
        let world = WorldSnapshot::new(AgentState::new(Tile::new(2, 1), Direction::Right))
            .with_adversary(Tile::new(3, 1), AdversaryState::Scatter);
        let ctx = DecisionContext::new(&maze, &world, &graph, &config);

        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let direction = random_safe_direction(&ctx, &mut rng).unwrap();
            assert!(matches!(direction, Direction::Down | Direction::Left));
        }
    }

    #[test]
    fn random_direction_exhausts_when_surrounded() {
        let maze = GridMaze::from_rows(&["#####", "#   #", "#####"]).unwrap();
        let graph = MazeGraph::build(&maze);
        let config = AgentConfig::default();
        let world = WorldSnapshot::new(AgentState::new(Tile::new(2, 1), Direction::Right))
            .with_adversary(Tile::new(1, 1), AdversaryState::Chaser)
            .with_adversary(Tile::new(3, 1), AdversaryState::Chaser);
        let ctx = DecisionContext::new(&maze, &world, &graph, &config);

        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(random_safe_direction(&ctx, &mut rng), None);
    }
}
