//! Per-class steering rules.
//!
//! Each function answers for one [`TileClass`](super::TileClass); the
//! provider dispatches on the class of the agent's tile.

use maze_core::{Direction, MazeOracle};
use rand::Rng;

use super::DecisionContext;
use super::scoring::fallback;
use super::scoring::selector::BranchSelector;

/// Keep the heading unless something dangerous is waiting ahead.
pub fn corridor<M: MazeOracle + ?Sized>(ctx: &DecisionContext<'_, M>) -> Direction {
    let tile = ctx.agent_tile();
    let heading = ctx.heading();
    let ahead = tile.step(heading);

    if !ctx.maze.is_accessible(ahead) {
        // Only reachable right after a spawn facing a wall.
        return Direction::ALL
            .into_iter()
            .find(|direction| ctx.can_move(*direction))
            .unwrap_or(heading);
    }

    if ctx.maze.is_intersection(ahead) {
        return if ctx.threat_around(ahead) {
            heading.opposite()
        } else {
            heading
        };
    }

    if ctx.threat_ahead(tile, heading) {
        heading.opposite()
    } else {
        heading
    }
}

/// Take the open perpendicular, or back off if the turn leads into danger.
///
/// The threat lookahead walks from the corner along the turn direction, not
/// along the incoming heading.
pub fn corner<M: MazeOracle + ?Sized>(ctx: &DecisionContext<'_, M>) -> Direction {
    let heading = ctx.heading();
    let Some(turn) = heading
        .perpendiculars()
        .into_iter()
        .find(|direction| ctx.can_move(*direction))
    else {
        return heading;
    };

    if ctx.threat_ahead(ctx.agent_tile(), turn) {
        heading.opposite()
    } else {
        turn
    }
}

pub fn dead_end<M: MazeOracle + ?Sized>(ctx: &DecisionContext<'_, M>) -> Direction {
    ctx.heading().opposite()
}

/// Branch scoring with the fallback ladder behind it.
pub fn intersection<M, R>(ctx: &DecisionContext<'_, M>, rng: &mut R) -> Direction
where
    M: MazeOracle + ?Sized,
    R: Rng + ?Sized,
{
    let tile = ctx.agent_tile();
    if let Some(edges) = ctx.graph.edges_from(tile) {
        if let Some(choice) = BranchSelector::one_hop(ctx, edges)
            && choice.score > 0
        {
            return choice.direction;
        }
        if let Some(choice) = BranchSelector::two_hop(ctx, edges)
            && choice.score > 0
        {
            return choice.direction;
        }
    } else {
        tracing::warn!("intersection {} is missing from the graph", tile);
    }

    if ctx.maze.dots_count() < ctx.config.low_dot_threshold {
        fallback::toward_nearest_dot(ctx).unwrap_or_else(|| {
            tracing::warn!("no safe step toward a dot from {}; holding heading", tile);
            ctx.heading()
        })
    } else {
        fallback::random_safe_direction(ctx, rng).unwrap_or_else(|| {
            tracing::warn!("no safe direction from {}; holding heading", tile);
            ctx.heading()
        })
    }
}

#[cfg(test)]
mod tests {
    use maze_core::{AdversaryState, AgentConfig, AgentState, GridMaze, Tile, WorldSnapshot};

    use super::*;
    use crate::graph::MazeGraph;

    fn decide_with<F>(rows: &[&str], world: &WorldSnapshot, rule: F) -> Direction
    where
        F: Fn(&DecisionContext<'_, GridMaze>) -> Direction,
    {
        let maze = GridMaze::from_rows(rows).unwrap();
        let graph = MazeGraph::build(&maze);
        let config = AgentConfig::default();
        rule(&DecisionContext::new(&maze, world, &graph, &config))
    }

    const HALL: [&str; 3] = [
        "#########", //
        "#       #", //
        "#########", //
    ];

    #[test]
    fn corridor_reverses_before_threat() {
        let agent = AgentState::new(Tile::new(3, 1), Direction::Right);
        let calm = WorldSnapshot::new(agent);
        assert_eq!(decide_with(&HALL, &calm, corridor), Direction::Right);

        let near = WorldSnapshot::new(agent).with_adversary(Tile::new(5, 1), AdversaryState::Chaser);
        assert_eq!(decide_with(&HALL, &near, corridor), Direction::Left);

        let far = WorldSnapshot::new(agent).with_adversary(Tile::new(6, 1), AdversaryState::Chaser);
        assert_eq!(decide_with(&HALL, &far, corridor), Direction::Right);

        let edible =
            WorldSnapshot::new(agent).with_adversary(Tile::new(4, 1), AdversaryState::Frighten);
        assert_eq!(decide_with(&HALL, &edible, corridor), Direction::Right);
    }

    #[test]
    fn corridor_turns_away_from_wall() {
        let world = WorldSnapshot::new(AgentState::new(Tile::new(1, 2), Direction::Right));
        let rows = ["###", "# #", "# #", "# #", "###"];
        assert_eq!(decide_with(&rows, &world, corridor), Direction::Up);
    }

    #[test]
    fn corridor_checks_around_next_intersection() {
        let rows = ["#######", "#     #", "#### ##", "#######"];
        let agent = AgentState::new(Tile::new(3, 1), Direction::Right);

        let guarded =
            WorldSnapshot::new(agent).with_adversary(Tile::new(4, 2), AdversaryState::Scatter);
        assert_eq!(decide_with(&rows, &guarded, corridor), Direction::Left);

        let clear = WorldSnapshot::new(agent);
        assert_eq!(decide_with(&rows, &clear, corridor), Direction::Right);
    }

    #[test]
    fn corner_turns_or_backs_off() {
        let rows = ["#####", "#   #", "### #", "### #", "#####"];
        let agent = AgentState::new(Tile::new(3, 1), Direction::Right);

        let calm = WorldSnapshot::new(agent);
        assert_eq!(decide_with(&rows, &calm, corner), Direction::Down);

        let around =
            WorldSnapshot::new(agent).with_adversary(Tile::new(3, 3), AdversaryState::Chaser);
        assert_eq!(decide_with(&rows, &around, corner), Direction::Left);
    }

    #[test]
    fn dead_end_reverses() {
        let world = WorldSnapshot::new(AgentState::new(Tile::new(1, 1), Direction::Left));
        assert_eq!(decide_with(&HALL, &world, dead_end), Direction::Right);
    }
}
