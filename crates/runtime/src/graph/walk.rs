use maze_core::{Direction, MazeOracle, Tile};

use super::is_node;

/// Walks the corridor leaving `tile` in `direction` until it reaches a node
/// or runs into a wall.
///
/// Returns the tiles visited, excluding `tile` and including the tile the
/// walk stopped on. Corners are followed. The result is empty when the first
/// step is blocked.
///
/// A corridor that loops back to `tile` without passing a node stops there,
/// so the walk always terminates.
pub fn walk_to_next_node<M: MazeOracle + ?Sized>(
    maze: &M,
    tile: Tile,
    direction: Direction,
) -> Vec<Tile> {
    let mut path = Vec::new();
    let mut heading = direction;
    let mut next = tile.step(heading);
    let max_steps = maze.dimensions().area();

    while maze.is_accessible(next) {
        let current = next;
        path.push(current);
        if is_node(maze, current) || current == tile || path.len() >= max_steps {
            break;
        }
        if maze.is_corner(current) {
            heading = turn_corner(maze, current, heading);
        }
        next = current.step(heading);
    }
    path
}

/// New heading after entering `corner` while moving along `heading`.
///
/// Neither perpendicular being open means the oracle called something a
/// corner that is not one; the heading is kept and the walk ends at the
/// next wall.
fn turn_corner<M: MazeOracle + ?Sized>(maze: &M, corner: Tile, heading: Direction) -> Direction {
    heading
        .perpendiculars()
        .into_iter()
        .find(|perpendicular| maze.is_accessible(corner.step(*perpendicular)))
        .unwrap_or(heading)
}

/// Converts a tile path leaving `start` into the moves that follow it.
///
/// Consecutive tiles that are not adjacent (a teleport jump) produce no move.
pub fn directions_along(start: Tile, path: &[Tile]) -> Vec<Direction> {
    std::iter::once(&start)
        .chain(path)
        .zip(path)
        .filter_map(|(from, to)| Direction::between(*from, *to))
        .collect()
}
