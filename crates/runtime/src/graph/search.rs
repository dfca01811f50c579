use maze_core::{Direction, MazeOracle, Tile};

use super::{Edge, MazeGraph, walk_to_next_node};

/// Fixed inputs of one enumeration.
struct Search<'a> {
    graph: &'a MazeGraph,
    start: Tile,
    goal: Tile,
    node_limit: usize,
}

/// Enumerates every simple path from `start` to `goal` that passes through
/// at most `node_limit` graph nodes before reaching the goal.
///
/// `start` need not be a node. From each direction the search walks to the
/// nearest node, recording the walk if the goal shows up on the way, and
/// otherwise expands that node's edges depth first. A branch is dropped when
/// it would revisit a node on the same path, pass back through `start`, or
/// exceed the node budget.
///
/// Paths exclude `start` and end with `goal`. They come back in discovery
/// order and are not sorted by length.
pub fn enumerate_paths<M: MazeOracle + ?Sized>(
    graph: &MazeGraph,
    maze: &M,
    start: Tile,
    goal: Tile,
    node_limit: usize,
) -> Vec<Vec<Tile>> {
    let search = Search {
        graph,
        start,
        goal,
        node_limit,
    };
    let mut paths = Vec::new();

    for direction in Direction::ALL {
        let first = walk_to_next_node(maze, start, direction);
        let Some(&node) = first.last() else {
            continue;
        };

        if let Some(index) = first.iter().position(|tile| *tile == goal) {
            paths.push(first[..=index].to_vec());
            continue;
        }

        if node == start || node_limit == 0 {
            continue;
        }
        let Some(edges) = graph.edges_from(node) else {
            continue;
        };

        let explored = [node];
        for edge in edges.iter().filter(|edge| !edge.contains(start)) {
            paths.extend(search.paths_through(&first, edge, &explored));
        }
    }

    paths
}

impl Search<'_> {
    /// Paths that continue `prefix` along `edge`.
    ///
    /// `explored` holds the nodes already on `prefix`; each branch gets its
    /// own copy, so siblings never see each other's visits.
    fn paths_through(&self, prefix: &[Tile], edge: &Edge, explored: &[Tile]) -> Vec<Vec<Tile>> {
        if let Some(index) = edge.position(self.goal) {
            let mut path = prefix.to_vec();
            path.extend_from_slice(&edge.tiles[..=index]);
            return vec![path];
        }

        let node = edge.to;
        if explored.contains(&node) || explored.len() >= self.node_limit {
            return Vec::new();
        }
        let Some(edges) = self.graph.edges_from(node) else {
            return Vec::new();
        };

        let mut prefix = prefix.to_vec();
        prefix.extend_from_slice(&edge.tiles);
        let mut explored = explored.to_vec();
        explored.push(node);

        edges
            .iter()
            .filter(|next| !next.contains(self.start))
            .flat_map(|next| self.paths_through(&prefix, next, &explored))
            .collect()
    }
}

/// The shortest of the enumerated paths; the first one found wins ties.
pub fn shortest_path<M: MazeOracle + ?Sized>(
    graph: &MazeGraph,
    maze: &M,
    start: Tile,
    goal: Tile,
    node_limit: usize,
) -> Option<Vec<Tile>> {
    enumerate_paths(graph, maze, start, goal, node_limit)
        .into_iter()
        .min_by_key(Vec::len)
}
