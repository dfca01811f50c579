//! Sparse graph of maze decision points.
//!
//! The grid is reduced to nodes (intersections and dead ends) joined by the
//! corridor segments between them. The graph is built once per level from a
//! [`MazeOracle`] and is immutable afterwards.
//!
//! - [`MazeGraph::build`] scans every tile and walks each leaving direction
//! - [`walk_to_next_node`] is the corridor-walk primitive shared with the
//!   decision engine's lookahead
//! - [`enumerate_paths`] lists every simple path to a goal under a node budget

mod search;
mod walk;

use std::collections::BTreeMap;

use arrayvec::ArrayVec;
use maze_core::{Direction, Item, MazeOracle, Tile};

pub use search::{enumerate_paths, shortest_path};
pub use walk::{directions_along, walk_to_next_node};

/// Whether `tile` becomes a vertex of the graph.
///
/// Teleport tiles sit at the end of their corridor but are never dead ends.
pub fn is_node<M: MazeOracle + ?Sized>(maze: &M, tile: Tile) -> bool {
    maze.is_intersection(tile)
        || (maze.is_dead_end(tile) && maze.tile_item(tile) != Item::Teleport)
}

/// One corridor segment leaving a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    /// Direction of the first step out of the origin node.
    pub direction: Direction,
    /// Destination node; always the last element of `tiles`.
    pub to: Tile,
    /// Tiles from the origin (exclusive) to the destination (inclusive).
    pub tiles: Vec<Tile>,
}

impl Edge {
    pub fn contains(&self, tile: Tile) -> bool {
        self.tiles.contains(&tile)
    }

    pub fn position(&self, tile: Tile) -> Option<usize> {
        self.tiles.iter().position(|t| *t == tile)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

/// Outgoing edges of a node, in [`Direction::ALL`] order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeEdges {
    edges: ArrayVec<Edge, 4>,
}

impl NodeEdges {
    pub fn iter(&self) -> std::slice::Iter<'_, Edge> {
        self.edges.iter()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn in_direction(&self, direction: Direction) -> Option<&Edge> {
        self.edges.iter().find(|edge| edge.direction == direction)
    }

    /// First edge (in direction order) that reaches `node`.
    pub fn to(&self, node: Tile) -> Option<&Edge> {
        self.edges.iter().find(|edge| edge.to == node)
    }
}

impl<'a> IntoIterator for &'a NodeEdges {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Node → outgoing edges.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MazeGraph {
    nodes: BTreeMap<Tile, NodeEdges>,
}

impl MazeGraph {
    /// Builds the graph for the current level.
    ///
    /// Linear in maze size: one pass over the tiles plus one corridor walk
    /// per node and direction. A walk that stops short of a node (a corner
    /// with no way out, or a ring with no node on it) records no edge.
    pub fn build<M: MazeOracle + ?Sized>(maze: &M) -> Self {
        let mut nodes = BTreeMap::new();

        for tile in maze.dimensions().tiles() {
            if !is_node(maze, tile) {
                continue;
            }

            let mut edges = NodeEdges::default();
            for direction in Direction::ALL {
                let tiles = walk_to_next_node(maze, tile, direction);
                match tiles.last() {
                    Some(&to) if is_node(maze, to) => edges.edges.push(Edge {
                        direction,
                        to,
                        tiles,
                    }),
                    Some(&end) => {
                        tracing::trace!(
                            "corridor from {} heading {} ends at {} without a node",
                            tile,
                            direction,
                            end
                        );
                    }
                    None => {}
                }
            }
            nodes.insert(tile, edges);
        }

        let graph = Self { nodes };
        tracing::debug!(
            "maze graph built: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        graph
    }

    pub fn is_node(&self, tile: Tile) -> bool {
        self.nodes.contains_key(&tile)
    }

    pub fn edges_from(&self, node: Tile) -> Option<&NodeEdges> {
        self.nodes.get(&node)
    }

    /// Edge from `from` to the adjacent node `to`, if they are adjacent.
    pub fn edge_to(&self, from: Tile, to: Tile) -> Option<&Edge> {
        self.edges_from(from)?.to(to)
    }

    pub fn nodes(&self) -> impl Iterator<Item = Tile> + '_ {
        self.nodes.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tile, &NodeEdges)> + '_ {
        self.nodes.iter().map(|(tile, edges)| (*tile, edges))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Directed edge count; each corridor is counted once from each end.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(NodeEdges::len).sum()
    }
}
