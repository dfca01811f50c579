//! Branch selection at graph nodes.
//!
//! Both selectors score every edge leaving the agent's node and keep the
//! first maximum, so ties resolve in [`Direction::ALL`] order.

use maze_core::{Direction, MazeOracle, Tile};

use crate::graph::NodeEdges;
use crate::providers::ai::DecisionContext;

/// A scored way out of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BranchChoice {
    /// Direction of the first step along the branch.
    pub direction: Direction,
    /// Node the branch leads to.
    pub destination: Tile,
    pub score: i32,
}

pub struct BranchSelector;

impl BranchSelector {
    /// Scores each edge by the tiles on it.
    ///
    /// Returns `None` only when `edges` is empty.
    pub fn one_hop<M: MazeOracle + ?Sized>(
        ctx: &DecisionContext<'_, M>,
        edges: &NodeEdges,
    ) -> Option<BranchChoice> {
        tracing::debug!("BranchSelector: one-hop over {} edges", edges.len());

        Self::first_max(edges.iter().map(|edge| BranchChoice {
            direction: edge.direction,
            destination: edge.to,
            score: ctx.path_score(&edge.tiles),
        }))
    }

    /// Scores each edge by everything reachable one node further: the sum
    /// over all edges leaving the destination node, including the one that
    /// leads straight back.
    pub fn two_hop<M: MazeOracle + ?Sized>(
        ctx: &DecisionContext<'_, M>,
        edges: &NodeEdges,
    ) -> Option<BranchChoice> {
        tracing::debug!("BranchSelector: two-hop over {} edges", edges.len());

        Self::first_max(edges.iter().map(|edge| {
            let score = ctx
                .graph
                .edges_from(edge.to)
                .map_or(0, |next| {
                    next.iter().map(|onward| ctx.path_score(&onward.tiles)).sum()
                });
            BranchChoice {
                direction: edge.direction,
                destination: edge.to,
                score,
            }
        }))
    }

    fn first_max(candidates: impl Iterator<Item = BranchChoice>) -> Option<BranchChoice> {
        let mut best: Option<BranchChoice> = None;

        for candidate in candidates {
            tracing::debug!(
                "  Branch {} -> {}: score={}",
                candidate.direction,
                candidate.destination,
                candidate.score
            );

            // In case of tie, the earlier branch wins
            if best.is_none_or(|current| candidate.score > current.score) {
                best = Some(candidate);
            }
        }

        if let Some(choice) = best {
            tracing::debug!(
                "BranchSelector: best branch = {} (score={})",
                choice.direction,
                choice.score
            );
        }
        best
    }
}
