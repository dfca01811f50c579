//! Additive tile scoring for branch selection.
//!
//! A tile is worth its collectible plus an adjustment for every adversary
//! standing on it:
//!
//! ```text
//! tile_score = item_value(tile) + sum(adversary_adjustment(a) for a on tile)
//! path_score = sum(tile_score(t) for t in path)
//! ```
//!
//! Dangerous adversaries subtract `danger_penalty`, frightened ones add
//! `edible_bonus`. All weights come from [`AgentConfig`].
//!
//! - [`selector`] picks the best branch at a node from these scores
//! - [`fallback`] takes over when no branch scores above zero

pub mod fallback;
pub mod selector;

use maze_core::{AdversaryState, AgentConfig, Item, MazeOracle, Tile};

use super::DecisionContext;

pub fn item_value(item: Item, config: &AgentConfig) -> i32 {
    match item {
        Item::Dot => config.dot_value,
        Item::PowerDot => config.power_dot_value,
        Item::Blank | Item::Teleport => 0,
    }
}

pub fn adversary_adjustment(state: AdversaryState, config: &AgentConfig) -> i32 {
    match state {
        AdversaryState::Chaser | AdversaryState::Scatter => -config.danger_penalty,
        AdversaryState::Frighten => config.edible_bonus,
        AdversaryState::InHouse | AdversaryState::Flee => 0,
    }
}

pub fn tile_score<M: MazeOracle + ?Sized>(ctx: &DecisionContext<'_, M>, tile: Tile) -> i32 {
    let item = item_value(ctx.maze.tile_item(tile), ctx.config);
    ctx.world
        .adversaries_at(tile)
        .fold(item, |score, adversary| {
            score + adversary_adjustment(adversary.state, ctx.config)
        })
}

pub fn path_score<M: MazeOracle + ?Sized>(ctx: &DecisionContext<'_, M>, tiles: &[Tile]) -> i32 {
    tiles.iter().map(|tile| tile_score(ctx, *tile)).sum()
}
