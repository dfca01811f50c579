use arrayvec::ArrayVec;

use crate::state::{Direction, Tile};

/// Accessible neighbours of a tile, in [`Direction::ALL`] order.
pub type Neighbours = ArrayVec<Tile, 4>;

/// Static maze oracle exposing layout and collectible state.
///
/// Implementors only need to answer the four required queries. Tile
/// classification is derived from accessibility by default; hosts with
/// their own notion of intersections may override it.
pub trait MazeOracle: Send + Sync {
    fn dimensions(&self) -> MazeDimensions;

    /// Whether the agent may stand on `tile`. Tiles outside the maze are
    /// never accessible.
    fn is_accessible(&self, tile: Tile) -> bool;

    fn tile_item(&self, tile: Tile) -> Item;

    /// Remaining dots and power pellets.
    fn dots_count(&self) -> usize;

    fn accessible_neighbours(&self, tile: Tile) -> Neighbours {
        Direction::ALL
            .into_iter()
            .map(|direction| tile.step(direction))
            .filter(|neighbour| self.is_accessible(*neighbour))
            .collect()
    }

    /// Three or more accessible neighbours.
    fn is_intersection(&self, tile: Tile) -> bool {
        self.is_accessible(tile) && self.accessible_neighbours(tile).len() >= 3
    }

    /// Exactly two accessible neighbours lying on perpendicular axes.
    fn is_corner(&self, tile: Tile) -> bool {
        if !self.is_accessible(tile) {
            return false;
        }
        let neighbours = self.accessible_neighbours(tile);
        neighbours.len() == 2
            && neighbours[0].x != neighbours[1].x
            && neighbours[0].y != neighbours[1].y
    }

    /// Exactly one accessible neighbour.
    fn is_dead_end(&self, tile: Tile) -> bool {
        self.is_accessible(tile) && self.accessible_neighbours(tile).len() == 1
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeDimensions {
    pub width: u32,
    pub height: u32,
}

impl MazeDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, tile: Tile) -> bool {
        tile.x >= 0 && tile.y >= 0 && (tile.x as u32) < self.width && (tile.y as u32) < self.height
    }

    pub const fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// All tiles in row-major order.
    pub fn tiles(self) -> impl Iterator<Item = Tile> {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..height).flat_map(move |y| (0..width).map(move |x| Tile::new(x, y)))
    }
}

/// Content of a maze tile.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Item {
    #[default]
    Blank,
    Dot,
    PowerDot,
    /// Wraps the agent to the paired tile on the other side of the maze.
    Teleport,
}

impl Item {
    /// Dots and power pellets; the things that count toward clearing a level.
    pub const fn is_collectible(self) -> bool {
        matches!(self, Item::Dot | Item::PowerDot)
    }
}
