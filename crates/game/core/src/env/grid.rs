use super::{Item, LayoutError, MazeDimensions, MazeOracle};
use crate::state::Tile;

/// Maze backed by a dense row-major cell array.
///
/// Glyphs understood by [`parse_layout`]:
///
/// | glyph | meaning                       |
/// |-------|-------------------------------|
/// | `#`   | wall                          |
/// | `.`   | dot                           |
/// | `o`   | power pellet                  |
/// | ` `   | blank floor                   |
/// | `T`   | teleport                      |
/// | `P`   | agent spawn (blank floor)     |
/// | `G`   | adversary spawn (blank floor) |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridMaze {
    dimensions: MazeDimensions,
    cells: Vec<Cell>,
    dots: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cell {
    Wall,
    Floor(Item),
}

/// A parsed layout together with the spawn markers found in it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedLayout {
    pub maze: GridMaze,
    pub agent_spawn: Option<Tile>,
    pub adversary_spawns: Vec<Tile>,
}

/// Parses an ASCII layout, one string per row, top row first.
///
/// # Errors
///
/// Returns a [`LayoutError`] for empty or ragged layouts, unknown glyphs, or
/// a second agent spawn marker.
pub fn parse_layout<S: AsRef<str>>(rows: &[S]) -> Result<ParsedLayout, LayoutError> {
    let width = rows.first().map_or(0, |row| row.as_ref().chars().count());
    if width == 0 {
        return Err(LayoutError::Empty);
    }

    let mut cells = Vec::with_capacity(width * rows.len());
    let mut agent_spawn = None;
    let mut adversary_spawns = Vec::new();

    for (y, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        let found = row.chars().count();
        if found != width {
            return Err(LayoutError::RaggedRow {
                row: y,
                expected: width,
                found,
            });
        }
        for (x, glyph) in row.chars().enumerate() {
            let tile = Tile::new(x as i32, y as i32);
            let cell = match glyph {
                '#' => Cell::Wall,
                '.' => Cell::Floor(Item::Dot),
                'o' => Cell::Floor(Item::PowerDot),
                ' ' => Cell::Floor(Item::Blank),
                'T' => Cell::Floor(Item::Teleport),
                'P' => {
                    if agent_spawn.replace(tile).is_some() {
                        return Err(LayoutError::DuplicateAgentSpawn);
                    }
                    Cell::Floor(Item::Blank)
                }
                'G' => {
                    adversary_spawns.push(tile);
                    Cell::Floor(Item::Blank)
                }
                glyph => return Err(LayoutError::UnknownGlyph { glyph, x, y }),
            };
            cells.push(cell);
        }
    }

    let dimensions = MazeDimensions::new(width as u32, rows.len() as u32);
    let dots = cells
        .iter()
        .filter(|cell| matches!(cell, Cell::Floor(item) if item.is_collectible()))
        .count();

    Ok(ParsedLayout {
        maze: GridMaze {
            dimensions,
            cells,
            dots,
        },
        agent_spawn,
        adversary_spawns,
    })
}

impl GridMaze {
    /// Parses a layout and discards spawn markers.
    ///
    /// # Errors
    ///
    /// See [`parse_layout`].
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, LayoutError> {
        parse_layout(rows).map(|layout| layout.maze)
    }

    fn index(&self, tile: Tile) -> Option<usize> {
        self.dimensions
            .contains(tile)
            .then(|| tile.y as usize * self.dimensions.width as usize + tile.x as usize)
    }

    fn cell(&self, tile: Tile) -> Cell {
        self.index(tile).map_or(Cell::Wall, |index| self.cells[index])
    }

    /// Removes a dot or power pellet from `tile`, returning what was there.
    ///
    /// Teleports and blank tiles are left untouched.
    pub fn consume(&mut self, tile: Tile) -> Item {
        let Some(index) = self.index(tile) else {
            return Item::Blank;
        };
        match self.cells[index] {
            Cell::Floor(item) if item.is_collectible() => {
                self.cells[index] = Cell::Floor(Item::Blank);
                self.dots -= 1;
                item
            }
            Cell::Floor(item) => item,
            Cell::Wall => Item::Blank,
        }
    }

    /// Renders the maze back to glyph rows (spawn markers are not preserved).
    pub fn render(&self) -> Vec<String> {
        let width = self.dimensions.width as usize;
        self.cells
            .chunks(width)
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Wall => '#',
                        Cell::Floor(Item::Dot) => '.',
                        Cell::Floor(Item::PowerDot) => 'o',
                        Cell::Floor(Item::Blank) => ' ',
                        Cell::Floor(Item::Teleport) => 'T',
                    })
                    .collect()
            })
            .collect()
    }
}

impl MazeOracle for GridMaze {
    fn dimensions(&self) -> MazeDimensions {
        self.dimensions
    }

    fn is_accessible(&self, tile: Tile) -> bool {
        matches!(self.cell(tile), Cell::Floor(_))
    }

    fn tile_item(&self, tile: Tile) -> Item {
        match self.cell(tile) {
            Cell::Floor(item) => item,
            Cell::Wall => Item::Blank,
        }
    }

    fn dots_count(&self) -> usize {
        self.dots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;

    const PLUS: [&str; 5] = [
        "#####", //
        "##.##", //
        "#.P.#", //
        "##o##", //
        "#####", //
    ];

    #[test]
    fn parses_items_and_spawns() {
        let layout = parse_layout(&PLUS).unwrap();
        let maze = &layout.maze;

        assert_eq!(maze.dimensions(), MazeDimensions::new(5, 5));
        assert_eq!(layout.agent_spawn, Some(Tile::new(2, 2)));
        assert_eq!(maze.dots_count(), 4);
        assert_eq!(maze.tile_item(Tile::new(2, 3)), Item::PowerDot);
        assert!(!maze.is_accessible(Tile::new(0, 0)));
        assert!(!maze.is_accessible(Tile::new(-1, 2)));
    }

    #[test]
    fn classifies_tiles_from_neighbours() {
        let maze = GridMaze::from_rows(&PLUS).unwrap();

        assert!(maze.is_intersection(Tile::new(2, 2)));
        assert!(maze.is_dead_end(Tile::new(1, 2)));
        assert!(!maze.is_corner(Tile::new(2, 2)));

        let corner = GridMaze::from_rows(&["####", "#  #", "# ##", "####"]).unwrap();
        assert!(corner.is_corner(Tile::new(1, 1)));
        assert!(!corner.is_corner(Tile::new(2, 1)));
        assert!(corner.is_dead_end(Tile::new(2, 1)));
    }

    #[test]
    fn neighbours_follow_direction_order() {
        let maze = GridMaze::from_rows(&PLUS).unwrap();
        let neighbours = maze.accessible_neighbours(Tile::new(2, 2));
        assert_eq!(
            neighbours.as_slice(),
            &[Tile::new(2, 1), Tile::new(2, 3), Tile::new(1, 2), Tile::new(3, 2)]
        );
    }

    #[test]
    fn consume_updates_dot_count() {
        let mut maze = GridMaze::from_rows(&PLUS).unwrap();
        assert_eq!(maze.consume(Tile::new(2, 3)), Item::PowerDot);
        assert_eq!(maze.consume(Tile::new(2, 3)), Item::Blank);
        assert_eq!(maze.consume(Tile::new(0, 0)), Item::Blank);
        assert_eq!(maze.dots_count(), 3);
        assert_eq!(maze.render()[3], "## ##");
    }

    #[test]
    fn rejects_malformed_layouts() {
        assert_eq!(GridMaze::from_rows::<&str>(&[]), Err(LayoutError::Empty));
        assert_eq!(
            GridMaze::from_rows(&["###", "##"]),
            Err(LayoutError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            GridMaze::from_rows(&["#x#"]),
            Err(LayoutError::UnknownGlyph {
                glyph: 'x',
                x: 1,
                y: 0
            })
        );
        assert_eq!(
            parse_layout(&["PP"]).unwrap_err(),
            LayoutError::DuplicateAgentSpawn
        );
    }

    #[test]
    fn layout_errors_carry_codes() {
        let err = GridMaze::from_rows(&["#?#"]).unwrap_err();
        assert_eq!(err.error_code(), "LAYOUT_UNKNOWN_GLYPH");
        assert_eq!(err.to_string(), "unknown glyph '?' at (1, 0)");
    }
}
