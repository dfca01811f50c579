//! Run the agent against a level
//!
//! A minimal host loop: adversaries stay on their spawn tiles, the agent
//! moves one tile per frame, collects dots, and loses a life when it walks
//! into a dangerous adversary. Power pellets frighten every adversary on the
//! board for a while.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use maze_content::ConfigLoader;
use maze_core::{AdversaryState, Direction, GridMaze, Item, MazeOracle, Tile, WorldSnapshot};
use maze_runtime::{GraphAgent, PlayerProvider};

use crate::utils::{load_level, parse_state, read_env};

const DOT_POINTS: u32 = 10;
const POWER_DOT_POINTS: u32 = 50;
const ADVERSARY_POINTS: u32 = 200;
const FRIGHTEN_FRAMES: u32 = 40;

/// Run the agent against a level with static adversaries
#[derive(Parser)]
pub struct Play {
    /// Built-in level name or path to a RON level file
    #[arg(short, long, value_name = "LEVEL", default_value = "classic")]
    level: String,

    /// Agent config TOML (defaults to the built-in tuning)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Stop after this many frames
    #[arg(long, default_value_t = 500)]
    frames: u32,

    /// Override the state every adversary starts in (e.g. chaser, frighten)
    #[arg(long, value_name = "STATE", value_parser = parse_state)]
    adversary_state: Option<AdversaryState>,

    /// Seed for the random fallback (falls back to MAZE_AGENT_SEED)
    #[arg(long)]
    seed: Option<u64>,

    /// Print the board after the run
    #[arg(long)]
    show: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Cleared,
    GameOver,
    OutOfFrames,
}

impl Play {
    pub fn execute(self) -> Result<()> {
        let level = load_level(&self.level)?;
        let mut config = match &self.config {
            Some(path) => ConfigLoader::load(path)?,
            None => ConfigLoader::builtin()?,
        };
        if let Some(seed) = self.seed.or_else(|| read_env("MAZE_AGENT_SEED")) {
            config.rng_seed = Some(seed);
        }

        let mut maze = level.maze.clone();
        let mut world = level.initial_world(config.spawn_heading);
        let starting_state = self.adversary_state.unwrap_or(level.adversary_state);
        for adversary in &mut world.adversaries {
            adversary.state = starting_state;
        }

        let mut agent = GraphAgent::new(config.clone());
        let mut lives_left = config.initial_lives;
        let mut frightened_for = 0;
        let mut outcome = Outcome::OutOfFrames;
        let mut frame = 0;

        agent.on_level_start(&maze, &world);

        while frame < self.frames {
            frame += 1;
            let direction = agent.decide_direction(&maze, &world);
            world.agent.heading = direction;
            world.agent.tile = next_tile(&maze, world.agent.tile, direction);

            match maze.consume(world.agent.tile) {
                Item::Dot => world.score += DOT_POINTS,
                Item::PowerDot => {
                    world.score += POWER_DOT_POINTS;
                    frightened_for = FRIGHTEN_FRAMES;
                    set_states(&mut world, |state| {
                        if state == AdversaryState::InHouse {
                            state
                        } else {
                            AdversaryState::Frighten
                        }
                    });
                }
                Item::Blank | Item::Teleport => {}
            }

            if world.is_threatened_at(world.agent.tile) {
                lives_left = lives_left.saturating_sub(1);
                tracing::info!("frame {}: caught at {}", frame, world.agent.tile);
                if lives_left == 0 {
                    outcome = Outcome::GameOver;
                    break;
                }
                world.agent.tile = level.agent_spawn;
                world.agent.heading = config.spawn_heading;
                agent.on_new_life(&maze, &world);
                continue;
            }

            let tile = world.agent.tile;
            let before = world.adversaries.len();
            world
                .adversaries
                .retain(|adversary| !(adversary.tile == tile && adversary.state.is_edible()));
            world.score += ADVERSARY_POINTS * (before - world.adversaries.len()) as u32;

            if maze.dots_count() == 0 {
                outcome = Outcome::Cleared;
                break;
            }

            if frightened_for > 0 {
                frightened_for -= 1;
                if frightened_for == 0 {
                    set_states(&mut world, |state| {
                        if state == AdversaryState::Frighten {
                            starting_state
                        } else {
                            state
                        }
                    });
                }
            }
        }

        let verdict = match outcome {
            Outcome::Cleared => style("level cleared").bold().green(),
            Outcome::GameOver => style("game over").bold().red(),
            Outcome::OutOfFrames => style("out of frames").bold().yellow(),
        };
        println!("{} {} ({})", style("Level:").bold().cyan(), level.name, verdict);
        println!("{} {}", style("Frames:").bold().cyan(), frame);
        println!("{} {}", style("Score:").bold().cyan(), world.score);
        println!(
            "{} {} of {}",
            style("Dots left:").bold().cyan(),
            maze.dots_count(),
            level.maze.dots_count()
        );
        println!("{} {}", style("Lives left:").bold().cyan(), lives_left);

        if self.show {
            println!();
            for row in render_board(&maze, &world) {
                println!("  {}", row);
            }
        }

        Ok(())
    }
}

/// Where the agent ends up after trying to move one tile.
///
/// Walls stop it in place. Stepping onto a teleport carries it past the
/// other teleport of the same row.
fn next_tile(maze: &GridMaze, from: Tile, direction: Direction) -> Tile {
    let next = from.step(direction);
    if !maze.is_accessible(next) {
        return from;
    }
    if maze.tile_item(next) != Item::Teleport {
        return next;
    }

    let width = maze.dimensions().width as i32;
    let partner = (0..width)
        .map(|x| Tile::new(x, next.y))
        .find(|tile| *tile != next && maze.tile_item(*tile) == Item::Teleport);
    match partner {
        Some(partner) if maze.is_accessible(partner.step(direction)) => partner.step(direction),
        Some(partner) => partner,
        None => next,
    }
}

fn set_states(world: &mut WorldSnapshot, update: impl Fn(AdversaryState) -> AdversaryState) {
    for adversary in &mut world.adversaries {
        adversary.state = update(adversary.state);
    }
}

fn render_board(maze: &GridMaze, world: &WorldSnapshot) -> Vec<String> {
    maze.render()
        .into_iter()
        .enumerate()
        .map(|(y, row)| {
            row.chars()
                .enumerate()
                .map(|(x, glyph)| {
                    let tile = Tile::new(x as i32, y as i32);
                    if tile == world.agent.tile {
                        'P'
                    } else if world.adversaries_at(tile).next().is_some() {
                        'G'
                    } else {
                        glyph
                    }
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn teleports_carry_the_agent_across() {
        let maze = GridMaze::from_rows(&["#####", "T   T", "#####"]).unwrap();

        assert_eq!(next_tile(&maze, Tile::new(3, 1), Direction::Right), Tile::new(1, 1));
        assert_eq!(next_tile(&maze, Tile::new(1, 1), Direction::Left), Tile::new(3, 1));
        assert_eq!(next_tile(&maze, Tile::new(2, 1), Direction::Up), Tile::new(2, 1));
        assert_eq!(next_tile(&maze, Tile::new(1, 1), Direction::Right), Tile::new(2, 1));
    }
}
