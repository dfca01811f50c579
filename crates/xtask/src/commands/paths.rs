//! Enumerate paths between two tiles
//!
//! Runs the bounded path search the agent library exposes and prints every
//! path found, shortest first, together with the moves that follow it.

use anyhow::Result;
use clap::Parser;
use console::style;
use maze_core::{MazeOracle, Tile};
use maze_runtime::{MazeGraph, directions_along, enumerate_paths};

use crate::utils::{load_level, parse_tile};

/// Enumerate paths between two tiles
#[derive(Parser)]
pub struct Paths {
    /// Built-in level name or path to a RON level file
    #[arg(short, long, value_name = "LEVEL", default_value = "classic")]
    level: String,

    /// Start tile as x,y (defaults to the agent spawn)
    #[arg(long, value_name = "X,Y", value_parser = parse_tile)]
    from: Option<Tile>,

    /// Goal tile as x,y
    #[arg(long, value_name = "X,Y", value_parser = parse_tile)]
    to: Tile,

    /// Maximum number of graph nodes a path may pass through
    #[arg(long, default_value_t = 4)]
    limit: usize,

    /// Print at most this many paths
    #[arg(long, default_value_t = 10)]
    show: usize,
}

impl Paths {
    pub fn execute(self) -> Result<()> {
        let level = load_level(&self.level)?;
        let maze = &level.maze;
        let start = self.from.unwrap_or(level.agent_spawn);

        for (label, tile) in [("start", start), ("goal", self.to)] {
            if !maze.is_accessible(tile) {
                anyhow::bail!("{} tile {} is not accessible in '{}'", label, tile, level.name);
            }
        }

        let graph = MazeGraph::build(maze);
        let mut paths = enumerate_paths(&graph, maze, start, self.to, self.limit);
        paths.sort_by_key(Vec::len);

        println!(
            "{} {} -> {} (node limit {})",
            style("Search:").bold().cyan(),
            start,
            self.to,
            self.limit
        );
        println!("{} {}", style("Found:").bold().cyan(), paths.len());

        if paths.is_empty() {
            println!(
                "{}",
                style("No path within the node limit; try a larger --limit").yellow()
            );
            return Ok(());
        }

        println!();
        for (index, path) in paths.iter().take(self.show).enumerate() {
            let moves: Vec<String> = directions_along(start, path)
                .into_iter()
                .map(|direction| direction.to_string())
                .collect();
            println!(
                "{} {} tiles",
                style(format!("#{}", index + 1)).bold().yellow(),
                path.len()
            );
            println!("  {}", moves.join(" "));
        }
        if paths.len() > self.show {
            println!("  ... {} more", paths.len() - self.show);
        }

        Ok(())
    }
}
