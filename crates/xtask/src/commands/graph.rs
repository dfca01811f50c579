//! Print the node graph of a level
//!
//! Lists every node with the edges leaving it, in the order the agent
//! scores them.

use anyhow::Result;
use clap::Parser;
use console::style;
use maze_core::MazeOracle;
use maze_runtime::MazeGraph;

use crate::utils::load_level;

/// Print the node graph of a level
#[derive(Parser)]
pub struct Graph {
    /// Built-in level name or path to a RON level file
    #[arg(short, long, value_name = "LEVEL", default_value = "classic")]
    level: String,

    /// Also print the tiles of every edge
    #[arg(short, long)]
    tiles: bool,
}

impl Graph {
    pub fn execute(self) -> Result<()> {
        let level = load_level(&self.level)?;
        let graph = MazeGraph::build(&level.maze);

        println!("{} {}", style("Level:").bold().cyan(), level.name);
        println!(
            "{} {}x{}",
            style("Size:").bold().cyan(),
            level.maze.dimensions().width,
            level.maze.dimensions().height
        );
        println!("{} {}", style("Nodes:").bold().cyan(), graph.node_count());
        println!("{} {}", style("Edges:").bold().cyan(), graph.edge_count());
        println!();

        for (node, edges) in graph.iter() {
            let kind = if level.maze.is_dead_end(node) {
                "dead end"
            } else {
                "intersection"
            };
            println!("{} {}", style(node).bold().yellow(), style(kind).dim());
            for edge in edges {
                println!(
                    "  {:>5} -> {} ({} tiles)",
                    edge.direction.as_ref(),
                    edge.to,
                    edge.len()
                );
                if self.tiles {
                    let tiles: Vec<String> = edge.tiles.iter().map(ToString::to_string).collect();
                    println!("        {}", style(tiles.join(" ")).dim());
                }
            }
        }

        Ok(())
    }
}
