//! Utility functions for xtask commands

use std::env;
use std::path::Path;

use anyhow::{Context, Result};
use maze_content::{Level, LevelLoader};
use maze_core::{AdversaryState, Tile};

/// Loads a level by built-in name, or from a RON file otherwise.
pub fn load_level(source: &str) -> Result<Level> {
    if LevelLoader::BUILTIN.iter().any(|name| *name == source) {
        return LevelLoader::builtin(source);
    }
    LevelLoader::load(Path::new(source))
        .with_context(|| format!("Failed to load level '{}'", source))
}

/// Parses `x,y` into a tile. Used as a clap value parser.
pub fn parse_tile(value: &str) -> Result<Tile, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got '{}'", value))?;
    let x = x.trim().parse().map_err(|e| format!("bad x in '{}': {}", value, e))?;
    let y = y.trim().parse().map_err(|e| format!("bad y in '{}': {}", value, e))?;
    Ok(Tile::new(x, y))
}

/// Parses an adversary state name, ignoring case.
pub fn parse_state(value: &str) -> Result<AdversaryState, String> {
    value
        .parse()
        .map_err(|e| format!("unknown adversary state '{}': {:?}", value, e))
}

pub fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
