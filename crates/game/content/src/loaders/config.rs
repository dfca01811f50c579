//! Agent configuration loader.

use std::path::Path;

use maze_core::AgentConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for agent configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing AgentConfig
    pub fn load(path: &Path) -> LoadResult<AgentConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))
    }

    /// The tuning shipped with the crate.
    pub fn builtin() -> LoadResult<AgentConfig> {
        Self::parse(include_str!("../../data/config/agent.toml"))
    }

    /// Parse config data from TOML source.
    ///
    /// Keys missing from the source keep their defaults. The result is
    /// validated before it is returned.
    pub fn parse(content: &str) -> LoadResult<AgentConfig> {
        let config: AgentConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }
}
