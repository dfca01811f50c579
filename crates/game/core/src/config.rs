use crate::error::GameError;
use crate::state::Direction;

/// Tunable parameters of the navigation agent.
///
/// Scoring weights differ between tuned variants of the agent, so none of
/// them are baked in as constants.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentConfig {
    /// Score contributed by a regular dot.
    pub dot_value: i32,
    /// Score contributed by a power pellet.
    pub power_dot_value: i32,
    /// Subtracted for every dangerous adversary on a scored tile.
    pub danger_penalty: i32,
    /// Added for every edible adversary on a scored tile.
    pub edible_bonus: i32,
    /// Number of tiles the threat lookahead inspects along a heading.
    pub safe_distance: usize,
    /// Below this many remaining dots the agent hunts the nearest dot
    /// instead of wandering.
    pub low_dot_threshold: usize,
    /// Heading emitted on the first frame after a spawn.
    pub spawn_heading: Direction,
    /// Lives at level start. Diagnostic only.
    pub initial_lives: u32,
    /// Seed for the random fallback. `None` seeds from the OS.
    pub rng_seed: Option<u64>,
}

impl AgentConfig {
    pub const DEFAULT_DOT_VALUE: i32 = 1;
    pub const DEFAULT_POWER_DOT_VALUE: i32 = 10;
    pub const DEFAULT_DANGER_PENALTY: i32 = 50;
    pub const DEFAULT_EDIBLE_BONUS: i32 = 50;
    pub const DEFAULT_SAFE_DISTANCE: usize = 2;
    pub const DEFAULT_LOW_DOT_THRESHOLD: usize = 20;
    pub const DEFAULT_INITIAL_LIVES: u32 = 3;

    pub fn new() -> Self {
        Self {
            dot_value: Self::DEFAULT_DOT_VALUE,
            power_dot_value: Self::DEFAULT_POWER_DOT_VALUE,
            danger_penalty: Self::DEFAULT_DANGER_PENALTY,
            edible_bonus: Self::DEFAULT_EDIBLE_BONUS,
            safe_distance: Self::DEFAULT_SAFE_DISTANCE,
            low_dot_threshold: Self::DEFAULT_LOW_DOT_THRESHOLD,
            spawn_heading: Direction::Right,
            initial_lives: Self::DEFAULT_INITIAL_LIVES,
            rng_seed: None,
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_safe_distance(mut self, safe_distance: usize) -> Self {
        self.safe_distance = safe_distance;
        self
    }

    #[must_use]
    pub fn with_low_dot_threshold(mut self, low_dot_threshold: usize) -> Self {
        self.low_dot_threshold = low_dot_threshold;
        self
    }

    #[must_use]
    pub fn with_spawn_heading(mut self, spawn_heading: Direction) -> Self {
        self.spawn_heading = spawn_heading;
        self
    }

    /// Checks that the weights keep their intended signs.
    ///
    /// # Errors
    ///
    /// Returns the first offending parameter as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.safe_distance == 0 {
            return Err(ConfigError::ZeroSafeDistance);
        }
        for (name, value) in [
            ("dot_value", self.dot_value),
            ("power_dot_value", self.power_dot_value),
            ("danger_penalty", self.danger_penalty),
            ("edible_bonus", self.edible_bonus),
        ] {
            if value < 0 {
                return Err(ConfigError::NegativeWeight { name, value });
            }
        }
        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("safe_distance must be at least 1")]
    ZeroSafeDistance,

    /// Penalties are subtracted, so every weight is given as a magnitude.
    #[error("{name} must not be negative (got {value})")]
    NegativeWeight { name: &'static str, value: i32 },
}

impl GameError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ZeroSafeDistance => "CONFIG_ZERO_SAFE_DISTANCE",
            ConfigError::NegativeWeight { .. } => "CONFIG_NEGATIVE_WEIGHT",
        }
    }
}
