use super::{Direction, Tile};

/// Behavioural state an adversary reports for the current frame.
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
pub enum AdversaryState {
    /// Waiting inside the house; not on the board yet.
    #[default]
    InHouse,
    /// Hunting the agent.
    Chaser,
    /// Patrolling its home corner. Still lethal on contact.
    Scatter,
    /// Vulnerable after a power pellet; can be eaten.
    Frighten,
    /// Returning home after being eaten.
    Flee,
}

impl AdversaryState {
    /// Contact with the agent costs a life.
    pub const fn is_dangerous(self) -> bool {
        matches!(self, AdversaryState::Chaser | AdversaryState::Scatter)
    }

    pub const fn is_edible(self) -> bool {
        matches!(self, AdversaryState::Frighten)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Adversary {
    pub tile: Tile,
    pub state: AdversaryState,
}

impl Adversary {
    pub const fn new(tile: Tile, state: AdversaryState) -> Self {
        Self { tile, state }
    }
}

/// The controlled agent as seen at the end of the previous frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentState {
    pub tile: Tile,
    /// Last commanded heading.
    pub heading: Direction,
}

impl AgentState {
    pub const fn new(tile: Tile, heading: Direction) -> Self {
        Self { tile, heading }
    }
}

/// Everything the host reports about the dynamic world for one frame.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldSnapshot {
    pub agent: AgentState,
    pub adversaries: Vec<Adversary>,
    pub score: u32,
}

impl WorldSnapshot {
    pub fn new(agent: AgentState) -> Self {
        Self {
            agent,
            adversaries: Vec::new(),
            score: 0,
        }
    }

    /// Adds an adversary (builder pattern).
    #[must_use]
    pub fn with_adversary(mut self, tile: Tile, state: AdversaryState) -> Self {
        self.adversaries.push(Adversary::new(tile, state));
        self
    }

    /// Iterates over the adversaries standing on `tile`.
    pub fn adversaries_at(&self, tile: Tile) -> impl Iterator<Item = &Adversary> + '_ {
        self.adversaries.iter().filter(move |adversary| adversary.tile == tile)
    }

    pub fn is_threatened_at(&self, tile: Tile) -> bool {
        self.adversaries_at(tile)
            .any(|adversary| adversary.state.is_dangerous())
    }
}
