//! Layout parsing errors.

use crate::error::GameError;

/// Errors raised while turning an ASCII layout into a [`super::GridMaze`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutError {
    /// The layout has no rows or only empty rows.
    #[error("layout is empty")]
    Empty,

    /// A row's width differs from the first row.
    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A character that maps to no tile kind.
    #[error("unknown glyph {glyph:?} at ({x}, {y})")]
    UnknownGlyph { glyph: char, x: usize, y: usize },

    /// More than one agent spawn marker.
    #[error("layout has more than one agent spawn")]
    DuplicateAgentSpawn,
}

impl GameError for LayoutError {
    fn error_code(&self) -> &'static str {
        use LayoutError::*;
        match self {
            Empty => "LAYOUT_EMPTY",
            RaggedRow { .. } => "LAYOUT_RAGGED_ROW",
            UnknownGlyph { .. } => "LAYOUT_UNKNOWN_GLYPH",
            DuplicateAgentSpawn => "LAYOUT_DUPLICATE_AGENT_SPAWN",
        }
    }
}
