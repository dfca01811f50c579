//! Common error infrastructure for maze-core.
//!
//! Domain-specific errors (`LayoutError`, `ConfigError`) live next to the
//! code that produces them. This module only provides the shared
//! classification trait so callers can report them uniformly.

/// Common trait for all maze-core errors.
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
