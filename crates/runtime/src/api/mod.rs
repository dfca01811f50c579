//! Public surface hosts program against.
mod providers;

pub use providers::{HoldHeadingProvider, PlayerProvider};
