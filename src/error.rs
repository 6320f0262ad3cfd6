//! Error types for pattern generation.

use thiserror::Error;

/// Errors surfaced by [`PatternRegistry::generate`](crate::PatternRegistry::generate).
///
/// Every variant is a configuration problem detected before any drawing
/// happens, so a failed call never yields a partial document.
#[derive(Debug, Error)]
pub enum Error {
    /// A color option could not be parsed as `#rgb` or `#rrggbb`.
    #[error("invalid color {value:?}: {source}")]
    InvalidColor {
        value: String,
        #[source]
        source: palette::rgb::FromHexError,
    },

    /// An explicitly requested pattern name is not registered.
    #[error("unknown pattern {0:?}")]
    UnknownPattern(String),

    /// Automatic selection was requested from a registry with no entries.
    #[error("pattern registry is empty")]
    EmptyRegistry,
}

pub type Result<T> = std::result::Result<T, Error>;
