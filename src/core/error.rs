//! Construction-time validation errors.
//!
//! Gameplay itself never fails: ignored inputs are reported through the
//! outcome enums in [`crate::rules`]. Only building an engine from a bad
//! configuration or element table returns an error.

use thiserror::Error;

/// Rejected engine configuration or element table.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The element table has no entries.
    #[error("element table must contain at least one element")]
    EmptyElementTable,

    /// Two elements share a symbol, which would make symbol cards ambiguous.
    #[error("duplicate element symbol `{0}`")]
    DuplicateSymbol(String),

    /// An element has an empty symbol or name.
    #[error("element {index} has a blank {field}")]
    BlankField {
        /// Position in the table.
        index: usize,
        /// Either `"symbol"` or `"name"`.
        field: &'static str,
    },

    /// The countdown would end before the first tick.
    #[error("time limit must be at least one tick")]
    ZeroTimeLimit,

    /// A match must be worth something for the win condition to be reachable.
    #[error("points per match must be positive")]
    ZeroPointsPerMatch,

    /// The session driver cannot schedule a zero-length tick interval.
    #[error("tick interval must be positive")]
    ZeroTickInterval,

    /// The score for matching every element does not fit in a `u32`.
    #[error("{points_per_match} points per match overflows the score for {elements} elements")]
    ScoreOverflow {
        points_per_match: u32,
        elements: usize,
    },
}
