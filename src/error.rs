//! Error types for the longest one-way ticket solver.

use thiserror::Error;

/// Errors that can occur while loading, solving, or rendering a LOP instance.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LopError {
    /// A record names the same station on both ends.
    #[error("line {line}: self-loop between {station} and itself is not allowed")]
    SelfLoop { line: usize, station: String },

    /// A record has fewer than 7 tab-separated fields.
    #[error("line {line}: expected at least 7 tab-separated fields, got {got}")]
    MalformedRecord { line: usize, got: usize },

    /// A distance field did not parse as a non-negative integer.
    #[error("line {line}: field {field} is not a non-negative integer: {value:?}")]
    InvalidDistance {
        line: usize,
        field: &'static str,
        value: String,
    },

    /// The eighth field contained a group token with an unrecognized prefix.
    #[error("line {line}: unknown group prefix in token {token:?}")]
    UnknownGroupPrefix { line: usize, token: String },

    /// The solver's log path could not be created or truncated at startup.
    #[error("cannot open solver log path {path:?}: {reason}")]
    LogPathUnwritable { path: String, reason: String },

    /// The requested thread cap fell outside the documented [1, 99] range.
    #[error("thread cap {value} is out of range [1, 99]")]
    ThreadCapOutOfRange { value: i64 },

    /// The MIP solver reported infeasible, unbounded, or otherwise failed,
    /// and the single-edge fallback also found nothing to promote.
    #[error("no trail could be found: {reason}")]
    NoTrailFound { reason: String },

    /// An internal invariant of the path extractor was violated: this
    /// indicates a bug in the ILP encoding, not a property of the input.
    #[error("internal consistency failure during path extraction: {0}")]
    ExtractionInvariant(String),

    /// Reading the input stream itself failed.
    #[error("line {line}: failed to read input: {reason}")]
    InputIo { line: usize, reason: String },
}

/// Result type alias used throughout the solver.
pub type Result<T> = std::result::Result<T, LopError>;
