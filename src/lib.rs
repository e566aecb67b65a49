//! # lop
//!
//! A solver for the Longest One-Way Ticket Problem: given a weighted
//! undirected railway multigraph and a set of disjunctive/exclusive edge
//! constraints, find a maximum-weight simple trail.
//!
//! The pipeline is a straight line: the [`graph`] loader parses the edge
//! stream into an indexed graph; the [`ilp`] builder and driver run the
//! integer program to convergence, eliminating subtours with iterative
//! no-good cuts; the [`extractor`] reconstructs the main trail from each
//! attempt's selected edges; and the [`canonicalize`] module normalizes the
//! result into a unique representative of its topological shape.
//!
//! ## Example
//!
//! ```
//! use lop::{solve, SolverConfig, SolveOutcome};
//! use std::io::Cursor;
//!
//! let input = "JR\tTokaido\tTokyo\tShinagawa\t7\t7\t7\n";
//! let config = SolverConfig {
//!     log_path: std::env::temp_dir().join("lop-doctest.log"),
//!     ..SolverConfig::default()
//! };
//! match solve(Cursor::new(input.as_bytes()), &config).unwrap() {
//!     SolveOutcome::Trail(records) => assert_eq!(records.len(), 1),
//!     SolveOutcome::Empty => unreachable!(),
//! }
//! # let _ = std::fs::remove_file(&config.log_path);
//! ```

pub mod canonicalize;
pub mod config;
pub mod constraints;
pub mod edge;
pub mod error;
pub mod extractor;
pub mod graph;
pub mod ilp;
pub mod interner;
pub mod output;
pub mod solve;

/// Convenient re-exports of the crate's most commonly used items.
pub mod prelude {
    pub use crate::canonicalize::{canonicalize, Canonical, Shape};
    pub use crate::config::{SolverConfig, WeightKind};
    pub use crate::edge::{Direction, Edge, EdgeId, OrientedEdge};
    pub use crate::error::{LopError, Result};
    pub use crate::graph::{load, LoadedGraph};
    pub use crate::interner::{StationId, StationInterner};
    pub use crate::output::{render, OutputRecord};
    pub use crate::solve::{solve, SolveOutcome};
}

pub use config::{SolverConfig, WeightKind};
pub use error::{LopError, Result};
pub use solve::{solve, SolveOutcome};
