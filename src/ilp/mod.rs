//! Integer Linear Programming encoding of the longest one-way ticket
//! problem, and the iterative solver driver built on top of it.
//!
//! The builder ([`builder`]) constructs a fresh `good_lp` model — variables,
//! objective, and base constraints — from the loaded graph plus whatever
//! no-good cuts the driver has accumulated so far. The driver ([`driver`])
//! owns the attempt loop: solve, extract, detect subtours, cut, repeat.

pub mod builder;
pub mod driver;

pub use builder::{solve_attempt, AttemptOutcome};
pub use driver::{drive, DriveResult};
