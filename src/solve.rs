//! Top-level orchestration: loader -> driver -> canonicalizer.

use crate::canonicalize::canonicalize;
use crate::config::SolverConfig;
use crate::error::Result;
use crate::graph::{self, LoadedGraph};
use crate::ilp::driver::drive;
use crate::output::{render, OutputRecord};
use log::{debug, info};
use std::io::BufRead;

/// The fully-resolved outcome of solving one instance.
pub enum SolveOutcome {
    /// The input contained no edges; nothing to solve.
    Empty,
    /// The canonical trail, rendered as output records in trail order.
    Trail(Vec<OutputRecord>),
}

/// Load `reader`, run the iterative ILP solver to convergence, canonicalize
/// the resulting trail, and render it into output records.
pub fn solve<R: BufRead>(reader: R, config: &SolverConfig) -> Result<SolveOutcome> {
    config.validate()?;

    let graph: LoadedGraph = graph::load(reader)?;
    if graph.is_empty() {
        info!("empty input, nothing to solve");
        return Ok(SolveOutcome::Empty);
    }

    let result = drive(&graph, config.weight)?;
    let canonical = canonicalize(&graph.edges, &graph.interner, &result.path);
    debug!("canonical shape: {:?}", canonical.shape);
    Ok(SolveOutcome::Trail(render(&graph, &canonical.path)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn temp_config() -> SolverConfig {
        SolverConfig {
            log_path: std::env::temp_dir()
                .join(format!("lop-solve-test-{}.log", std::process::id())),
            ..SolverConfig::default()
        }
    }

    #[test]
    fn empty_input_yields_empty_outcome() {
        let cfg = temp_config();
        let outcome = solve(Cursor::new(b"".as_slice()), &cfg).unwrap();
        assert!(matches!(outcome, SolveOutcome::Empty));
        let _ = std::fs::remove_file(&cfg.log_path);
    }

    #[test]
    fn single_edge_input_falls_back_to_that_edge() {
        let cfg = temp_config();
        let input = b"JR\tTokaido\tTokyo\tShinagawa\t7\t7\t6\n";
        let outcome = solve(Cursor::new(input.as_slice()), &cfg).unwrap();
        match outcome {
            SolveOutcome::Trail(records) => {
                assert_eq!(records.len(), 1);
                assert_eq!(records[0].company, "JR");
            }
            SolveOutcome::Empty => panic!("expected a trail"),
        }
        let _ = std::fs::remove_file(&cfg.log_path);
    }
}
