//! The outer attempt loop: solve, extract, detect subtours, cut, repeat;
//! then apply the single-edge fallback.

use crate::config::WeightKind;
use crate::edge::{Edge, EdgeId, OrientedEdge};
use crate::error::{LopError, Result};
use crate::extractor::extract;
use crate::graph::LoadedGraph;
use crate::ilp::builder::{solve_attempt, AttemptOutcome};
use log::{debug, info, warn};

/// The converged outcome of the iterative solver loop, before
/// canonicalization.
pub struct DriveResult {
    /// The extracted main trail, in order.
    pub path: Vec<OrientedEdge>,
    /// The objective value the path's edges sum to, under the run's
    /// configured weight.
    pub objective: u64,
}

/// Run the attempt loop to convergence and apply the single-edge fallback.
///
/// Returns [`LopError::NoTrailFound`] if the solver never produces a
/// feasible attempt and no single edge can substitute.
pub fn drive(graph: &LoadedGraph, weight: WeightKind) -> Result<DriveResult> {
    let mut cuts: Vec<Vec<EdgeId>> = Vec::new();
    let mut attempt_number = 0u32;

    let mut best: Option<DriveResult> = loop {
        attempt_number += 1;
        info!("attempt {attempt_number}");

        let outcome = solve_attempt(graph, weight, &cuts);
        let (interior, terminal_at_1, terminal_at_2) = match outcome {
            AttemptOutcome::Optimal {
                interior,
                terminal_at_1,
                terminal_at_2,
            } => (interior, terminal_at_1, terminal_at_2),
            AttemptOutcome::Infeasible(reason) => {
                debug!("attempt {attempt_number} infeasible: {reason}");
                break None;
            }
        };

        let extraction = extract(&graph.edges, &interior, &terminal_at_1, &terminal_at_2)?;

        if extraction.leftover_subtour_edges.is_empty() {
            let objective = path_weight(&graph.edges, &extraction.path, weight);
            info!("attempt {attempt_number} converged, objective {objective}");
            debug!("main path: {:?}", summarize_path(&graph.edges, &extraction.path));
            break Some(DriveResult {
                path: extraction.path,
                objective,
            });
        }

        debug!(
            "attempt {attempt_number} left {} subtour edge(s): {:?}",
            extraction.leftover_subtour_edges.len(),
            extraction.leftover_subtour_edges
        );

        for cycle in connected_cycles(&graph.edges, &extraction.leftover_subtour_edges) {
            cuts.push(cycle);
        }
    };

    // `max_by_key` would return the *last* tied maximum; break ties by
    // lowest edge id instead, matching the tie-break convention the
    // extractor and canonicalizer use elsewhere.
    let max_weight = graph.edges.iter().map(|e| e.weight(weight)).max();
    let heaviest_single_edge = max_weight.and_then(|w| {
        graph
            .edges
            .iter()
            .enumerate()
            .find(|(_, e)| e.weight(weight) == w)
    });

    if let Some((edge_id, edge)) = heaviest_single_edge {
        let single_weight = edge.weight(weight) as u64;
        let beats_current = match &best {
            Some(result) => single_weight > result.objective,
            None => true,
        };
        if beats_current {
            warn!("single-edge fallback triggered: edge {edge_id} weight {single_weight}");
            best = Some(DriveResult {
                path: vec![OrientedEdge::new(edge_id, crate::edge::Direction::OneToTwo)],
                objective: single_weight,
            });
        }
    }

    best.ok_or_else(|| LopError::NoTrailFound {
        reason: "no feasible attempt converged and no single edge was available".to_string(),
    })
}

fn path_weight(edges: &[Edge], path: &[OrientedEdge], weight: WeightKind) -> u64 {
    path.iter()
        .map(|oe| edges[oe.edge_id].weight(weight) as u64)
        .sum()
}

fn summarize_path(edges: &[Edge], path: &[OrientedEdge]) -> Vec<(u32, u32)> {
    path.iter()
        .map(|oe| (oe.start(edges).0, oe.end(edges).0))
        .collect()
}

/// Split the leftover-X edge set into its connected components, each
/// returned as a plain list of edge ids forming one cycle (a no-good cut).
fn connected_cycles(edges: &[Edge], leftover: &[EdgeId]) -> Vec<Vec<EdgeId>> {
    let mut remaining: Vec<EdgeId> = leftover.to_vec();
    let mut cycles = Vec::new();

    while let Some(seed) = remaining.pop() {
        let mut component = vec![seed];
        let mut frontier_stations = vec![edges[seed].station1, edges[seed].station2];

        loop {
            let mut grew = false;
            let mut i = 0;
            while i < remaining.len() {
                let e = remaining[i];
                let touches = frontier_stations.contains(&edges[e].station1)
                    || frontier_stations.contains(&edges[e].station2);
                if touches {
                    frontier_stations.push(edges[e].station1);
                    frontier_stations.push(edges[e].station2);
                    component.push(e);
                    remaining.remove(i);
                    grew = true;
                } else {
                    i += 1;
                }
            }
            if !grew {
                break;
            }
        }

        cycles.push(component);
    }

    cycles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interner::StationId;

    fn edge(s1: u32, s2: u32) -> Edge {
        Edge {
            company: "C".into(),
            line: "L".into(),
            station1: StationId(s1),
            station2: StationId(s2),
            distance_km_a: 1,
            distance_km_b: 1,
            distance_km_c: 1,
        }
    }

    #[test]
    fn connected_cycles_groups_by_shared_stations() {
        let edges = vec![
            edge(0, 1),
            edge(1, 2),
            edge(2, 0),
            edge(10, 11),
            edge(11, 12),
            edge(12, 10),
        ];
        let leftover: Vec<EdgeId> = vec![0, 1, 2, 3, 4, 5];
        let mut cycles = connected_cycles(&edges, &leftover);
        for c in &mut cycles {
            c.sort_unstable();
        }
        cycles.sort_by_key(|c| c[0]);
        assert_eq!(cycles, vec![vec![0, 1, 2], vec![3, 4, 5]]);
    }
}
