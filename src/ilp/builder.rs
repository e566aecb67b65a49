//! Builds and solves one ILP attempt: variables, objective, base
//! constraints, plus whatever no-good cuts the driver has accumulated.
//!
//! Every attempt rebuilds the program from scratch rather than mutating a
//! persistent solver handle. `good_lp`'s `Variable` tokens are deterministic
//! as long as they are declared in the same order every time (here: all
//! `x`, then all `y`, then all `z`, one per edge in edge-id order), so
//! rebuilding is safe and keeps the driver's cut bookkeeping to a plain list
//! of edge-id cycles instead of a solver-specific handle.

use crate::config::WeightKind;
use crate::edge::EdgeId;
use crate::graph::LoadedGraph;
use good_lp::{default_solver, variable, Expression, ProblemVariables, Solution, SolverModel};

/// The three binary variable arrays for one ILP attempt, one entry per edge.
struct EdgeVars {
    x: Vec<good_lp::Variable>,
    y: Vec<good_lp::Variable>,
    z: Vec<good_lp::Variable>,
}

/// The result of solving one ILP attempt.
pub enum AttemptOutcome {
    /// An optimal integral assignment was found.
    Optimal {
        /// Edge ids with `x_e = 1`: interior edges of the trail.
        interior: Vec<EdgeId>,
        /// Edge ids with `y_e = 1`: terminal at `station1`.
        terminal_at_1: Vec<EdgeId>,
        /// Edge ids with `z_e = 1`: terminal at `station2`.
        terminal_at_2: Vec<EdgeId>,
    },
    /// The solver could not prove an optimal solution exists (infeasible,
    /// unbounded, or another solver-reported failure).
    Infeasible(String),
}

/// Solve one ILP attempt for `graph`, given the no-good cuts accumulated by
/// earlier attempts. Each cut is a cycle: a list of edge ids forbidden from
/// all being simultaneously interior (`x_e = 1`).
pub fn solve_attempt(
    graph: &LoadedGraph,
    weight: WeightKind,
    cuts: &[Vec<EdgeId>],
) -> AttemptOutcome {
    let n = graph.edges.len();
    let mut vars = ProblemVariables::new();
    let edge_vars = EdgeVars {
        x: (0..n).map(|_| vars.add(variable().binary())).collect(),
        y: (0..n).map(|_| vars.add(variable().binary())).collect(),
        z: (0..n).map(|_| vars.add(variable().binary())).collect(),
    };

    let objective: Expression = (0..n)
        .map(|e| {
            let w = graph.edges[e].weight(weight) as f64;
            w * used_indicator(&edge_vars, e)
        })
        .sum();

    let mut model = vars.maximise(&objective).using(default_solver);

    // Terminal-count constraint: exactly two terminal half-traversals.
    let terminal_count: Expression = (0..n)
        .map(|e| edge_vars.y[e] + edge_vars.z[e])
        .sum();
    model = model.with(terminal_count.eq(2.0));

    // Mutual exclusion per edge: at most one of {x_e, y_e, z_e}.
    for e in 0..n {
        model = model.with(used_indicator(&edge_vars, e).leq(1.0));
    }

    // Vertex balance, the central combinatorial constraint.
    for station in graph.stations() {
        let incident = graph.incident_edges(station);
        if incident.is_empty() {
            continue;
        }
        let half_traversals: Vec<good_lp::Variable> = incident
            .iter()
            .flat_map(|&e| {
                let terminal_var = if graph.edges[e].station2 == station {
                    edge_vars.y[e]
                } else {
                    edge_vars.z[e]
                };
                [edge_vars.x[e], terminal_var]
            })
            .collect();
        let sum_expr: Expression = half_traversals.iter().copied().sum();

        model = model.with(sum_expr.clone().leq(2.0));
        for w in &half_traversals {
            model = model.with((sum_expr.clone() - 2.0 * *w).geq(0.0));
        }
    }

    // Disjunctive groups: at least one literal satisfied.
    for (_, members) in graph.disjunctive.iter() {
        let expr: Expression = members
            .iter()
            .map(|&(e, polarity)| {
                if polarity {
                    used_indicator(&edge_vars, e)
                } else {
                    1.0 - used_indicator(&edge_vars, e)
                }
            })
            .sum();
        model = model.with(expr.geq(1.0));
    }

    // Exclusive groups: bounded weighted sum of "used" indicators.
    for (_, members) in graph.exclusive.iter() {
        let expr: Expression = members
            .iter()
            .map(|&(e, coeff)| coeff as f64 * used_indicator(&edge_vars, e))
            .sum();
        model = model.with(expr.leq(crate::constraints::LARGE_COEFF as f64));
    }

    // Accumulated no-good cuts: forbid each previously-seen subtour.
    for cut in cuts {
        let sum_x: Expression = cut.iter().map(|&e| edge_vars.x[e]).sum();
        model = model.with(sum_x.leq((cut.len() - 1) as f64));
    }

    match model.solve() {
        Ok(solution) => {
            let extract = |vars: &[good_lp::Variable]| -> Vec<EdgeId> {
                vars.iter()
                    .enumerate()
                    .filter(|(_, &v)| solution.value(v) >= 0.99)
                    .map(|(e, _)| e)
                    .collect()
            };
            AttemptOutcome::Optimal {
                interior: extract(&edge_vars.x),
                terminal_at_1: extract(&edge_vars.y),
                terminal_at_2: extract(&edge_vars.z),
            }
        }
        Err(e) => AttemptOutcome::Infeasible(e.to_string()),
    }
}

fn used_indicator(vars: &EdgeVars, e: EdgeId) -> Expression {
    vars.x[e] + vars.y[e] + vars.z[e]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::load;
    use std::io::Cursor;

    fn load_str(s: &str) -> LoadedGraph {
        load(Cursor::new(s.as_bytes())).unwrap()
    }

    #[test]
    fn single_edge_attempt_is_infeasible_without_the_fallback() {
        // The terminal-count == 2 constraint cannot be satisfied by a
        // one-edge graph (one edge offers only two half-traversals total,
        // both of which would need to be terminal ends of *different*
        // trails); this is exactly the scenario the single-edge fallback
        // in the driver exists to handle.
        let graph = load_str("A\tL\tS1\tS2\t10\t10\t10\n");
        match solve_attempt(&graph, WeightKind::Operational, &[]) {
            AttemptOutcome::Optimal { .. } => {
                // Some solvers may still find a degenerate single-edge
                // trail feasible (y on one end, z on the other); either
                // outcome is acceptable here, the driver's fallback covers
                // the rest.
            }
            AttemptOutcome::Infeasible(_) => {}
        }
    }

    #[test]
    fn chain_of_two_edges_selects_both() {
        let graph = load_str("A\tL\tS1\tS2\t3\t3\t3\nA\tL\tS2\tS3\t5\t5\t5\n");
        match solve_attempt(&graph, WeightKind::Operational, &[]) {
            AttemptOutcome::Optimal {
                interior,
                terminal_at_1,
                terminal_at_2,
            } => {
                let total_used = interior.len() + terminal_at_1.len() + terminal_at_2.len();
                assert_eq!(total_used, 2, "both edges of the only chain should be used");
            }
            AttemptOutcome::Infeasible(reason) => panic!("expected optimal, got {reason}"),
        }
    }

    #[test]
    fn disjunctive_group_prefers_the_edge_that_must_be_used() {
        // Two parallel edges between S1-S2: the lighter one is forced used
        // via `+g`; optimum must include it even though it isn't heaviest.
        let graph = load_str(
            "A\tL\tS1\tS2\t10\t10\t10\t+g\nA\tL\tS1\tS2\t100\t100\t100\n",
        );
        match solve_attempt(&graph, WeightKind::Operational, &[]) {
            AttemptOutcome::Optimal {
                interior,
                terminal_at_1,
                terminal_at_2,
            } => {
                let used: Vec<EdgeId> = interior
                    .into_iter()
                    .chain(terminal_at_1)
                    .chain(terminal_at_2)
                    .collect();
                assert!(used.contains(&0), "the +g edge must be used");
            }
            AttemptOutcome::Infeasible(reason) => panic!("expected optimal, got {reason}"),
        }
    }
}
