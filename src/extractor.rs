//! Path extraction: walks the main trail in order from one terminal to the
//! other given the selected-edge sets returned by one ILP attempt.

use crate::edge::{Direction, Edge, EdgeId, OrientedEdge};
use crate::error::{LopError, Result};
use crate::interner::StationId;
use std::collections::BTreeSet;

/// The outcome of extracting one attempt's selected edges.
pub struct ExtractionResult {
    /// The ordered main trail, from the first terminal to the second.
    pub path: Vec<OrientedEdge>,
    /// Interior (`X`) edges the extractor could not thread onto `path`:
    /// isolated cycles the driver must cut away on the next attempt.
    pub leftover_subtour_edges: Vec<EdgeId>,
}

/// Reconstruct the main trail from one attempt's `X`/`Y`/`Z` edge-id sets.
///
/// `edges` is the full loaded edge array (for endpoint lookups). `interior`,
/// `terminal_at_1`, `terminal_at_2` are the edge ids with `x_e`, `y_e`, `z_e`
/// set, respectively, per §4.3/§4.4.
///
/// Seed and continuation choices use `BTreeSet` rather than a hash set so
/// ties are always broken by lowest edge id: the reference's "pop any
/// element" is nondeterministic, but stable output across runs of the same
/// input requires a fixed tie-break.
pub fn extract(
    edges: &[Edge],
    interior: &[EdgeId],
    terminal_at_1: &[EdgeId],
    terminal_at_2: &[EdgeId],
) -> Result<ExtractionResult> {
    let mut x: BTreeSet<EdgeId> = interior.iter().copied().collect();
    let mut y: BTreeSet<EdgeId> = terminal_at_1.iter().copied().collect();
    let mut z: BTreeSet<EdgeId> = terminal_at_2.iter().copied().collect();

    let mut path = Vec::new();

    let mut current: StationId = if let Some(&e) = y.iter().next() {
        y.remove(&e);
        path.push(OrientedEdge::new(e, Direction::OneToTwo));
        edges[e].station2
    } else if let Some(&e) = z.iter().next() {
        z.remove(&e);
        path.push(OrientedEdge::new(e, Direction::TwoToOne));
        edges[e].station1
    } else {
        return Err(LopError::ExtractionInvariant(
            "neither Y nor Z has a seed edge to start the main path".to_string(),
        ));
    };

    loop {
        if let Some(&e) = x.iter().find(|&&e| edges[e].station1 == current) {
            x.remove(&e);
            path.push(OrientedEdge::new(e, Direction::OneToTwo));
            current = edges[e].station2;
            continue;
        }
        if let Some(&e) = x.iter().find(|&&e| edges[e].station2 == current) {
            x.remove(&e);
            path.push(OrientedEdge::new(e, Direction::TwoToOne));
            current = edges[e].station1;
            continue;
        }
        if let Some(&e) = z.iter().find(|&&e| edges[e].station1 == current) {
            z.remove(&e);
            path.push(OrientedEdge::new(e, Direction::OneToTwo));
            break;
        }
        if let Some(&e) = y.iter().find(|&&e| edges[e].station2 == current) {
            y.remove(&e);
            path.push(OrientedEdge::new(e, Direction::TwoToOne));
            break;
        }
        return Err(LopError::ExtractionInvariant(format!(
            "main path broke mid-trail: no continuation edge found at station {current:?}"
        )));
    }

    if !y.is_empty() || !z.is_empty() {
        return Err(LopError::ExtractionInvariant(
            "terminal edges remained unconsumed after the main path closed".to_string(),
        ));
    }

    Ok(ExtractionResult {
        path,
        leftover_subtour_edges: x.into_iter().collect(),
    })
}
