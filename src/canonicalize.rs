//! Topological classification and normalization of the extracted main trail.
//!
//! The ILP's solution is unique only up to the symmetries of the trail's
//! underlying shape (direction reversal, loop rotation, arc permutation).
//! This module classifies the shape (L/O/P/B) and emits the canonical
//! representative: a total order over equivalent representations, always
//! resolved to its minimum.

use crate::edge::{reverse_path, Edge, OrientedEdge};
use crate::interner::{StationId, StationInterner};

/// The topological class of a trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A simple line: two distinct terminals, no revisit.
    Line,
    /// A simple loop: start and end coincide, nothing else repeats.
    Loop,
    /// A lollipop: a stem leading into a loop (or the reverse).
    Lollipop,
    /// A bicyclic trail: figure-eight, dumbbell, or theta.
    Bicyclic,
}

/// A canonicalized trail: its shape and the normalized edge order.
pub struct Canonical {
    pub shape: Shape,
    pub path: Vec<OrientedEdge>,
}

/// Classify and normalize `path` per §4.5.
///
/// Comparisons between stations are lexicographic on their interned *names*,
/// not their `StationId` integers: interning order follows first appearance
/// in the input, which has no relation to alphabetical order.
pub fn canonicalize(edges: &[Edge], interner: &StationInterner, path: &[OrientedEdge]) -> Canonical {
    if path.is_empty() {
        return Canonical {
            shape: Shape::Line,
            path: Vec::new(),
        };
    }

    let start0 = path[0].start(edges);
    let end_n = path[path.len() - 1].end(edges);

    let l1: Vec<usize> = (1..path.len())
        .filter(|&i| path[i].start(edges) == start0)
        .collect();
    let l2: Vec<usize> = (0..path.len())
        .filter(|&i| path[i].start(edges) == end_n)
        .collect();

    if l1.is_empty() && l2.is_empty() {
        return canonicalize_line(edges, interner, path);
    }
    if l1.is_empty() && l2 == vec![0] {
        return canonicalize_loop(edges, interner, path);
    }
    if l1.is_empty() && l2.len() == 1 {
        return canonicalize_lollipop_stem_first(edges, interner, path, l2[0]);
    }
    if l2.is_empty() && l1.len() == 1 {
        return canonicalize_lollipop_loop_first(edges, interner, path, l1[0]);
    }
    if l2.len() > 1 && l1.len() == 1 {
        return canonicalize_figure_eight(edges, interner, path, l1[0]);
    }
    if l1.len() == 1 && l2.len() == 1 {
        let i1 = l1[0];
        let i2 = l2[0];
        return if i1 < i2 {
            canonicalize_dumbbell(edges, interner, path, i1, i2)
        } else {
            canonicalize_theta(edges, interner, path, i1, i2)
        };
    }

    // Any remaining combination (degenerate/duplicate index sets on
    // pathological inputs) falls back to returning the path unnormalized
    // rather than guessing at a shape; this keeps canonicalization total.
    Canonical {
        shape: Shape::Bicyclic,
        path: path.to_vec(),
    }
}

fn canonicalize_line(edges: &[Edge], interner: &StationInterner, path: &[OrientedEdge]) -> Canonical {
    let start0 = path[0].start(edges);
    let end_n = path[path.len() - 1].end(edges);
    let normalized = if lex_greater(interner, start0, end_n) {
        reverse_path(path)
    } else {
        path.to_vec()
    };
    Canonical {
        shape: Shape::Line,
        path: normalized,
    }
}

fn canonicalize_loop(edges: &[Edge], interner: &StationInterner, path: &[OrientedEdge]) -> Canonical {
    let rotated = rotate_to_lex_min_station(edges, interner, path);
    let normalized = if rotated.len() > 1 {
        let first = rotated[0].end(edges);
        let last = rotated[rotated.len() - 1].start(edges);
        if lex_greater(interner, first, last) {
            let mut r = reverse_path(&rotated);
            // After reversing a rotated loop, rotate again so the
            // lex-min station still sits at index 0.
            r = rotate_to_lex_min_station(edges, interner, &r);
            r
        } else {
            rotated
        }
    } else {
        rotated
    };
    Canonical {
        shape: Shape::Loop,
        path: normalized,
    }
}

fn canonicalize_lollipop_stem_first(
    edges: &[Edge],
    interner: &StationInterner,
    path: &[OrientedEdge],
    split: usize,
) -> Canonical {
    let stem = path[..split].to_vec();
    let loop_part = canonicalize_loop(edges, interner, &path[split..]).path;
    let mut out = stem;
    out.extend(loop_part);
    Canonical {
        shape: Shape::Lollipop,
        path: out,
    }
}

fn canonicalize_lollipop_loop_first(
    edges: &[Edge],
    interner: &StationInterner,
    path: &[OrientedEdge],
    split: usize,
) -> Canonical {
    let reversed_stem = reverse_path(&path[..split]);
    let loop_part = canonicalize_loop(edges, interner, &path[split..]).path;
    let mut out = reversed_stem;
    out.extend(loop_part);
    Canonical {
        shape: Shape::Lollipop,
        path: out,
    }
}

fn canonicalize_figure_eight(
    edges: &[Edge],
    interner: &StationInterner,
    path: &[OrientedEdge],
    split: usize,
) -> Canonical {
    let first_loop = canonicalize_loop(edges, interner, &path[..split]).path;
    let second_loop = canonicalize_loop(edges, interner, &path[split..]).path;

    let first_start = first_loop[0].start(edges);
    let second_start = second_loop[0].start(edges);

    let ordered = if lex_greater(interner, first_start, second_start) {
        let mut out = second_loop;
        out.extend(first_loop);
        out
    } else {
        let mut out = first_loop;
        out.extend(second_loop);
        out
    };

    Canonical {
        shape: Shape::Bicyclic,
        path: ordered,
    }
}

fn canonicalize_dumbbell(
    edges: &[Edge],
    interner: &StationInterner,
    path: &[OrientedEdge],
    i1: usize,
    i2: usize,
) -> Canonical {
    // `i1` is the L1 (revisit-start) index, `i2` the L2 (touches-end)
    // index; the dumbbell case holds `i1 < i2`, so the first loop is
    // `[0, i1)`, the bridge spans `[i1, i2)`, and the second loop is
    // `[i2, len)`.
    let loop_a = canonicalize_loop(edges, interner, &path[..i1]).path;
    let bridge = path[i1..i2].to_vec();
    let loop_b = canonicalize_loop(edges, interner, &path[i2..]).path;

    let loop_a_start = loop_a.first().map(|e| e.start(edges));
    let loop_b_start = loop_b.first().map(|e| e.start(edges));

    let mut out = Vec::new();
    match (loop_a_start, loop_b_start) {
        (Some(a), Some(b)) if lex_greater(interner, a, b) => {
            out.extend(loop_b);
            out.extend(bridge.iter().map(|e| e.reversed()).rev());
            out.extend(loop_a);
        }
        _ => {
            out.extend(loop_a);
            out.extend(bridge);
            out.extend(loop_b);
        }
    }

    Canonical {
        shape: Shape::Bicyclic,
        path: out,
    }
}

fn canonicalize_theta(
    edges: &[Edge],
    interner: &StationInterner,
    path: &[OrientedEdge],
    _i1: usize,
    _i2: usize,
) -> Canonical {
    // Three internally-disjoint arcs between the trail's two shared nodes.
    // Since the trail is a single linear sequence that happens to revisit
    // both endpoints, the three arcs are the segments between consecutive
    // visits to either shared node.
    let start0 = path[0].start(edges);
    let mut boundaries = vec![0usize];
    for (i, oe) in path.iter().enumerate() {
        let s = oe.start(edges);
        if i > 0 && s == start0 {
            boundaries.push(i);
        }
    }
    boundaries.push(path.len());
    boundaries.dedup();

    let mut arcs: Vec<Vec<OrientedEdge>> = boundaries
        .windows(2)
        .map(|w| path[w[0]..w[1]].to_vec())
        .collect();

    arcs.sort_by(|a, b| {
        let a_key = (
            a.first().map(|e| interner.name(e.start(edges))),
            a.last().map(|e| interner.name(e.end(edges))),
        );
        let b_key = (
            b.first().map(|e| interner.name(e.start(edges))),
            b.last().map(|e| interner.name(e.end(edges))),
        );
        a_key.cmp(&b_key)
    });

    let out: Vec<OrientedEdge> = arcs.into_iter().flatten().collect();
    Canonical {
        shape: Shape::Bicyclic,
        path: out,
    }
}

/// Lexicographic comparison by interned station *name*, not by `StationId`:
/// ids are assigned in first-appearance order, which carries no relation to
/// alphabetical order.
fn lex_greater(interner: &StationInterner, a: StationId, b: StationId) -> bool {
    interner.name(a) > interner.name(b)
}

fn rotate_to_lex_min_station(
    edges: &[Edge],
    interner: &StationInterner,
    path: &[OrientedEdge],
) -> Vec<OrientedEdge> {
    if path.is_empty() {
        return Vec::new();
    }
    let min_index = (0..path.len())
        .min_by_key(|&i| interner.name(path[i].start(edges)))
        .unwrap_or(0);
    let mut rotated = Vec::with_capacity(path.len());
    rotated.extend_from_slice(&path[min_index..]);
    rotated.extend_from_slice(&path[..min_index]);
    rotated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::Direction;
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

    fn synthetic_interner(n: u32) -> StationInterner {
        let mut interner = StationInterner::new();
        for i in 0..n {
            interner.intern(&format!("S{i}"));
        }
        interner
    }

    #[test]
    fn line_with_start_greater_than_end_is_reversed() {
        // S3 -> S2 -> S1: start (3) > end (1), must reverse.
        let edges = vec![edge(3, 2), edge(2, 1)];
        let interner = synthetic_interner(4);
        let path = vec![
            OrientedEdge::new(0, Direction::OneToTwo),
            OrientedEdge::new(1, Direction::OneToTwo),
        ];
        let canon = canonicalize(&edges, &interner, &path);
        assert_eq!(canon.shape, Shape::Line);
        assert_eq!(canon.path[0].start(&edges), StationId(1));
        assert_eq!(canon.path.last().unwrap().end(&edges), StationId(3));
    }

    #[test]
    fn triangle_loop_rotates_to_lex_min_station() {
        // S2 -> S0 -> S1 -> S2, a 3-cycle; lex-min station is S0.
        let edges = vec![edge(2, 0), edge(0, 1), edge(1, 2)];
        let interner = synthetic_interner(3);
        let path = vec![
            OrientedEdge::new(0, Direction::OneToTwo),
            OrientedEdge::new(1, Direction::OneToTwo),
            OrientedEdge::new(2, Direction::OneToTwo),
        ];
        let canon = canonicalize(&edges, &interner, &path);
        assert_eq!(canon.shape, Shape::Loop);
        assert_eq!(canon.path[0].start(&edges), StationId(0));
    }

    #[test]
    fn lollipop_splits_stem_from_loop() {
        // Stem S0->S1, then loop S1->S2->S3->S1.
        let edges = vec![edge(0, 1), edge(1, 2), edge(2, 3), edge(3, 1)];
        let interner = synthetic_interner(4);
        let path = vec![
            OrientedEdge::new(0, Direction::OneToTwo),
            OrientedEdge::new(1, Direction::OneToTwo),
            OrientedEdge::new(2, Direction::OneToTwo),
            OrientedEdge::new(3, Direction::OneToTwo),
        ];
        let canon = canonicalize(&edges, &interner, &path);
        assert_eq!(canon.shape, Shape::Lollipop);
        assert_eq!(canon.path[0].start(&edges), StationId(0));
    }

    #[test]
    fn reversal_follows_station_name_not_interning_order() {
        // "S9" is interned first (StationId(0)) and "S1" second
        // (StationId(1)), the opposite of their alphabetical order. A line
        // from S9 to S1 must still end up reported S1 -> S9, proving the
        // comparison is on names, not on the order stations were interned.
        let graph = crate::graph::load(std::io::Cursor::new(
            "A\tL\tS9\tS1\t1\t1\t1\n".as_bytes(),
        ))
        .unwrap();
        assert_eq!(graph.interner.name(StationId(0)), "S9");
        assert_eq!(graph.interner.name(StationId(1)), "S1");

        let path = vec![OrientedEdge::new(0, Direction::OneToTwo)];
        let canon = canonicalize(&graph.edges, &graph.interner, &path);
        assert_eq!(canon.shape, Shape::Line);
        assert_eq!(graph.interner.name(canon.path[0].start(&graph.edges)), "S1");
        assert_eq!(graph.interner.name(canon.path[0].end(&graph.edges)), "S9");
    }
}
