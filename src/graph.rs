//! Graph loader: parses the tab-separated edge stream into an indexed edge
//! array, a vertex-incidence map, and the two constraint-group dictionaries.

use crate::constraints::{DisjunctiveGroups, ExclusiveGroups, LARGE_COEFF};
use crate::edge::{Edge, EdgeId};
use crate::error::{LopError, Result};
use crate::interner::{StationId, StationInterner};
use std::io::BufRead;

/// The fully-loaded railway graph: edges, the station interner, per-vertex
/// incident-edge lists, and the two constraint-group dictionaries. Built
/// once by [`load`]; read-only thereafter.
#[derive(Debug, Clone, Default)]
pub struct LoadedGraph {
    pub edges: Vec<Edge>,
    pub interner: StationInterner,
    /// Incident edge ids, indexed by `StationId`.
    pub incidence: Vec<Vec<EdgeId>>,
    pub disjunctive: DisjunctiveGroups,
    pub exclusive: ExclusiveGroups,
}

impl LoadedGraph {
    /// True if the input contained no edges at all.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edge ids incident to `station`.
    pub fn incident_edges(&self, station: StationId) -> &[EdgeId] {
        &self.incidence[station.0 as usize]
    }

    /// All distinct stations, in interning order.
    pub fn stations(&self) -> impl Iterator<Item = StationId> {
        (0..self.interner.len() as u32).map(StationId)
    }
}

/// Parse a line-oriented TSV edge stream into a [`LoadedGraph`].
///
/// Each non-empty, non-comment line is `company\tline\tstation1\tstation2\t
/// kmA\tkmB\tkmC[\tgroups]`, where `groups` is a comma-separated list of
/// tokens prefixed by one of `+ - * :` (see [`crate::constraints`]). `#`
/// starts a comment to end of line; blank lines (after stripping a comment)
/// are skipped.
pub fn load<R: BufRead>(reader: R) -> Result<LoadedGraph> {
    let mut graph = LoadedGraph::default();

    for (line_number, raw_line) in reader.lines().enumerate() {
        let line_number = line_number + 1;
        let raw_line = raw_line.map_err(|e| LopError::InputIo {
            line: line_number,
            reason: e.to_string(),
        })?;

        let line = match raw_line.find('#') {
            Some(idx) => &raw_line[..idx],
            None => raw_line.as_str(),
        };
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.trim_end_matches(['\r', '\n']).split('\t').collect();
        if fields.len() < 7 {
            return Err(LopError::MalformedRecord {
                line: line_number,
                got: fields.len(),
            });
        }

        let company = fields[0].to_string();
        let line_name = fields[1].to_string();
        let station1_name = fields[2];
        let station2_name = fields[3];
        let distance_km_a = parse_distance(fields[4], "kmA", line_number)?;
        let distance_km_b = parse_distance(fields[5], "kmB", line_number)?;
        let distance_km_c = parse_distance(fields[6], "kmC", line_number)?;

        if station1_name == station2_name {
            return Err(LopError::SelfLoop {
                line: line_number,
                station: station1_name.to_string(),
            });
        }

        let station1 = graph.interner.intern(station1_name);
        let station2 = graph.interner.intern(station2_name);
        ensure_incidence_row(&mut graph.incidence, station1);
        ensure_incidence_row(&mut graph.incidence, station2);

        let edge_id = graph.edges.len();
        graph.incidence[station1.0 as usize].push(edge_id);
        graph.incidence[station2.0 as usize].push(edge_id);

        graph.edges.push(Edge {
            company,
            line: line_name,
            station1,
            station2,
            distance_km_a,
            distance_km_b,
            distance_km_c,
        });

        if let Some(groups_field) = fields.get(7) {
            for token in groups_field.split(',') {
                if token.is_empty() {
                    continue;
                }
                parse_group_token(token, edge_id, line_number, &mut graph)?;
            }
        }
    }

    Ok(graph)
}

fn ensure_incidence_row(incidence: &mut Vec<Vec<EdgeId>>, station: StationId) {
    while incidence.len() <= station.0 as usize {
        incidence.push(Vec::new());
    }
}

fn parse_distance(field: &str, name: &'static str, line_number: usize) -> Result<u32> {
    field.parse::<u32>().map_err(|_| LopError::InvalidDistance {
        line: line_number,
        field: name,
        value: field.to_string(),
    })
}

fn parse_group_token(
    token: &str,
    edge_id: EdgeId,
    line_number: usize,
    graph: &mut LoadedGraph,
) -> Result<()> {
    let mut chars = token.chars();
    let prefix = chars.next().expect("token is non-empty");
    let name = chars.as_str();
    match prefix {
        '+' => graph.disjunctive.add(name, edge_id, true),
        '-' => graph.disjunctive.add(name, edge_id, false),
        '*' => graph.exclusive.add(name, edge_id, LARGE_COEFF),
        ':' => graph.exclusive.add(name, edge_id, 1),
        _ => {
            return Err(LopError::UnknownGroupPrefix {
                line: line_number,
                token: token.to_string(),
            })
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn load_str(s: &str) -> Result<LoadedGraph> {
        load(Cursor::new(s.as_bytes()))
    }

    #[test]
    fn empty_input_yields_empty_graph() {
        let graph = load_str("").unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let graph = load_str("# just a comment\n\nA\tL\tS1\tS2\t1\t2\t3\n").unwrap();
        assert_eq!(graph.edges.len(), 1);
    }

    #[test]
    fn trailing_comment_on_a_record_is_stripped() {
        let graph = load_str("A\tL\tS1\tS2\t1\t2\t3  # note\n").unwrap();
        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.edges[0].distance_km_c, 3);
    }

    #[test]
    fn self_loop_is_rejected_with_line_number() {
        let err = load_str("A\tL\tS1\tS1\t1\t2\t3\n").unwrap_err();
        assert_eq!(
            err,
            LopError::SelfLoop {
                line: 1,
                station: "S1".to_string()
            }
        );
    }

    #[test]
    fn unknown_group_prefix_is_rejected() {
        let err = load_str("A\tL\tS1\tS2\t1\t2\t3\t?g\n").unwrap_err();
        assert!(matches!(err, LopError::UnknownGroupPrefix { line: 1, .. }));
    }

    #[test]
    fn parallel_edges_remain_distinct() {
        let graph = load_str("A\tL\tS1\tS2\t1\t1\t1\nA\tL\tS1\tS2\t2\t2\t2\n").unwrap();
        assert_eq!(graph.edges.len(), 2);
        let s1 = graph.interner.get("S1").unwrap();
        assert_eq!(graph.incident_edges(s1), &[0, 1]);
    }

    #[test]
    fn group_tokens_populate_both_dictionaries() {
        let graph =
            load_str("A\tL\tS1\tS2\t1\t1\t1\t+g,*h\nA\tL\tS2\tS3\t1\t1\t1\t-g,:h\n").unwrap();
        assert!(!graph.disjunctive.is_empty());
        assert!(!graph.exclusive.is_empty());
    }

    #[test]
    fn malformed_record_is_rejected() {
        let err = load_str("A\tL\tS1\tS2\t1\t2\n").unwrap_err();
        assert!(matches!(err, LopError::MalformedRecord { line: 1, got: 6 }));
    }

    #[test]
    fn invalid_distance_is_rejected() {
        let err = load_str("A\tL\tS1\tS2\tx\t2\t3\n").unwrap_err();
        assert!(matches!(
            err,
            LopError::InvalidDistance {
                line: 1,
                field: "kmA",
                ..
            }
        ));
    }
}
