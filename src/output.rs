//! Rendering a canonicalized trail into the TSV output records §6 specifies.

use crate::edge::OrientedEdge;
use crate::graph::LoadedGraph;
use std::fmt;

/// One output line: `company line from_station to_station kmA kmB kmC`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    pub company: String,
    pub line: String,
    pub from_station: String,
    pub to_station: String,
    pub km_a: u32,
    pub km_b: u32,
    pub km_c: u32,
}

impl fmt::Display for OutputRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.company,
            self.line,
            self.from_station,
            self.to_station,
            self.km_a,
            self.km_b,
            self.km_c
        )
    }
}

/// Render the canonical `path` against `graph`'s edge and station data.
pub fn render(graph: &LoadedGraph, path: &[OrientedEdge]) -> Vec<OutputRecord> {
    path.iter()
        .map(|oe| {
            let edge = &graph.edges[oe.edge_id];
            let from = oe.start(&graph.edges);
            let to = oe.end(&graph.edges);
            OutputRecord {
                company: edge.company.clone(),
                line: edge.line.clone(),
                from_station: graph.interner.name(from).to_string(),
                to_station: graph.interner.name(to).to_string(),
                km_a: edge.distance_km_a,
                km_b: edge.distance_km_b,
                km_c: edge.distance_km_c,
            }
        })
        .collect()
}
