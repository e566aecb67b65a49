//! The edge model: an immutable undirected railway segment with three
//! alternative weights, plus the output-only direction tag.

use crate::config::WeightKind;
use crate::interner::StationId;
use serde::{Deserialize, Serialize};

/// Dense index into the loaded edge array.
pub type EdgeId = usize;

/// An immutable undirected edge between two stations.
///
/// `station1`/`station2` are ordered only by input convention; the edge
/// itself is undirected. Parallel edges between the same pair of stations
/// are permitted and remain distinct `Edge` values with distinct ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Operating company, an opaque label carried through to output.
    pub company: String,
    /// Line name, an opaque label carried through to output.
    pub line: String,
    /// One endpoint.
    pub station1: StationId,
    /// The other endpoint.
    pub station2: StationId,
    /// Operational kilometrage (営業キロ).
    pub distance_km_a: u32,
    /// Fare-calculation kilometrage (運賃計算キロ).
    pub distance_km_b: u32,
    /// Effective-ridable kilometrage (実乗可能粁程).
    pub distance_km_c: u32,
}

impl Edge {
    /// Project this edge's weight according to the run's `WeightKind`.
    pub fn weight(&self, kind: WeightKind) -> u32 {
        match kind {
            WeightKind::Operational => self.distance_km_a,
            WeightKind::Fare => self.distance_km_b,
            WeightKind::Effective => self.distance_km_c,
        }
    }
}

/// The direction an edge is traversed in the extracted trail.
///
/// This is output metadata, not a modeling attribute: the edge's graph
/// identity stays undirected, and the direction is attached to the
/// *oriented* view produced during path extraction rather than mutating the
/// `Edge` itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Traversed from `station1` to `station2`.
    OneToTwo,
    /// Traversed from `station2` to `station1`.
    TwoToOne,
}

impl Direction {
    /// The reverse of this direction.
    pub fn flipped(self) -> Direction {
        match self {
            Direction::OneToTwo => Direction::TwoToOne,
            Direction::TwoToOne => Direction::OneToTwo,
        }
    }
}

/// An edge together with the direction it is traversed in the trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrientedEdge {
    pub edge_id: EdgeId,
    pub direction: Direction,
}

impl OrientedEdge {
    pub fn new(edge_id: EdgeId, direction: Direction) -> Self {
        Self { edge_id, direction }
    }

    /// The station this oriented edge starts at.
    pub fn start(&self, edges: &[Edge]) -> StationId {
        let edge = &edges[self.edge_id];
        match self.direction {
            Direction::OneToTwo => edge.station1,
            Direction::TwoToOne => edge.station2,
        }
    }

    /// The station this oriented edge ends at.
    pub fn end(&self, edges: &[Edge]) -> StationId {
        let edge = &edges[self.edge_id];
        match self.direction {
            Direction::OneToTwo => edge.station2,
            Direction::TwoToOne => edge.station1,
        }
    }

    /// The same edge, traversed the other way.
    pub fn reversed(&self) -> OrientedEdge {
        OrientedEdge::new(self.edge_id, self.direction.flipped())
    }
}

/// Reverse an ordered trail: reverse the edge order and flip each edge's
/// direction, so the result still reads start-to-end consistently.
pub fn reverse_path(path: &[OrientedEdge]) -> Vec<OrientedEdge> {
    path.iter().rev().map(|e| e.reversed()).collect()
}
