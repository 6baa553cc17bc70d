use std::fmt::Debug;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TollError};
use crate::types::{Distance, IndexedEdge};

/// a known road-segment distance between two toll points
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge<P> {
    pub id_start: P,
    pub id_end: P,
    pub distance: Distance
}

impl<P> Edge<P> {

    pub fn new(id_start: P, id_end: P, distance: Distance) -> Self {
        Edge {
            id_start,
            id_end,
            distance
        }
    }
}

/// sparse, unordered collection of edges. repeated (start, end) pairs are kept, their distances add up
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeSet<P> {
    edges: Vec<Edge<P>>
}

impl<P: Ord + Clone + Debug> EdgeSet<P> {

    pub fn new(edges: Vec<Edge<P>>) -> Self {
        EdgeSet {
            edges
        }
    }

    pub fn from_triples(triples: impl IntoIterator<Item = (P, P, Distance)>) -> Self {
        EdgeSet::new(triples.into_iter().map(|(id_start, id_end, distance)| Edge::new(id_start, id_end, distance)).collect())
    }

    pub fn edges(&self) -> &[Edge<P>] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// returns every point referenced by a start or end id, sorted ascending and without duplicates
    pub fn points(&self) -> Vec<P> {
        self.edges.iter()
            .flat_map(|edge| [edge.id_start.clone(), edge.id_end.clone()])
            .sorted()
            .dedup()
            .collect()
    }

    /// fails on the first edge with a negative or non finite distance
    pub fn validate(&self) -> Result<()> {
        match self.edges.iter().find(|edge| !edge.distance.is_finite() || edge.distance < 0.0) {
            Some(edge) => Err(TollError::InvalidInput(format!(
                "edge from {:?} to {:?} has invalid distance {}", edge.id_start, edge.id_end, edge.distance
            ))),
            None => Ok(())
        }
    }

    /// translates every edge onto positions of the given sorted point axis
    pub fn indexed_edges(&self, points: &[P]) -> Result<Vec<IndexedEdge>> {
        self.edges.iter()
            .map(|edge| {
                let start = position_of(points, &edge.id_start)?;
                let end = position_of(points, &edge.id_end)?;

                Ok((start, end, edge.distance))
            })
            .collect()
    }
}

fn position_of<P: Ord + Debug>(points: &[P], point: &P) -> Result<usize> {
    points.binary_search(point).map_err(|_| TollError::InvalidInput(format!("point {:?} is missing from the point axis", point)))
}
