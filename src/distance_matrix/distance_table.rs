use std::fmt::Debug;

use log::debug;

use crate::edge_set::EdgeSet;
use crate::error::{Result, TollError};
use crate::types::Distance;
use crate::utils::data_structures::Matrix;

use super::accumulation_policy::AccumulationPolicy;
use super::direct_accumulation::DirectAccumulation;

/// dense symmetric distance table over all points of an edge set.
/// the point axis is sorted ascending, rows and columns share it
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix<P> {
    points: Vec<P>,
    distances: Matrix<Distance>
}

impl<P: Ord + Clone + Debug> DistanceMatrix<P> {

    /// builds the table by direct accumulation of the edges
    pub fn from_edges(edge_set: &EdgeSet<P>) -> Result<Self> {
        Self::from_edges_with_policy(edge_set, &DirectAccumulation)
    }

    pub fn from_edges_with_policy(edge_set: &EdgeSet<P>, policy: &dyn AccumulationPolicy) -> Result<Self> {
        edge_set.validate()?;

        let points = edge_set.points();
        let edges = edge_set.indexed_edges(&points)?;
        let distances = policy.accumulate(points.len(), &edges);

        debug!("{} accumulation built a {}x{} distance matrix from {} edges", policy.name(), points.len(), points.len(), edges.len());

        Self::from_parts(points, distances)
    }

    /// checks every table invariant: strictly ascending points, square shape matching the points,
    /// finite non negative entries, zero diagonal and symmetry
    pub fn from_parts(points: Vec<P>, distances: Matrix<Distance>) -> Result<Self> {
        let num_points = points.len();

        if let Some(window) = points.windows(2).find(|window| window[0] >= window[1]) {
            return Err(TollError::InvalidInput(format!("point axis is not strictly ascending at {:?}, {:?}", window[0], window[1])));
        }

        if distances.rows() != num_points || distances.cols() != num_points {
            return Err(TollError::InvalidInput(format!(
                "distance table is {}x{} but {} points are given", distances.rows(), distances.cols(), num_points
            )));
        }

        for row in 0..num_points {
            for col in 0..num_points {
                let distance = distances.get(row, col);

                if !distance.is_finite() || distance < 0.0 {
                    return Err(TollError::InvalidInput(format!("distance from {:?} to {:?} is {}", points[row], points[col], distance)));
                }
            }

            if distances.get(row, row) != 0.0 {
                return Err(TollError::InvalidInput(format!("distance from {:?} to itself is not zero", points[row])));
            }
        }

        if !distances.is_symmetric() {
            return Err(TollError::InvalidInput(String::from("distance table is not symmetric")));
        }

        Ok(DistanceMatrix {
            points,
            distances
        })
    }

    pub fn points(&self) -> &[P] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn distances(&self) -> &Matrix<Distance> {
        &self.distances
    }

    pub fn index_of(&self, point: &P) -> Option<usize> {
        self.points.binary_search(point).ok()
    }

    pub fn get(&self, start: &P, end: &P) -> Option<Distance> {
        let row = self.index_of(start)?;
        let col = self.index_of(end)?;

        Some(self.distances.get(row, col))
    }

    pub fn get_by_index(&self, row: usize, col: usize) -> Distance {
        self.distances.get(row, col)
    }
}
