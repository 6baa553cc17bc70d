use std::fmt::Debug;

use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::distance_matrix::distance_table::DistanceMatrix;
use crate::edge_set::EdgeSet;
use crate::error::{Result, TollError};
use crate::types::Distance;
use crate::utils::data_structures::Matrix;

/// long format entry of a distance table, never a self pair
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnrolledRow<P> {
    pub id_start: P,
    pub id_end: P,
    pub distance: Distance
}

/// flattens the table into one row per ordered pair of distinct points.
/// rows follow the sorted point axis in row major order, so repeated calls give identical output
pub fn unroll_distance_matrix<P: Ord + Clone + Debug>(matrix: &DistanceMatrix<P>) -> Vec<UnrolledRow<P>> {
    let points = matrix.points();

    let rows: Vec<UnrolledRow<P>> = (0..points.len())
        .cartesian_product(0..points.len())
        .filter(|(row, col)| row != col)
        .map(|(row, col)| UnrolledRow {
            id_start: points[row].clone(),
            id_end: points[col].clone(),
            distance: matrix.get_by_index(row, col)
        })
        .collect();

    debug!("unrolled {} points into {} rows", points.len(), rows.len());

    rows
}

/// fails on the first self pair or negative / non finite distance
pub fn validate_unrolled_rows<P: Debug + PartialEq>(rows: &[UnrolledRow<P>]) -> Result<()> {
    for row in rows {
        if row.id_start == row.id_end {
            return Err(TollError::InvalidInput(format!("row from {:?} to itself", row.id_start)));
        }

        if !row.distance.is_finite() || row.distance < 0.0 {
            return Err(TollError::InvalidInput(format!(
                "row from {:?} to {:?} has invalid distance {}", row.id_start, row.id_end, row.distance
            )));
        }
    }

    Ok(())
}

/// inverse of the unroll: sums rows sharing (id_start, id_end) into that single directed cell
pub fn reaggregate_distance_matrix<P: Ord + Clone + Debug>(rows: &[UnrolledRow<P>]) -> Result<DistanceMatrix<P>> {
    validate_unrolled_rows(rows)?;

    let edge_set = EdgeSet::from_triples(rows.iter().map(|row| (row.id_start.clone(), row.id_end.clone(), row.distance)));

    let points = edge_set.points();
    let mut distances = Matrix::new(points.len(), points.len(), 0.0);

    for (start, end, distance) in edge_set.indexed_edges(&points)? {
        distances.add_value(start, end, distance);
    }

    DistanceMatrix::from_parts(points, distances)
}
