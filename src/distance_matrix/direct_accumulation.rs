use crate::types::*;
use crate::utils::data_structures::Matrix;

use super::accumulation_policy::AccumulationPolicy;

/// adds every edge onto both directions of its pair, nothing else is derived
pub struct DirectAccumulation;

impl AccumulationPolicy for DirectAccumulation {

    fn name(&self) -> &'static str {
        "direct"
    }

    fn accumulate(&self, num_points: usize, edges: &[IndexedEdge]) -> Matrix<Distance> {
        let mut matrix = Matrix::new(num_points, num_points, 0.0);

        for (start, end, distance) in edges {
            // self loops never reach the diagonal
            if start == end {
                continue;
            }

            matrix.add_value(*start, *end, *distance);
            matrix.add_value(*end, *start, *distance);
        }

        matrix
    }
}
