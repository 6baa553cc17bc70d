use crate::types::*;
use crate::utils::data_structures::Matrix;

use super::accumulation_policy::AccumulationPolicy;

/// accumulates directed edges, then adds the legs of every intermediate point with two positive legs
/// onto the pair it connects. the result is mirrored (m + m^T) afterwards.
/// distances reachable over several intermediates are counted more than once, so running it
/// on its own output does not reproduce that output.
pub struct IntermediatePropagation;

impl AccumulationPolicy for IntermediatePropagation {

    fn name(&self) -> &'static str {
        "propagate"
    }

    fn accumulate(&self, num_points: usize, edges: &[IndexedEdge]) -> Matrix<Distance> {
        let mut matrix = Matrix::new(num_points, num_points, 0.0);

        for (start, end, distance) in edges {
            matrix.add_value(*start, *end, *distance);
        }

        for intermediate in 0..num_points {
            for start in 0..num_points {
                for end in 0..num_points {
                    if start == end {
                        continue;
                    }

                    let first_leg = matrix.get(start, intermediate);
                    let second_leg = matrix.get(intermediate, end);

                    if first_leg > 0.0 && second_leg > 0.0 {
                        matrix.add_value(start, end, first_leg + second_leg);
                    }
                }
            }
        }

        matrix.fill_diagonal(0.0);
        matrix.add_transposed()
    }
}
