use itertools::Itertools;

use crate::error::{Result, TollError};
use crate::types::*;
use crate::utils::data_structures::Matrix;

use super::direct_accumulation::DirectAccumulation;
use super::intermediate_propagation::IntermediatePropagation;

/// an accumulation policy turns edges (given as positions on the sorted point axis) into a dense distance table
pub trait AccumulationPolicy {

    /// unique name used to select the policy
    fn name(&self) -> &'static str;

    /// build a num_points x num_points table. the result has to be symmetric with a zero diagonal
    fn accumulate(&self, num_points: usize, edges: &[IndexedEdge]) -> Matrix<Distance>;
}

pub fn all_policies() -> Vec<Box<dyn AccumulationPolicy>> {
    vec![
        Box::new(DirectAccumulation),
        Box::new(IntermediatePropagation),
    ]
}

pub fn policy_by_name(name: &str) -> Result<Box<dyn AccumulationPolicy>> {
    let policies = all_policies();
    let available = policies.iter().map(|policy| policy.name()).join(", ");

    policies.into_iter()
        .find(|policy| policy.name() == name)
        .ok_or_else(|| TollError::InvalidInput(format!("unknown accumulation policy '{}', expected one of: {}", name, available)))
}
