pub mod types;
pub mod error;

pub mod edge_set;
pub mod distance_matrix;
pub mod unroll;
pub mod threshold;
pub mod toll_rates;
pub mod time_coverage;

pub mod utils;
