pub mod accumulation_policy;
pub mod distance_table;

pub mod direct_accumulation;
pub mod intermediate_propagation;
