use serde::{Deserialize, Serialize};

use crate::types::Distance;
use crate::unroll::UnrolledRow;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VehicleClass {
    Moto,
    Car,
    Rv,
    Bus,
    Truck
}

impl VehicleClass {

    pub const ALL: [VehicleClass; 5] = [VehicleClass::Moto, VehicleClass::Car, VehicleClass::Rv, VehicleClass::Bus, VehicleClass::Truck];

    /// rate per unit of distance
    pub fn multiplier(&self) -> f64 {
        match self {
            VehicleClass::Moto => 0.8,
            VehicleClass::Car => 1.2,
            VehicleClass::Rv => 1.5,
            VehicleClass::Bus => 2.2,
            VehicleClass::Truck => 3.6
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            VehicleClass::Moto => "moto",
            VehicleClass::Car => "car",
            VehicleClass::Rv => "rv",
            VehicleClass::Bus => "bus",
            VehicleClass::Truck => "truck"
        }
    }
}

/// unrolled row with the distance replaced by one toll rate per vehicle class
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RateRow<P> {
    pub id_start: P,
    pub id_end: P,
    pub moto: f64,
    pub car: f64,
    pub rv: f64,
    pub bus: f64,
    pub truck: f64
}

impl<P> RateRow<P> {

    pub fn rate(&self, vehicle_class: VehicleClass) -> f64 {
        match vehicle_class {
            VehicleClass::Moto => self.moto,
            VehicleClass::Car => self.car,
            VehicleClass::Rv => self.rv,
            VehicleClass::Bus => self.bus,
            VehicleClass::Truck => self.truck
        }
    }
}

/// mean rate of one vehicle class over all rows, None without rows
pub fn mean_rate<P>(rates: &[RateRow<P>], vehicle_class: VehicleClass) -> Option<f64> {
    if rates.is_empty() {
        return None;
    }

    Some(rates.iter().map(|rate| rate.rate(vehicle_class)).sum::<f64>() / rates.len() as f64)
}

pub fn round_to_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn toll_rate(distance: Distance, vehicle_class: VehicleClass) -> f64 {
    round_to_one_decimal(distance * vehicle_class.multiplier())
}

pub fn calculate_toll_rates<P: Clone>(rows: &[UnrolledRow<P>]) -> Vec<RateRow<P>> {
    rows.iter()
        .map(|row| RateRow {
            id_start: row.id_start.clone(),
            id_end: row.id_end.clone(),
            moto: toll_rate(row.distance, VehicleClass::Moto),
            car: toll_rate(row.distance, VehicleClass::Car),
            rv: toll_rate(row.distance, VehicleClass::Rv),
            bus: toll_rate(row.distance, VehicleClass::Bus),
            truck: toll_rate(row.distance, VehicleClass::Truck)
        })
        .collect()
}
