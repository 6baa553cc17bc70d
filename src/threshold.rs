use std::collections::BTreeMap;
use std::fmt::Debug;
use std::str::FromStr;

use itertools::Itertools;
use log::debug;

use crate::error::{Result, TollError};
use crate::types::Distance;
use crate::unroll::UnrolledRow;

/// decides what is compared against the band
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThresholdMode {
    /// every single row distance is tested, an id qualifies as soon as one of its rows is inside
    Row,
    /// the mean distance of each id_start is tested
    CandidateMean
}

impl FromStr for ThresholdMode {

    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value {
            "row" => Ok(ThresholdMode::Row),
            "candidate-mean" => Ok(ThresholdMode::CandidateMean),
            _ => Err(format!("unknown threshold mode '{}', expected 'row' or 'candidate-mean'", value))
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThresholdConfig {
    /// half width of the band in percent of the reference mean
    pub percentage: f64,
    pub mode: ThresholdMode
}

impl Default for ThresholdConfig {

    fn default() -> Self {
        ThresholdConfig {
            percentage: 10.0,
            mode: ThresholdMode::Row
        }
    }
}

/// inclusive acceptance interval around a reference value
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThresholdBand {
    pub lower: Distance,
    pub upper: Distance
}

impl ThresholdBand {

    pub fn around(reference: Distance, percentage: f64) -> Self {
        let ratio = percentage / 100.0;

        ThresholdBand {
            lower: reference * (1.0 - ratio),
            upper: reference * (1.0 + ratio)
        }
    }

    pub fn contains(&self, distance: Distance) -> bool {
        distance >= self.lower && distance <= self.upper
    }
}

/// mean distance over all rows starting at the given id, None if there are no such rows
pub fn mean_distance<P: PartialEq>(rows: &[UnrolledRow<P>], id_start: &P) -> Option<Distance> {
    let (sum, count) = rows.iter()
        .filter(|row| row.id_start == *id_start)
        .fold((0.0, 0usize), |(sum, count), row| (sum + row.distance, count + 1));

    if count == 0 {
        return None;
    }

    Some(sum / count as Distance)
}

/// ids whose row distances lie within 10% of the reference's mean distance
pub fn find_ids_within_ten_percentage_threshold<P: Ord + Clone + Debug>(rows: &[UnrolledRow<P>], reference_id: &P) -> Result<Vec<P>> {
    find_ids_within_threshold(rows, reference_id, &ThresholdConfig::default())
}

/// returns the sorted, duplicate free id_start values accepted by the band around the reference's mean distance
pub fn find_ids_within_threshold<P: Ord + Clone + Debug>(rows: &[UnrolledRow<P>], reference_id: &P, config: &ThresholdConfig) -> Result<Vec<P>> {
    if !config.percentage.is_finite() || config.percentage < 0.0 {
        return Err(TollError::InvalidInput(format!("threshold percentage {} must be a non negative number", config.percentage)));
    }

    let reference_mean = mean_distance(rows, reference_id)
        .ok_or_else(|| TollError::ReferenceNotFound(format!("{:?}", reference_id)))?;
    let band = ThresholdBand::around(reference_mean, config.percentage);

    debug!("reference {:?} has mean distance {}, accepting [{}, {}]", reference_id, reference_mean, band.lower, band.upper);

    let ids: Vec<P> = match config.mode {
        ThresholdMode::Row => rows.iter()
            .filter(|row| band.contains(row.distance))
            .map(|row| row.id_start.clone())
            .sorted()
            .dedup()
            .collect(),
        ThresholdMode::CandidateMean => {
            let mut totals: BTreeMap<P, (Distance, usize)> = BTreeMap::new();

            for row in rows {
                let (sum, count) = totals.entry(row.id_start.clone()).or_insert((0.0, 0));
                *sum += row.distance;
                *count += 1;
            }

            totals.into_iter()
                .filter(|(_, (sum, count))| band.contains(*sum / *count as Distance))
                .map(|(id, _)| id)
                .collect()
        }
    };

    Ok(ids)
}
