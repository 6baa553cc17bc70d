use std::collections::BTreeMap;
use std::fmt::Debug;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TollError};

/// number of full days a group has to span
pub const COVERAGE_DAYS: i64 = 7;

/// year whose first iso week hosts day fields given as weekday names
const REFERENCE_WEEK_YEAR: i32 = 2024;

/// raw interval log line, day and time fields are kept as read
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntervalRecord<K> {
    pub id: K,
    pub id_2: K,
    #[serde(rename = "startDay")]
    pub start_day: String,
    #[serde(rename = "startTime")]
    pub start_time: String,
    #[serde(rename = "endDay")]
    pub end_day: String,
    #[serde(rename = "endTime")]
    pub end_time: String
}

/// all records sharing one (id, id_2) key
#[derive(Clone, Debug, PartialEq)]
pub struct IntervalGroup<K> {
    pub key: (K, K),
    pub records: Vec<IntervalRecord<K>>
}

pub type CoverageReport<K> = BTreeMap<(K, K), bool>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParsedInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime
}

/// groups the records by (id, id_2), groups come out in ascending key order
pub fn group_intervals<K: Ord + Clone>(records: Vec<IntervalRecord<K>>) -> Vec<IntervalGroup<K>> {
    let mut groups: BTreeMap<(K, K), Vec<IntervalRecord<K>>> = BTreeMap::new();

    for record in records {
        groups.entry((record.id.clone(), record.id_2.clone())).or_default().push(record);
    }

    groups.into_iter()
        .map(|(key, records)| IntervalGroup { key, records })
        .collect()
}

/// accepts an iso date (2024-01-01) or an english weekday name. weekday names are placed on the first iso week of the reference year
pub fn parse_day(value: &str) -> Result<NaiveDate> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }

    let weekday: Weekday = value.parse()
        .map_err(|_| TollError::ParseFailure(format!("'{}' is neither a date nor a weekday", value)))?;

    NaiveDate::from_isoywd_opt(REFERENCE_WEEK_YEAR, 1, weekday)
        .ok_or_else(|| TollError::ParseFailure(format!("no reference date for weekday '{}'", value)))
}

pub fn parse_time(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M:%S")
        .map_err(|error| TollError::ParseFailure(format!("'{}' is not a valid time: {}", value, error)))
}

pub fn parse_interval<K>(record: &IntervalRecord<K>) -> Result<ParsedInterval> {
    let start = NaiveDateTime::new(parse_day(&record.start_day)?, parse_time(&record.start_time)?);
    let end = NaiveDateTime::new(parse_day(&record.end_day)?, parse_time(&record.end_time)?);

    Ok(ParsedInterval {
        start,
        end
    })
}

/// true if the group spans at least seven full days, its earliest start time of day is 00:00:00 and its latest
/// end time of day is 23:59:59. end instants include their last second.
/// an empty group or any record that fails to parse gives false
pub fn is_fully_covered<K: Debug>(group: &IntervalGroup<K>) -> bool {
    let intervals = match group.records.iter().map(parse_interval).collect::<Result<Vec<ParsedInterval>>>() {
        Ok(intervals) => intervals,
        Err(error) => {
            debug!("group {:?} is treated as incomplete: {}", group.key, error);
            return false;
        }
    };

    let earliest_start = intervals.iter().map(|interval| interval.start).min();
    let latest_end = intervals.iter().map(|interval| interval.end).max();
    let first_start_time = intervals.iter().map(|interval| interval.start.time()).min();
    let last_end_time = intervals.iter().map(|interval| interval.end.time()).max();

    match (earliest_start, latest_end) {
        (Some(earliest_start), Some(latest_end)) => {
            let covered_span = latest_end - earliest_start + Duration::seconds(1);

            covered_span >= Duration::days(COVERAGE_DAYS)
                && first_start_time == NaiveTime::from_hms_opt(0, 0, 0)
                && last_end_time == NaiveTime::from_hms_opt(23, 59, 59)
        },
        _ => false
    }
}

/// evaluates every (id, id_2) group independently, groups are checked in parallel
pub fn time_check<K: Ord + Clone + Debug + Send + Sync>(records: Vec<IntervalRecord<K>>) -> CoverageReport<K> {
    let groups = group_intervals(records);

    debug!("checking time coverage of {} groups", groups.len());

    groups.par_iter()
        .map(|group| (group.key.clone(), is_fully_covered(group)))
        .collect()
}
