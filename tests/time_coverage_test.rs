use chrono::{NaiveDate, NaiveTime, Weekday, Datelike};
use toll_network::error::TollError;
use toll_network::time_coverage::{group_intervals, is_fully_covered, parse_day, parse_time, time_check, IntervalGroup, IntervalRecord};
use toll_network::types::IntervalKey;

fn record(id: IntervalKey, id_2: IntervalKey, start: (&str, &str), end: (&str, &str)) -> IntervalRecord<IntervalKey> {
    IntervalRecord {
        id,
        id_2,
        start_day: String::from(start.0),
        start_time: String::from(start.1),
        end_day: String::from(end.0),
        end_time: String::from(end.1)
    }
}

fn group(records: Vec<IntervalRecord<IntervalKey>>) -> IntervalGroup<IntervalKey> {
    IntervalGroup { key: (records[0].id, records[0].id_2), records }
}

// monday 00:00:00 until the following sunday 23:59:59
fn get_full_week() -> Vec<IntervalRecord<IntervalKey>> {
    vec![
        record(1040000, -1, ("Monday", "00:00:00"), ("Friday", "23:59:59")),
        record(1040000, -1, ("Saturday", "00:00:00"), ("Sunday", "23:59:59")),
    ]
}

#[test]
fn test_full_week_is_covered() {
    assert!(is_fully_covered(&group(get_full_week())));
}

#[test]
fn test_full_week_with_dates_is_covered() {
    let records = vec![
        record(1, 2, ("2024-03-04", "00:00:00"), ("2024-03-06", "12:00:00")),
        record(1, 2, ("2024-03-06", "12:00:01"), ("2024-03-10", "23:59:59")),
    ];

    assert!(is_fully_covered(&group(records)));
}

#[test]
fn test_missing_weekend_is_not_covered() {
    let mut records = get_full_week();
    records.pop();

    assert!(!is_fully_covered(&group(records)));
}

#[test]
fn test_late_first_start_is_not_covered() {
    let records = vec![
        record(1, 2, ("2024-03-04", "00:00:05"), ("2024-03-08", "23:59:59")),
        record(1, 2, ("2024-03-09", "00:00:10"), ("2024-03-11", "23:59:59")),
    ];

    assert!(!is_fully_covered(&group(records)));
}

#[test]
fn test_early_last_end_is_not_covered() {
    let records = vec![
        record(1, 2, ("2024-03-04", "00:00:00"), ("2024-03-11", "23:59:58")),
    ];

    assert!(!is_fully_covered(&group(records)));
}

#[test]
fn test_unparsable_record_is_not_covered() {
    let mut records = get_full_week();
    records.push(record(1040000, -1, ("Wednesday", "25:00:00"), ("Wednesday", "26:00:00")));

    assert!(!is_fully_covered(&group(records)));
}

#[test]
fn test_time_check_report() {
    let mut records = get_full_week();
    records.push(record(1030000, 1040000, ("Monday", "05:00:00"), ("Wednesday", "10:00:00")));
    records.push(record(1050000, 1060000, ("Someday", "00:00:00"), ("Sunday", "23:59:59")));

    let report = time_check(records);
    let keys: Vec<(IntervalKey, IntervalKey)> = report.keys().cloned().collect();

    assert_eq!(keys, vec![(1030000, 1040000), (1040000, -1), (1050000, 1060000)]);
    assert_eq!(report[&(1040000, -1)], true);
    assert_eq!(report[&(1030000, 1040000)], false);
    assert_eq!(report[&(1050000, 1060000)], false);
}

#[test]
fn test_group_intervals() {
    let records = vec![
        record(2, 1, ("Monday", "00:00:00"), ("Monday", "01:00:00")),
        record(1, 1, ("Monday", "00:00:00"), ("Monday", "01:00:00")),
        record(2, 1, ("Tuesday", "00:00:00"), ("Tuesday", "01:00:00")),
    ];
    let groups = group_intervals(records);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].key, (1, 1));
    assert_eq!(groups[1].key, (2, 1));
    assert_eq!(groups[1].records.len(), 2);
}

#[test]
fn test_parse_day() {
    let monday = parse_day("Monday").unwrap();
    assert_eq!(monday.weekday(), Weekday::Mon);
    assert_eq!(parse_day("sunday").unwrap().signed_duration_since(monday).num_days(), 6);
    assert_eq!(parse_day(" 2023-12-31 ").unwrap(), NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
    assert!(matches!(parse_day("31/12/2023"), Err(TollError::ParseFailure(_))));
}

#[test]
fn test_parse_time() {
    assert_eq!(parse_time("23:59:59").unwrap(), NaiveTime::from_hms_opt(23, 59, 59).unwrap());
    assert!(matches!(parse_time("12:00"), Err(TollError::ParseFailure(_))));
}
