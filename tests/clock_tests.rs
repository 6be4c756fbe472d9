use chrono::{TimeZone, Utc};
use rinkboard::core::clock::{
    DisplayFormat, belgrade_date, belgrade_offset_minutes, display_iso, local_to_utc_iso,
    local_wall_clock_to_utc, parse_utc, to_local_input, to_zoned_display,
};

#[test]
fn test_summer_local_time_to_utc() {
    let utc = local_wall_clock_to_utc("2024-06-15T18:30").unwrap();
    assert_eq!(utc, Utc.with_ymd_and_hms(2024, 6, 15, 16, 30, 0).unwrap());
}

#[test]
fn test_winter_local_time_to_utc() {
    let utc = local_wall_clock_to_utc("2024-01-20 18:30").unwrap();
    assert_eq!(utc, Utc.with_ymd_and_hms(2024, 1, 20, 17, 30, 0).unwrap());
}

#[test]
fn test_round_trip_to_the_minute() {
    for local in ["2024-01-05T09:15", "2024-07-31T23:59", "2024-12-31T00:00"] {
        let utc = local_wall_clock_to_utc(local).unwrap();
        assert_eq!(to_local_input(utc), local);
    }
}

#[test]
fn test_seconds_are_accepted_and_subseconds_dropped() {
    let utc = local_wall_clock_to_utc("2024-06-15T18:30:45.750").unwrap();
    assert_eq!(utc, Utc.with_ymd_and_hms(2024, 6, 15, 16, 30, 45).unwrap());
}

#[test]
fn test_spring_gap_lands_after_the_gap() {
    let utc = local_wall_clock_to_utc("2024-03-31T02:30").unwrap();
    assert_eq!(utc, Utc.with_ymd_and_hms(2024, 3, 31, 1, 30, 0).unwrap());
    assert_eq!(to_zoned_display(utc, "en", &DisplayFormat::Time), "03:30");
}

#[test]
fn test_autumn_overlap_resolves_to_standard_time() {
    let utc = local_wall_clock_to_utc("2024-10-27T02:30").unwrap();
    assert_eq!(utc, Utc.with_ymd_and_hms(2024, 10, 27, 1, 30, 0).unwrap());
    assert_eq!(belgrade_offset_minutes(utc), 60);
}

#[test]
fn test_times_next_to_switch_convert_normally() {
    // one minute before the spring switch, still CET
    let before = local_wall_clock_to_utc("2024-03-31T01:59").unwrap();
    assert_eq!(before, Utc.with_ymd_and_hms(2024, 3, 31, 0, 59, 0).unwrap());

    // first minute of CEST
    let after = local_wall_clock_to_utc("2024-03-31T03:00").unwrap();
    assert_eq!(after, Utc.with_ymd_and_hms(2024, 3, 31, 1, 0, 0).unwrap());
}

#[test]
fn test_impossible_or_garbage_input_is_none() {
    assert!(local_wall_clock_to_utc("2024-02-30T10:00").is_none());
    assert!(local_wall_clock_to_utc("2024-06-15T25:00").is_none());
    assert!(local_wall_clock_to_utc("tomorrow evening").is_none());
    assert!(local_wall_clock_to_utc("").is_none());
}

#[test]
fn test_offsets_across_the_year() {
    assert_eq!(
        belgrade_offset_minutes(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()),
        60
    );
    assert_eq!(
        belgrade_offset_minutes(Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap()),
        120
    );
}

#[test]
fn test_localized_display() {
    let utc = Utc.with_ymd_and_hms(2024, 6, 15, 16, 30, 0).unwrap();

    let en = to_zoned_display(utc, "en", &DisplayFormat::DateTime);
    assert!(en.contains("June"), "got {en}");
    assert!(en.contains("18:30"), "got {en}");

    let ru = to_zoned_display(utc, "ru", &DisplayFormat::Date);
    assert!(ru.contains("2024"), "got {ru}");
    assert!(!ru.contains("June"), "got {ru}");

    let custom = to_zoned_display(utc, "en", &DisplayFormat::Pattern("%d.%m.%Y. %H:%M".into()));
    assert_eq!(custom, "15.06.2024. 18:30");
}

#[test]
fn test_display_iso_is_empty_for_missing_or_bad_input() {
    assert_eq!(display_iso(None, "en", &DisplayFormat::Time), "");
    assert_eq!(display_iso(Some("not a date"), "en", &DisplayFormat::Time), "");
    assert_eq!(
        display_iso(Some("2024-06-15T16:30:00Z"), "en", &DisplayFormat::Time),
        "18:30"
    );
}

#[test]
fn test_unknown_pattern_specifier_renders_empty() {
    let utc = parse_utc("2024-06-15T16:30:00Z").unwrap();
    let bad = DisplayFormat::Pattern("%H:%M %Q".into());
    assert!(!bad.is_valid());
    assert_eq!(to_zoned_display(utc, "en", &bad), "");
    assert_eq!(display_iso(Some("2024-06-15T16:30:00Z"), "sr", &bad), "");

    let good = DisplayFormat::Pattern("%d.%m.%Y %H:%M".into());
    assert!(good.is_valid());
    assert_eq!(to_zoned_display(utc, "en", &good), "15.06.2024 18:30");
}

#[test]
fn test_reading_at_edge_of_calendar_range_is_none() {
    assert!(local_wall_clock_to_utc("-262143-01-01T00:30").is_none());
    assert!(local_to_utc_iso("-262143-01-01T00:30").is_none());
}

#[test]
fn test_late_evening_utc_is_next_belgrade_day() {
    let utc = parse_utc("2024-06-15T22:30:00Z").unwrap();
    assert_eq!(belgrade_date(utc).to_string(), "2024-06-16");
}

#[test]
fn test_storage_form_is_rfc3339_utc() {
    let iso = local_to_utc_iso("2024-06-15T18:30").unwrap();
    assert_eq!(parse_utc(&iso), local_wall_clock_to_utc("2024-06-15T18:30"));
    assert!(iso.starts_with("2024-06-15T16:30:00"));
}

#[test]
fn test_gap_resolution_is_a_fixed_point() {
    let first = local_wall_clock_to_utc("2024-03-31T02:30").unwrap();
    let shown = to_local_input(first);
    assert_eq!(shown, "2024-03-31T03:30");

    let again = local_wall_clock_to_utc(&shown).unwrap();
    assert_eq!(again, first);
    assert_eq!(belgrade_offset_minutes(again), belgrade_offset_minutes(first));
}
