use chrono::{TimeZone, Utc};
use petrol_news::dates::{normalize_date, parse_date, parse_first, sort_key, to_iso_utc};

#[test]
fn test_parses_rfc2822_gmt() {
    let dt = parse_date("Mon, 01 Jan 2024 10:00:00 GMT").expect("should parse");
    assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap());
}

#[test]
fn test_converts_offsets_to_utc() {
    let dt = parse_date("Tue, 02 Jan 2024 08:30:00 +0530").expect("should parse");
    assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 2, 3, 0, 0).unwrap());

    let dt = parse_date("2024-01-02T08:30:00-05:00").expect("should parse");
    assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 2, 13, 30, 0).unwrap());
}

#[test]
fn test_zone_less_dates_are_utc() {
    let dt = parse_date("Mon, 01 Jan 2024 10:00:00").expect("should parse");
    assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap());

    let dt = parse_date("2024-03-05 07:15:00").expect("should parse");
    assert_eq!(dt, Utc.with_ymd_and_hms(2024, 3, 5, 7, 15, 0).unwrap());
}

#[test]
fn test_wrong_weekday_is_ignored() {
    // 1 Jan 2024 was a Monday
    let dt = parse_date("Fri, 01 Jan 2024 10:00:00 GMT").expect("should parse");
    assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap());
}

#[test]
fn test_garbage_does_not_parse() {
    assert_eq!(parse_date(""), None);
    assert_eq!(parse_date("   "), None);
    assert_eq!(parse_date("yesterday-ish"), None);
    assert_eq!(parse_date("Mon, 99 Foo 2024 25:61:00 GMT"), None);
}

#[test]
fn test_candidates_tried_in_order() {
    let published = "Mon, 01 Jan 2024 10:00:00 GMT";
    let updated = "Tue, 02 Jan 2024 10:00:00 GMT";

    let dt = parse_first([Some(published), Some(updated)]).unwrap();
    assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap());

    // Malformed first candidate falls through to the next one
    let dt = parse_first([Some("not a date"), Some(updated)]).unwrap();
    assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 2, 10, 0, 0).unwrap());

    let dt = parse_first([None, Some(updated)]).unwrap();
    assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 2, 10, 0, 0).unwrap());
}

#[test]
fn test_fallback_is_now() {
    let before = Utc::now();
    let dt = normalize_date([None, Some("32/13/2024")]);
    let after = Utc::now();

    assert!(dt >= before && dt <= after, "fallback {} not within [{}, {}]", dt, before, after);
}

#[test]
fn test_iso_and_sort_key() {
    let dt = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
    assert_eq!(to_iso_utc(&dt), "2024-01-01T10:00:00+00:00");
    assert_eq!(sort_key(&dt), 1_704_103_200.0);

    let with_fraction = dt + chrono::Duration::microseconds(250_000);
    assert_eq!(to_iso_utc(&with_fraction), "2024-01-01T10:00:00.250000+00:00");
    assert_eq!(sort_key(&with_fraction), 1_704_103_200.25);
}
