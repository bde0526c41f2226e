use super::*;

#[test]
fn seconds_and_millis_convert() {
    assert_eq!(parse_time_ms("1s"), 1000.0);
    assert_eq!(parse_time_ms("500ms"), 500.0);
    assert_eq!(parse_time_ms("1.5s"), 1500.0);
    assert_eq!(parse_time_ms("0s"), 0.0);
    assert_eq!(parse_time_ms("0.25ms"), 0.25);
}

#[test]
fn unit_is_reported() {
    assert_eq!(
        parse_time("2s"),
        Some(TimeValue {
            value: 2.0,
            unit: TimeUnit::Seconds
        })
    );
    assert_eq!(
        parse_time("40ms"),
        Some(TimeValue {
            value: 40.0,
            unit: TimeUnit::Millis
        })
    );
}

#[test]
fn first_value_of_a_list_wins() {
    assert_eq!(parse_time_ms("0.3s, 1s"), 300.0);
    assert_eq!(parse_time_ms("  120ms,2s"), 120.0);
}

#[test]
fn trailing_dot_is_accepted() {
    assert_eq!(parse_time_ms("2.s"), 2000.0);
    assert_eq!(parse_time_ms("7.ms"), 7.0);
}

#[test]
fn leading_fraction_matches_from_first_digit() {
    assert_eq!(parse_time_ms(".5s"), 5000.0);
}

#[test]
fn scanning_restarts_after_a_failed_candidate() {
    assert_eq!(parse_time_ms("1.2.3s"), 2300.0);
    assert_eq!(parse_time_ms("12px 3s"), 3000.0);
}

#[test]
fn unparseable_values_fall_back_to_zero() {
    assert_eq!(parse_time_ms(""), 0.0);
    assert_eq!(parse_time_ms("none"), 0.0);
    assert_eq!(parse_time_ms("12px"), 0.0);
    assert_eq!(parse_time_ms("5m"), 0.0);
    assert!(parse_time("s").is_none());
}

#[test]
fn huge_values_do_not_leak_infinity() {
    let digits = "9".repeat(400);
    assert_eq!(parse_time_ms(&format!("{digits}s")), 0.0);
    assert!(try_parse_time_ms(&format!("{digits}s")).is_err());
}

#[test]
fn strict_parser_reports_missing_values() {
    assert_eq!(try_parse_time_ms("1s").unwrap(), 1000.0);
    let err = try_parse_time_ms("auto").unwrap_err();
    assert!(matches!(err, SettleError::Parse(_)));
    assert!(err.to_string().contains("auto"));
}
