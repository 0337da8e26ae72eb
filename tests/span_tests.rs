mod common;
use common::{now, ts};
use ctxtree::core::calculator::span::{Span, time_diff};
use ctxtree::models::{Diagnostic, TimeUnit, TimestampField};

#[test]
fn test_closed_span_in_minutes() {
    let t = time_diff("1", "2024-02-29T01:30:00Z", "2024-02-29T01:45:30Z", now()).unwrap();
    assert_eq!(t.time, 15.5);
    assert_eq!(t.unit, "minute");
}

#[test]
fn test_open_span_ends_at_evaluation_instant() {
    let t = time_diff("1", "2024-02-29T01:00:00Z", "", now()).unwrap();
    assert_eq!(t.time, 120.0);

    let later = time_diff("1", "2024-02-29T01:00:00Z", "", ts("2024-02-29T04:00:00Z")).unwrap();
    assert_eq!(later.time, 180.0);
}

#[test]
fn test_span_rounded_to_two_decimals() {
    // 20 seconds = 0.333... minutes
    let t = time_diff("1", "2024-02-29T01:00:00Z", "2024-02-29T01:00:20Z", now()).unwrap();
    assert_eq!(t.time, 0.33);
}

#[test]
fn test_span_in_other_units() {
    let span = Span::parse("1", "2024-02-29T01:00:00Z", "2024-02-29T02:30:00Z").unwrap();
    assert_eq!(span.elapsed(now(), TimeUnit::Hour, 2).time, 1.5);
    assert_eq!(span.elapsed(now(), TimeUnit::Second, 2).time, 5400.0);
    assert_eq!(span.elapsed(now(), TimeUnit::Hour, 2).unit, "hour");
}

#[test]
fn test_malformed_created_is_reported() {
    let err = time_diff("bad", "2024/02/29 01:00", "", now()).unwrap_err();
    assert_eq!(
        err,
        Diagnostic::MalformedTimestamp {
            context_id: "bad".into(),
            field: TimestampField::Created,
            value: "2024/02/29 01:00".into(),
        }
    );
}

#[test]
fn test_malformed_completed_is_reported() {
    let err = time_diff("x", "2024-02-29T01:00:00Z", "2024-02-29T01:00:00.123Z", now())
        .unwrap_err();
    match err {
        Diagnostic::MalformedTimestamp { field, .. } => {
            assert_eq!(field, TimestampField::Completed)
        }
        other => panic!("unexpected diagnostic: {other:?}"),
    }
}
