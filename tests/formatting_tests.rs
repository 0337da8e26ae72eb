use ctxtree::models::TimeUnit;
use ctxtree::utils::formatting::{describe_time, mins2readable, pad_right};
use ctxtree::utils::time::{format_timestamp, parse_timestamp, round_to};

#[test]
fn test_mins2readable() {
    assert_eq!(mins2readable(155.5, false), "02h 36m");
    assert_eq!(mins2readable(20.0, true), "00:20");
    assert_eq!(mins2readable(-75.0, true), "-01:15");
}

#[test]
fn test_describe_time_per_unit() {
    assert_eq!(describe_time(90.0, "minute"), "01h 30m");
    assert_eq!(describe_time(1.5, "hour"), "01h 30m");
    assert_eq!(describe_time(5400.0, "second"), "01h 30m");
    assert_eq!(describe_time(3.0, "fortnight"), "3 fortnight");
}

#[test]
fn test_round_to_half_away_from_zero() {
    assert_eq!(round_to(0.125, 2), 0.13);
    assert_eq!(round_to(-0.125, 2), -0.13);
    assert_eq!(round_to(1.26, 1), 1.3);
}

#[test]
fn test_timestamp_format_is_strict() {
    let ts = parse_timestamp("2024-02-29T01:16:54Z").unwrap();
    assert_eq!(format_timestamp(&ts), "2024-02-29T01:16:54Z");
    assert!(parse_timestamp("2024-02-29T01:16:54.5Z").is_none());
    assert!(parse_timestamp("2024-02-29 01:16:54").is_none());
    assert!(parse_timestamp("").is_none());
    assert!(parse_timestamp("2024-2-29T1:0:0Z").is_none());
    assert!(parse_timestamp(" 2024-02-29T01:00:00Z").is_none());
    assert!(parse_timestamp("+2024-02-29T01:00:00Z").is_none());
    assert!(parse_timestamp("2024-02-29T9:00:00Z").is_none());
}

#[test]
fn test_time_unit_parsing() {
    assert_eq!("Minutes".parse::<TimeUnit>().unwrap(), TimeUnit::Minute);
    assert_eq!("h".parse::<TimeUnit>().unwrap(), TimeUnit::Hour);
    assert!("days".parse::<TimeUnit>().is_err());
}

#[test]
fn test_pad_right_uses_display_width() {
    assert_eq!(pad_right("ab", 4), "ab  ");
    assert_eq!(pad_right("日本", 5), "日本 ");
    assert_eq!(pad_right("toolong", 3), "toolong");
}
