use time::macros::datetime;

use super::*;

#[test]
fn format_time_zero_pads_every_field() {
    let date = datetime!(2024-01-02 03:04:05 UTC);
    assert_eq!(format_time(date), "2024-01-02 03:04:05");
}

#[test]
fn format_time_keeps_two_digit_fields() {
    let date = datetime!(2023-12-31 23:59:58 UTC);
    assert_eq!(format_time(date), "2023-12-31 23:59:58");
}

#[test]
fn format_time_uses_own_offset() {
    let date = datetime!(2024-01-02 03:04:05 +08:00);
    assert_eq!(format_time(date), "2024-01-02 03:04:05");
}

#[test]
fn format_time_drops_subseconds() {
    let date = datetime!(2024-06-07 08:09:10.999 UTC);
    assert_eq!(format_time(date), "2024-06-07 08:09:10");
}

#[test]
fn format_unix_millis_matches_local_formatting() {
    let millis = 1_704_164_645_000_i64;
    let date = OffsetDateTime::from_unix_timestamp(millis / 1000).unwrap();
    assert_eq!(format_unix_millis(millis), format_time_local(date));
}

#[test]
fn format_unix_millis_out_of_range_is_placeholder() {
    assert_eq!(format_unix_millis(i64::MAX), INVALID_TIME);
    assert_eq!(format_unix_millis(i64::MIN), INVALID_TIME);
}

#[test]
fn now_local_has_console_shape() {
    let now = now_local();
    assert_eq!(now.len(), 19);
    assert_eq!(&now[4..5], "-");
    assert_eq!(&now[10..11], " ");
    assert_eq!(&now[13..14], ":");
}
