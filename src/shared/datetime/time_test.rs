use crate::engine::errors::EngineError;
use crate::shared::datetime::time::{
    is_before_or_equal, is_fixed_time, parse_date, parse_time_of_day,
};

#[test]
fn is_before_or_equal_orders_fixed_width_times() {
    assert!(is_before_or_equal("08:00:00", "10:00:00"));
    assert!(is_before_or_equal("08:59:59", "09:00:00"));
    assert!(!is_before_or_equal("10:00:01", "10:00:00"));
    assert!(!is_before_or_equal("23:00:00", "00:59:59"));
}

#[test]
fn is_before_or_equal_is_reflexive() {
    for t in ["00:00:00", "12:34:56", "23:59:59"] {
        assert!(is_before_or_equal(t, t), "{t}");
    }
}

#[test]
fn is_before_or_equal_decides_on_first_differing_digit() {
    // later digits are larger, but the hour already decides
    assert!(is_before_or_equal("09:59:59", "10:00:00"));
    assert!(!is_before_or_equal("10:00:00", "09:59:59"));
}

#[test]
fn is_fixed_time_rejects_variable_width() {
    assert!(is_fixed_time("07:05:00"));
    assert!(!is_fixed_time("7:05:00"));
    assert!(!is_fixed_time("07:05"));
    assert!(!is_fixed_time("07-05-00"));
    assert!(!is_fixed_time("0a:05:00"));
}

#[test]
fn parse_time_of_day_validates_shape_and_range() {
    assert!(parse_time_of_day("23:59:59").is_ok());
    assert_eq!(
        parse_time_of_day("8:00:00"),
        Err(EngineError::Format {
            field: "time",
            value: "8:00:00".into(),
            expected: "hh:mm:ss",
        })
    );
    assert!(matches!(
        parse_time_of_day("24:10:00"),
        Err(EngineError::Format { .. })
    ));
}

#[test]
fn parse_date_validates_shape_and_calendar() {
    assert!(parse_date("2018-08-10").is_ok());
    assert!(parse_date("2018-8-10").is_err());
    assert!(parse_date("2018-02-30").is_err());
    assert!(parse_date("10.08.2018").is_err());
}
