use crate::engine::aggregate::RankedEntry;
use crate::engine::context::EngineContext;
use crate::engine::errors::EngineError;
use crate::engine::query::StrikeDayDetector;
use crate::test_helpers::factories::FlightFactory;

fn fr(status: &str, date: &str) -> FlightFactory {
    FlightFactory::new()
        .with("iata_code", "FR")
        .with("flight_status", status)
        .with("origin_date", date)
}

#[test]
fn returns_both_days_tied_for_max() {
    let mut records = fr("X", "2018-08-10").create_list(3);
    records.extend(fr("X", "2018-08-11").create_list(3));
    records.push(fr("A", "2018-08-12").create());

    let detector = StrikeDayDetector::new("FR", "X");
    let days = detector.strike_days(&EngineContext::sequential(), &records);

    assert_eq!(days, vec!["2018-08-10", "2018-08-11"]);
}

#[test]
fn rank_exposes_full_ordering() {
    let mut records = fr("X", "2018-08-03").create_list(1);
    records.extend(fr("X", "2018-08-10").create_list(5));
    records.extend(fr("X", "2018-08-01").create_list(2));

    let ranking = StrikeDayDetector::new("FR", "X").rank(&EngineContext::new(3), &records);

    assert_eq!(
        ranking.entries(),
        &[
            RankedEntry {
                key: "2018-08-10".into(),
                count: 5
            },
            RankedEntry {
                key: "2018-08-01".into(),
                count: 2
            },
            RankedEntry {
                key: "2018-08-03".into(),
                count: 1
            },
        ]
    );
}

#[test]
fn ignores_other_airlines_and_active_flights() {
    let mut records = fr("X", "2018-08-10").create_list(2);
    records.extend(
        FlightFactory::new()
            .with("iata_code", "LH")
            .with("flight_status", "X")
            .with("origin_date", "2018-08-11")
            .create_list(10),
    );
    records.extend(fr("A", "2018-08-12").create_list(10));

    let days = StrikeDayDetector::new("FR", "X").strike_days(&EngineContext::sequential(), &records);
    assert_eq!(days, vec!["2018-08-10"]);
}

#[test]
fn no_cancellations_yields_empty_result() {
    let records = fr("A", "2018-08-10").create_list(4);
    let detector = StrikeDayDetector::new("FR", "X");
    let ctx = EngineContext::sequential();

    assert!(detector.rank(&ctx, &records).is_empty());
    assert!(detector.strike_days(&ctx, &records).is_empty());
    assert!(matches!(
        detector.strike_day(&ctx, &records),
        Err(EngineError::EmptyResult(_))
    ));
}

#[test]
fn strike_day_picks_earliest_tied_date() {
    let mut records = fr("X", "2018-08-11").create_list(2);
    records.extend(fr("X", "2018-08-10").create_list(2));

    let day = StrikeDayDetector::new("FR", "X")
        .strike_day(&EngineContext::new(2), &records)
        .unwrap();
    assert_eq!(day, "2018-08-10");
}

#[test]
fn cancelled_flights_without_date_are_skipped() {
    let mut records = fr("X", "").create_list(5);
    records.push(fr("X", "2018-08-10").create());

    let days = StrikeDayDetector::new("FR", "X").strike_days(&EngineContext::sequential(), &records);
    assert_eq!(days, vec!["2018-08-10"]);
}
