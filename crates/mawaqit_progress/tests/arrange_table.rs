//! Fixed-reference table for the day dial, plus a live prayer-time series.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use mawaqit_prayer::{CalculationMethod, GeoLocation, PrayerConfig, prayer_times_for_date};
use mawaqit_progress::arrange;
use proptest::prelude::*;

fn midnight() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 20)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn at(hours: f64) -> NaiveDateTime {
    midnight() + Duration::seconds((hours * 3600.0).round() as i64)
}

fn refs() -> Vec<NaiveDateTime> {
    [4.0, 12.0, 15.0, 19.0, 21.0].map(at).to_vec()
}

fn assert_close(got: f64, want: f64) {
    assert!((got - want).abs() < 1e-12, "got {got}, want {want}");
}

#[test]
fn empty_series_is_zero_all_day() {
    for h in [0.0, 4.0, 12.0, 15.0, 19.0, 21.0] {
        assert_eq!(arrange(&[], at(h)), 0.0);
    }
}

#[test]
fn lead_in() {
    assert_close(arrange(&refs(), midnight()), 0.0);
    assert_close(arrange(&refs()[..2], midnight()), 0.0);
    assert_close(arrange(&[at(4.0)], at(2.0)), 0.5 / 12.0);
    assert_close(arrange(&refs()[..2], at(2.0)), 0.5 / 12.0);
    assert_close(arrange(&[at(4.0)], at(3.0)), 0.75 / 12.0);
}

#[test]
fn first_bracket() {
    assert_close(arrange(&refs(), at(4.0)), 1.0 / 12.0);
    assert_close(arrange(&refs(), at(6.0)), 0.25 / 6.0 + 1.0 / 12.0);
    assert_close(arrange(&refs(), at(8.0)), 0.5 / 6.0 + 1.0 / 12.0);
}

#[test]
fn second_bracket() {
    assert_close(arrange(&refs(), at(12.0)), 1.0 / 6.0 + 1.0 / 12.0);
    assert_close(arrange(&refs(), at(13.0)), 1.0 / 18.0 + 1.0 / 6.0 + 1.0 / 12.0);
    assert_close(arrange(&refs(), at(14.0)), 2.0 / 18.0 + 1.0 / 6.0 + 1.0 / 12.0);
}

#[test]
fn third_bracket() {
    assert_close(arrange(&refs(), at(15.0)), 2.0 / 6.0 + 1.0 / 12.0);
    assert_close(arrange(&refs(), at(16.0)), 0.25 / 6.0 + 2.0 / 6.0 + 1.0 / 12.0);
    assert_close(arrange(&refs(), at(18.0)), 0.75 / 6.0 + 2.0 / 6.0 + 1.0 / 12.0);
}

#[test]
fn fourth_bracket() {
    assert_close(arrange(&refs(), at(19.0)), 3.0 / 6.0 + 1.0 / 12.0);
    assert_close(arrange(&refs(), at(19.5)), 0.25 / 6.0 + 3.0 / 6.0 + 1.0 / 12.0);
    assert_close(arrange(&refs(), at(20.5)), 0.75 / 6.0 + 3.0 / 6.0 + 1.0 / 12.0);
}

#[test]
fn tail() {
    assert_close(arrange(&refs(), at(21.0)), 4.0 / 6.0 + 1.0 / 12.0);
    assert_close(arrange(&refs(), at(22.0)), 1.0 / 36.0 + 4.0 / 6.0 + 1.0 / 12.0);
    assert_close(arrange(&refs(), at(23.0)), 2.0 / 36.0 + 4.0 / 6.0 + 1.0 / 12.0);
}

#[test]
fn single_reference_uses_lead_in_and_tail_only() {
    let one = [at(4.0)];
    assert_close(arrange(&one, at(4.0)), 4.0 / 6.0 + 1.0 / 12.0);
    assert_close(arrange(&one, at(14.0)), 0.5 / 12.0 + 4.0 / 6.0 + 1.0 / 12.0);
}

#[test]
fn prayer_series_hits_the_ticks() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
    let mecca = GeoLocation::new(21.4225, 39.8262);
    let cfg = PrayerConfig::with_method(CalculationMethod::UmmAlQura);
    let series = prayer_times_for_date(&cfg, date, &mecca, 3.0)
        .unwrap()
        .reference_series(date);
    assert_eq!(series.len(), 5);

    for (i, &t) in series[..4].iter().enumerate() {
        assert_close(arrange(&series, t), i as f64 / 6.0 + 1.0 / 12.0);
    }
    assert_close(arrange(&series, series[4]), 4.0 / 6.0 + 1.0 / 12.0);

    let mut last = 0.0;
    for minute in (0..24 * 60).step_by(7) {
        let v = arrange(&series, date.and_hms_opt(0, 0, 0).unwrap() + Duration::minutes(minute));
        assert!(v >= last, "dial went backwards at minute {minute}: {last} -> {v}");
        last = v;
    }
}

fn sorted_refs() -> impl Strategy<Value = Vec<NaiveDateTime>> {
    prop::collection::vec(1i64..86_399, 0..=5).prop_map(|mut secs| {
        secs.sort_unstable();
        secs.dedup();
        secs.into_iter()
            .map(|s| midnight() + Duration::seconds(s))
            .collect()
    })
}

proptest! {
    #[test]
    fn stays_in_unit_interval(refs in sorted_refs(), q in 0i64..86_400) {
        let v = arrange(&refs, midnight() + Duration::seconds(q));
        prop_assert!((0.0..1.0).contains(&v), "{v}");
    }

    #[test]
    fn never_decreases_through_the_day(refs in sorted_refs(), a in 0i64..86_400, b in 0i64..86_400) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let x = arrange(&refs, midnight() + Duration::seconds(lo));
        let y = arrange(&refs, midnight() + Duration::seconds(hi));
        prop_assert!(x <= y + 1e-12, "{x} > {y}");
    }
}
