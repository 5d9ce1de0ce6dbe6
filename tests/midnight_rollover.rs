use chrono::{DateTime, NaiveDate, Utc};
use solar_events::{noaa, CalendarDate, SolarEvent};

fn date(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::new(year, month, day).unwrap()
}

fn naive(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn instant(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

fn assert_close(actual: DateTime<Utc>, expected: &str) {
    let error = (actual - instant(expected)).num_seconds().abs();
    assert!(error <= 2, "expected {expected}, got {actual}");
}

// West of Greenwich the evening events fall after 0:00 UTC. They belong to the requested
// date and must come out on the following UTC day, not wrap back to its morning.
#[test]
fn evening_events_west_of_greenwich_move_to_next_utc_day() {
    let day = noaa::solar_day(date(2023, 6, 21), 37.7749, -122.4194, None).unwrap();

    assert_close(
        *day.sunrise().value().unwrap(),
        "2023-06-21T12:48:01Z",
    );
    assert_close(*day.solar_noon(), "2023-06-21T20:11:30Z");
    assert_close(*day.sunset().value().unwrap(), "2023-06-22T03:34:52Z");
    assert_close(
        *day.event(SolarEvent::AstronomicalTwilightEnd).value().unwrap(),
        "2023-06-22T05:30:02Z",
    );
}

// East of Greenwich with a local timezone, morning events precede 0:00 UTC.
#[test]
#[cfg(feature = "tz")]
fn morning_events_east_of_greenwich_move_to_previous_utc_day() {
    let day = noaa::solar_day(date(2024, 6, 21), 35.6762, 139.6503, Some("Asia/Tokyo")).unwrap();

    let sunrise = *day.sunrise().value().unwrap();
    assert_eq!(sunrise.date_naive(), naive(2024, 6, 20));
    assert_close(sunrise, "2024-06-20T19:26:00Z");
    assert_close(*day.solar_noon(), "2024-06-21T02:43:19Z");
    assert_close(*day.sunset().value().unwrap(), "2024-06-21T10:00:30Z");
}

#[test]
#[cfg(feature = "tz")]
fn rollover_crosses_month_and_year() {
    // Auckland, New Year's Eve: local morning is the previous UTC day
    let day = noaa::solar_day(
        date(2024, 12, 31),
        -36.8485,
        174.7633,
        Some("Pacific/Auckland"),
    )
    .unwrap();
    assert_close(*day.sunrise().value().unwrap(), "2024-12-30T17:04:51Z");
    assert_close(*day.solar_noon(), "2024-12-31T00:24:11Z");

    // Sydney, New Year's Day: sunrise still falls in the old year
    let sunrise = noaa::sunrise(
        date(2024, 1, 1),
        -33.8688,
        151.2093,
        Some("Australia/Sydney"),
    )
    .unwrap()
    .into_value()
    .unwrap();
    assert_eq!(sunrise.date_naive(), naive(2023, 12, 31));
    assert_close(sunrise, "2023-12-31T18:47:28Z");
}

#[test]
fn consecutive_days_do_not_skip_or_repeat_events() {
    let mut previous_sunset: Option<DateTime<Utc>> = None;
    for day in 1..=10 {
        let sunset = noaa::sunset(date(2023, 6, day), 37.7749, -122.4194, None)
            .unwrap()
            .into_value()
            .unwrap();
        if let Some(previous) = previous_sunset {
            let minutes = (sunset - previous).num_minutes();
            assert!(
                (1435..=1445).contains(&minutes),
                "sunset {sunset} after {previous}"
            );
        }
        previous_sunset = Some(sunset);
    }
}
