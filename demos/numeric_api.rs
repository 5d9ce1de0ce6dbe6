//! Event calculation with the numeric API: minutes since 0:00 UTC instead of instants.

use solar_events::{noaa, CalendarDate, Depression, EventResult, GeoCoordinate, MinutesUtc};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // San Francisco on June 21, 2023
    let date = CalendarDate::new(2023, 6, 21)?;
    let san_francisco = GeoCoordinate::new(37.7749, -122.4194)?;

    let sunrise = noaa::event_minutes_utc(date, san_francisco, Depression::SUNRISE, 0.0)?;
    let sunset = noaa::event_minutes_utc(date, san_francisco, Depression::SUNSET, 0.0)?;
    let noon = noaa::noon_minutes_utc(date, san_francisco.longitude(), 0.0)?;

    println!("San Francisco, June 21, 2023 (UTC):");
    print_minutes("Sunrise", &sunrise);
    println!("  Solar noon: {:.2} minutes", noon.minutes());
    print_minutes("Sunset", &sunset);
    println!();

    // Show how minutes break down into a day offset and a clock time
    if let EventResult::Occurs(minutes) = sunset {
        let clock = minutes.clock_time();
        println!("Sunset breakdown:");
        println!("  Day offset: {}", clock.day_offset());
        println!(
            "  Clock time: {:02}:{:02}:{:02}",
            clock.hour(),
            clock.minute(),
            clock.second()
        );
    }

    // Custom depression: the sun's centre on the geometric horizon
    println!("\nWith custom depression (0.0°):");
    for depression in [Depression::rising(0.0)?, Depression::setting(0.0)?] {
        let result = noaa::event_minutes_utc(date, san_francisco, depression, 0.0)?;
        print_minutes(if depression.is_setting() { "Set" } else { "Rise" }, &result);
    }

    Ok(())
}

fn print_minutes(label: &str, result: &EventResult<MinutesUtc>) {
    match result {
        EventResult::Occurs(minutes) => println!("  {label}: {:.2} minutes", minutes.minutes()),
        EventResult::NeverReachesDepression(extreme) => println!("  {label}: never ({extreme:?})"),
    }
}
