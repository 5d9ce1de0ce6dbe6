//! Sunrise, sunset and twilight times across diverse global locations.

use chrono::{DateTime, Utc};
use solar_events::{noaa, CalendarDate, EventResult, Extreme, SolarDay, SolarEvent};

#[derive(Debug)]
struct City {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    timezone: &'static str,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Diverse latitudes and longitudes, including both polar regimes
    let cities = [
        City {
            name: "Longyearbyen, Norway (Arctic)",
            latitude: 78.22,
            longitude: 15.65,
            timezone: "Arctic/Longyearbyen",
        },
        City {
            name: "Anchorage, Alaska",
            latitude: 61.216667,
            longitude: -149.866667,
            timezone: "America/Anchorage",
        },
        City {
            name: "Auckland, New Zealand",
            latitude: -36.840556,
            longitude: 174.74,
            timezone: "Pacific/Auckland",
        },
        City {
            name: "Singapore",
            latitude: 1.283333,
            longitude: 103.833333,
            timezone: "Asia/Singapore",
        },
        City {
            name: "Brasília, Brazil",
            latitude: -15.8,
            longitude: -47.85,
            timezone: "America/Sao_Paulo",
        },
    ];

    // December solstice shows the most extreme variations
    let date = CalendarDate::new(2023, 12, 21)?;

    for city in &cities {
        println!("=== {} ===", city.name);
        println!(
            "Coordinates: {:.2}°N, {:.2}°E ({})",
            city.latitude, city.longitude, city.timezone
        );
        println!("Date: December 21, 2023 (Solstice)");
        println!();

        let day = noaa::solar_day(date, city.latitude, city.longitude, Some(city.timezone))?;
        print_day(&day);
        println!();
    }

    Ok(())
}

fn print_day(day: &SolarDay) {
    println!("  Solar noon: {}", day.solar_noon().format("%Y-%m-%d %H:%M:%S UTC"));

    let pairs = [
        ("Sunrise/Sunset", SolarEvent::Sunrise, SolarEvent::Sunset),
        (
            "Civil Twilight",
            SolarEvent::CivilTwilightBegin,
            SolarEvent::CivilTwilightEnd,
        ),
        (
            "Nautical Twilight",
            SolarEvent::NauticalTwilightBegin,
            SolarEvent::NauticalTwilightEnd,
        ),
        (
            "Astronomical Twilight",
            SolarEvent::AstronomicalTwilightBegin,
            SolarEvent::AstronomicalTwilightEnd,
        ),
    ];

    for (label, begin, end) in pairs {
        println!("{label}:");
        println!("  Begin: {}", describe(day.event(begin)));
        println!("  End: {}", describe(day.event(end)));
    }
}

fn describe(result: &EventResult<DateTime<Utc>>) -> String {
    match result {
        EventResult::Occurs(time) => time.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        EventResult::NeverReachesDepression(Extreme::AlwaysAbove) => {
            "sun stays above all day".to_string()
        }
        EventResult::NeverReachesDepression(Extreme::AlwaysBelow) => {
            "sun stays below all day".to_string()
        }
    }
}
