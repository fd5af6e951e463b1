//! Nautical-Almanac-style twilight tables for a fixed set of latitudes.
//!
//! Prints, for a handful of dates, the beginning of nautical and civil
//! twilight, sunrise, sunset and the end of civil and nautical twilight at
//! the latitudes tabulated in the almanac. Entries where the sun never
//! crosses the threshold print as `N/A`.

use solar_events::{events, Event, JulianDay, MinutesUtc, Zenith};

/// Latitudes tabulated in the Nautical Almanac.
const LATITUDES: &[f64] = &[
    72.0, 70.0, 68.0, 66.0, 64.0, 62.0, 60.0, 58.0, 56.0, 54.0, 52.0, 50.0, 45.0, 40.0, 35.0,
    30.0, 20.0, 10.0, 0.0, -10.0, -20.0, -30.0, -35.0, -40.0, -45.0, -50.0, -52.0, -54.0, -56.0,
    -58.0, -60.0,
];

/// Formats minutes-of-day as a fixed-width "HH MM" cell.
///
/// No-event and negative values render as the almanac's blank marker.
fn format_minutes(minutes: Option<MinutesUtc>) -> String {
    match minutes {
        Some(m) if m.minutes() >= 0.0 => {
            let total = m.minutes().round() as i64;
            format!("{:02} {:02}", total / 60, total % 60)
        }
        _ => String::from(" N/A "),
    }
}

fn print_table(label: &str, day: JulianDay) {
    println!("{label}");
    println!("| lat | naut. dawn | civil dawn | sunrise | sunset | civil dusk | naut. dusk |");
    println!("|-----|------------|------------|---------|--------|------------|------------|");

    for &latitude in LATITUDES {
        let at = |event, zenith| events::event_time_utc(event, day, latitude, zenith);

        println!(
            "| {:+3.0} | {} | {} | {} | {} | {} | {} |",
            latitude,
            format_minutes(at(Event::Rise, Zenith::NauticalTwilight)),
            format_minutes(at(Event::Rise, Zenith::CivilTwilight)),
            format_minutes(at(Event::Rise, Zenith::RiseSet)),
            format_minutes(at(Event::Set, Zenith::RiseSet)),
            format_minutes(at(Event::Set, Zenith::CivilTwilight)),
            format_minutes(at(Event::Set, Zenith::NauticalTwilight)),
        );
    }
    println!();
}

fn main() {
    let dates = [
        ("1994 May 8", JulianDay::from_calendar(1994, 5, 8.0)),
        ("1994 December 9", JulianDay::from_calendar(1994, 12, 9.0)),
        ("1994 December 10", JulianDay::from_calendar(1994, 12, 10.0)),
        ("2012 January 2", JulianDay::from_calendar(2012, 1, 2.0)),
        ("2012 November 21", JulianDay::from_calendar(2012, 11, 21.0)),
    ];

    for (label, day) in dates {
        print_table(label, day);
    }
}
