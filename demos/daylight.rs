//! Day summaries for a few cities across the latitude range.
//!
//! Shows the whole-day API with chrono input: rise, transit and set for
//! each twilight threshold, including the polar outcomes in the Arctic.

use chrono::{DateTime, Utc};
use solar_events::{events, SolarDay, Zenith};

struct Place {
    name: &'static str,
    latitude: f64,
}

fn hhmm(minutes: f64) -> String {
    let total = minutes.round() as i64;
    format!("{:02}:{:02}", total.div_euclid(60) % 24, total.rem_euclid(60))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let places = [
        Place {
            name: "Longyearbyen (Arctic)",
            latitude: 78.22,
        },
        Place {
            name: "Reykjavik",
            latitude: 64.15,
        },
        Place {
            name: "Madrid",
            latitude: 40.42,
        },
        Place {
            name: "Singapore",
            latitude: 1.28,
        },
        Place {
            name: "Ushuaia",
            latitude: -54.8,
        },
    ];

    // Winter solstice shows the extremes; minutes are UTC at the Greenwich
    // meridian for each latitude.
    let date = "2012-12-21T00:00:00Z".parse::<DateTime<Utc>>()?;

    let thresholds = [
        ("sunrise/sunset", Zenith::RiseSet),
        ("civil twilight", Zenith::CivilTwilight),
        ("nautical twilight", Zenith::NauticalTwilight),
        ("astronomical twilight", Zenith::AstronomicalTwilight),
    ];

    for place in &places {
        println!("=== {} ({:.2}°) ===", place.name, place.latitude);

        for (label, zenith) in thresholds {
            match events::day_events_for_date(&date, place.latitude, zenith)? {
                SolarDay::Regular { rise, transit, set } => {
                    println!(
                        "  {label}: begin {} transit {} end {}",
                        hhmm(rise.minutes()),
                        hhmm(transit.minutes()),
                        hhmm(set.minutes()),
                    );
                }
                SolarDay::PolarDay { .. } => {
                    println!("  {label}: above the threshold all day");
                }
                SolarDay::PolarNight { .. } => {
                    println!("  {label}: below the threshold all day");
                }
            }
        }
        println!();
    }

    Ok(())
}
