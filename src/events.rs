//! Hour-angle geometry and UTC event times.
//!
//! The event solver combines the [`crate::sun`] series with the spherical
//! hour-angle solution in a two-pass scheme: declination and the equation
//! of time drift slowly over a day, so re-evaluating them once at the
//! first estimate of the event time is enough to reach the accuracy of the
//! underlying series, without an iterative fixed-point loop.

use crate::error::check_latitude;
use crate::math::{acos, cos_deg, radians_to_degrees, sin_deg};
use crate::sun::{declination, equation_of_time, MINUTES_PER_DEGREE};
use crate::time::JulianDay;
use crate::types::{Event, MinutesUtc, SolarDay, Zenith};
use crate::Result;
#[cfg(feature = "chrono")]
use chrono::Datelike;

/// Solar noon, in minutes of day.
const NOON_MINUTES: f64 = 720.0;

/// Cosine of the hour angle at which the sun reaches `zenith_angle`.
///
/// Leaves [-1, 1] exactly when the threshold is never reached on that day.
fn hour_angle_cosine(latitude: f64, declination: f64, zenith_angle: f64) -> f64 {
    (cos_deg(zenith_angle) - sin_deg(latitude) * sin_deg(declination))
        / (cos_deg(latitude) * cos_deg(declination))
}

/// Hour angle at which the sun stands at `zenith_angle`, in radians.
///
/// All arguments are degrees. Returns `None` when the sun never reaches
/// the target zenith angle at that latitude and declination (polar day or
/// polar night); this is an expected geometric outcome, not an error.
///
/// # Example
/// ```
/// # use solar_events::events::hour_angle;
/// // Equinox at the equator: the sun crosses the geometric horizon
/// // a quarter turn from the meridian.
/// let h = hour_angle(0.0, 0.0, 90.0).unwrap();
/// assert!((h - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
///
/// // Deep in the polar night no crossing exists.
/// assert!(hour_angle(72.0, -23.4, 90.833).is_none());
/// ```
#[must_use]
pub fn hour_angle(latitude: f64, declination: f64, zenith_angle: f64) -> Option<f64> {
    let cos_h = hour_angle_cosine(latitude, declination, zenith_angle);
    if (-1.0..=1.0).contains(&cos_h) {
        Some(acos(cos_h))
    } else {
        None
    }
}

/// One solver pass: event estimate in minutes UTC, at the given instant.
fn event_estimate(event: Event, day: JulianDay, latitude: f64, zenith_angle: f64) -> Option<f64> {
    let t = day.century();
    let time_offset = equation_of_time(t);
    let delta = declination(t);

    let h = hour_angle(latitude, delta, zenith_angle)?;
    let h = match event {
        Event::Rise => h,
        Event::Set => -h,
    };

    Some(NOON_MINUTES - MINUTES_PER_DEGREE * radians_to_degrees(h) - time_offset)
}

/// UTC time at which the sun crosses `zenith` on the given day.
///
/// Two passes: a first estimate from the series evaluated at `day`, then a
/// re-evaluation at the estimated instant. Returns `None` when the sun
/// never reaches the threshold (polar day or night); a failed first pass
/// skips the second.
///
/// The result is not wrapped into [0, 1440): values outside that range
/// place the event on the previous or next UTC calendar day, which the
/// caller resolves via [`MinutesUtc::day_and_minutes`].
///
/// # Example
/// ```
/// # use solar_events::{events, Event, JulianDay, Zenith};
/// let day = JulianDay::from_utc(2012, 1, 2, 0, 0, 0.0);
/// let sunrise = events::event_time_utc(Event::Rise, day, 48.85, Zenith::RiseSet).unwrap();
/// assert!(sunrise.minutes() > 0.0 && sunrise.minutes() < 720.0);
/// ```
#[must_use]
pub fn event_time_utc(
    event: Event,
    day: JulianDay,
    latitude: f64,
    zenith: Zenith,
) -> Option<MinutesUtc> {
    let zenith_angle = zenith.degrees();
    let first = event_estimate(event, day, latitude, zenith_angle)?;
    let refined = event_estimate(event, day.add_minutes(first), latitude, zenith_angle)?;
    Some(MinutesUtc::from_minutes(refined))
}

/// Rise, transit and set for one zenith threshold on the given day.
///
/// Transit (solar noon) is `720 − E` minutes and is reported in every
/// outcome. When the threshold is never crossed the result classifies the
/// day as polar day or polar night from which side of [-1, 1] the
/// hour-angle cosine fell.
///
/// # Errors
/// Returns `InvalidLatitude` for latitudes outside ±90°.
pub fn day_events(day: JulianDay, latitude: f64, zenith: Zenith) -> Result<SolarDay> {
    check_latitude(latitude)?;

    let transit = MinutesUtc::from_minutes(NOON_MINUTES - equation_of_time(day.century()));
    let rise = event_time_utc(Event::Rise, day, latitude, zenith);
    let set = event_time_utc(Event::Set, day, latitude, zenith);

    match (rise, set) {
        (Some(rise), Some(set)) => Ok(SolarDay::Regular { rise, transit, set }),
        _ => {
            let cos_h = hour_angle_cosine(latitude, declination(day.century()), zenith.degrees());
            if cos_h < -1.0 {
                Ok(SolarDay::PolarDay { transit })
            } else {
                Ok(SolarDay::PolarNight { transit })
            }
        }
    }
}

/// Rise, transit and set for a UTC calendar date.
///
/// Convenience form of [`day_events`] evaluated from midnight UTC of the
/// given date.
///
/// # Errors
/// Returns `InvalidLatitude` for latitudes outside ±90°.
pub fn day_events_utc(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    zenith: Zenith,
) -> Result<SolarDay> {
    day_events(
        JulianDay::from_utc(year, month, day, 0, 0, 0.0),
        latitude,
        zenith,
    )
}

/// Rise, transit and set for the UTC calendar date of a chrono `DateTime`.
///
/// The datetime is converted to UTC and truncated to midnight of that UTC
/// date; the returned minutes stay referenced to UTC.
///
/// # Errors
/// Returns `InvalidLatitude` for latitudes outside ±90°.
#[cfg(feature = "chrono")]
pub fn day_events_for_date<Tz: chrono::TimeZone>(
    date: &chrono::DateTime<Tz>,
    latitude: f64,
    zenith: Zenith,
) -> Result<SolarDay> {
    let utc = date.with_timezone(&chrono::Utc);
    day_events_utc(utc.year(), utc.month(), utc.day(), latitude, zenith)
}
