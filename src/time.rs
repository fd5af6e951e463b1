//! Julian Day and Julian Century time scales.
//!
//! Calendar conversion follows Meeus, "Astronomical Algorithms" (2nd ed.,
//! 1998), chapter 7: dates strictly before 1582-10-15 are interpreted on
//! the proleptic Julian calendar, dates on or after on the Gregorian
//! calendar. The Julian Century is the single time parameter driving the
//! solar series in [`crate::sun`].

#![allow(clippy::unreadable_literal)]

use crate::math::floor;
#[cfg(feature = "chrono")]
use chrono::{Datelike, TimeZone, Timelike};

/// Julian Day Number of the J2000.0 epoch (2000-01-01 12:00 UT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Minutes per day.
pub const MINUTES_PER_DAY: f64 = 1_440.0;

/// Continuous count of days (and fraction of day) since -4712-01-01 12:00.
///
/// The fractional part carries the time of day, so date arithmetic is free
/// of calendar irregularities. Calendar constructors perform no input
/// validation: out-of-range months or days yield the day number the
/// conversion arithmetic produces, matching the reference algorithm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JulianDay(f64);

impl JulianDay {
    /// Wraps a raw Julian Day value.
    #[must_use]
    pub const fn new(julian_day: f64) -> Self {
        Self(julian_day)
    }

    /// Converts a calendar date with fractional day to a Julian Day.
    ///
    /// `year` uses astronomical numbering (0 and negative years allowed),
    /// `month` is 1-12 and `day` carries the time of day in its fraction.
    /// The Julian/Gregorian cutover at 1582-10-15 is applied here.
    ///
    /// # Example
    /// ```
    /// # use solar_events::JulianDay;
    /// let launch = JulianDay::from_calendar(1957, 10, 4.81);
    /// assert!((launch.value() - 2_436_116.31).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn from_calendar(year: i32, month: u32, day: f64) -> Self {
        let gregorian = is_gregorian(year, month, day);

        let mut y = year;
        let mut m = month as i32;
        // January and February count as months 13 and 14 of the previous
        // year, so the leap day is the last day of the arithmetic year.
        if m <= 2 {
            y -= 1;
            m += 12;
        }

        let b = if gregorian {
            let a = y / 100;
            2 - a + a / 4
        } else {
            0
        };

        let jd = floor(365.25 * (f64::from(y) + 4716.0)) + floor(30.6001 * f64::from(m + 1))
            + day
            + f64::from(b)
            - 1524.5;
        Self(jd)
    }

    /// Converts a UTC date and time of day to a Julian Day.
    ///
    /// Folds hour, minute and second into the fractional day and delegates
    /// to [`JulianDay::from_calendar`]. Like the calendar form, inputs are
    /// not validated.
    #[must_use]
    pub fn from_utc(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        let day_fraction = f64::from(day)
            + f64::from(hour) / 24.0
            + f64::from(minute) / MINUTES_PER_DAY
            + second / (MINUTES_PER_DAY * 60.0);
        Self::from_calendar(year, month, day_fraction)
    }

    /// Converts a timezone-aware chrono `DateTime` to a Julian Day.
    ///
    /// The datetime is converted to UTC first; computed event times are
    /// always referenced to UTC.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(datetime: &chrono::DateTime<Tz>) -> Self {
        let utc = datetime.with_timezone(&chrono::Utc);
        Self::from_utc(
            utc.year(),
            utc.month(),
            utc.day(),
            utc.hour(),
            utc.minute(),
            f64::from(utc.second()) + f64::from(utc.nanosecond()) / 1e9,
        )
    }

    /// Gets the raw Julian Day value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Centuries elapsed since J2000.0.
    #[must_use]
    pub fn century(&self) -> JulianCentury {
        JulianCentury((self.0 - J2000_JD) / DAYS_PER_CENTURY)
    }

    /// Shifts the day by a number of minutes.
    #[must_use]
    pub fn add_minutes(&self, minutes: f64) -> Self {
        Self(self.0 + minutes / MINUTES_PER_DAY)
    }

    /// Converts back to a calendar date as (year, month, fractional day).
    ///
    /// Inverse of [`JulianDay::from_calendar`], including the Gregorian
    /// correction for day numbers at or past the 1582-10-15 cutover.
    #[must_use]
    pub fn calendar_date(&self) -> (i32, u32, f64) {
        let z = floor(self.0 + 0.5);
        let f = (self.0 + 0.5) - z;

        let a = if z >= 2_299_161.0 {
            let alpha = floor((z - 1_867_216.25) / 36_524.25);
            z + 1.0 + alpha - floor(alpha / 4.0)
        } else {
            z
        };

        let b = a + 1524.0;
        let c = floor((b - 122.1) / 365.25);
        let d = floor(365.25 * c);
        let e = floor((b - d) / 30.6001);

        let day = b - d - floor(30.6001 * e) + f;
        let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
        let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

        (year as i32, month as u32, day)
    }

    /// Ordinal day of the year (1-366) for this day number.
    #[must_use]
    pub fn day_of_year(&self) -> u32 {
        let (year, month, day) = self.calendar_date();
        let k = if is_leap_year(year) { 1.0 } else { 2.0 };
        let month = f64::from(month);

        let n = floor(275.0 * month / 9.0) - k * floor((month + 9.0) / 12.0) + floor(day) - 30.0;
        n as u32
    }
}

/// Centuries elapsed since the J2000.0 epoch.
///
/// Exact affine rescaling of [`JulianDay`]; the two convert back and forth
/// without error beyond floating rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JulianCentury(f64);

impl JulianCentury {
    /// Wraps a raw century count.
    #[must_use]
    pub const fn new(centuries: f64) -> Self {
        Self(centuries)
    }

    /// Gets the raw century count.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Converts back to the Julian Day this century count represents.
    #[must_use]
    pub fn julian_day(&self) -> JulianDay {
        JulianDay(self.0 * DAYS_PER_CENTURY + J2000_JD)
    }
}

/// Whether the date falls on or after the Gregorian cutover (1582-10-15).
const fn is_gregorian(year: i32, month: u32, day: f64) -> bool {
    year > 1582 || (year == 1582 && (month > 10 || (month == 10 && day >= 15.0)))
}

/// Gregorian leap year rule.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
