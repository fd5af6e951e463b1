//! Core data types for solar event calculations.

use crate::error::check_zenith_angle;
use crate::math::floor;
use crate::time::MINUTES_PER_DAY;
use crate::Result;

/// Predefined zenith angles for sunrise/sunset and twilight calculations.
///
/// The thresholds are the Sun's angular distance from the local zenith at
/// the moment of the event; the rise/set value exceeds 90° by a fixed
/// allowance for atmospheric refraction and the solar radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Zenith {
    /// Standard sunrise/sunset (upper limb touches the horizon): 90.833°
    RiseSet,
    /// Civil twilight (sun 6° below the horizon): 96°
    CivilTwilight,
    /// Nautical twilight (sun 12° below the horizon): 102°
    NauticalTwilight,
    /// Astronomical twilight (sun 18° below the horizon): 108°
    AstronomicalTwilight,
    /// Custom zenith angle in degrees
    Custom(f64),
}

impl Zenith {
    /// Gets the zenith angle in degrees for this threshold.
    #[must_use]
    pub const fn degrees(&self) -> f64 {
        match self {
            Self::RiseSet => 90.833,
            Self::CivilTwilight => 96.0,
            Self::NauticalTwilight => 102.0,
            Self::AstronomicalTwilight => 108.0,
            Self::Custom(angle) => *angle,
        }
    }

    /// Creates a custom threshold with the specified zenith angle.
    ///
    /// # Errors
    /// Returns `InvalidZenithAngle` if the angle is outside 0 to 180 degrees.
    pub fn custom(degrees: f64) -> Result<Self> {
        check_zenith_angle(degrees)?;
        Ok(Self::Custom(degrees))
    }
}

impl Eq for Zenith {}

impl core::hash::Hash for Zenith {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        match self {
            Self::RiseSet => 0.hash(state),
            Self::CivilTwilight => 1.hash(state),
            Self::NauticalTwilight => 2.hash(state),
            Self::AstronomicalTwilight => 3.hash(state),
            Self::Custom(angle) => {
                4.hash(state);
                // Normalize -0.0 and +0.0 so hashing remains consistent with PartialEq
                let normalized = if *angle == 0.0 { 0.0 } else { *angle };
                normalized.to_bits().hash(state);
            }
        }
    }
}

/// Which horizon crossing of the day to solve for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// Morning crossing (sun descending zenith angle)
    Rise,
    /// Evening crossing (sun ascending zenith angle)
    Set,
}

/// Minutes since midnight UTC of the calculation date.
///
/// Values are deliberately not wrapped into [0, 1440): a negative value
/// places the event on the previous UTC calendar day, a value of 1440 or
/// more on the next. Use [`MinutesUtc::day_and_minutes`] to split the day
/// offset from the in-day time.
///
/// # Example
/// ```
/// # use solar_events::MinutesUtc;
/// let late = MinutesUtc::from_minutes(1500.0);
/// let (day_offset, minutes) = late.day_and_minutes();
/// assert_eq!(day_offset, 1);
/// assert!((minutes - 60.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinutesUtc(f64);

impl MinutesUtc {
    /// Creates a new `MinutesUtc` from minutes since midnight UTC.
    #[must_use]
    pub const fn from_minutes(minutes: f64) -> Self {
        Self(minutes)
    }

    /// Gets the raw minutes value (may be negative or ≥ 1440).
    #[must_use]
    pub const fn minutes(&self) -> f64 {
        self.0
    }

    /// Gets the day offset and normalized minutes (0.0 to < 1440.0).
    ///
    /// The day offset counts whole days relative to the calculation date:
    /// negative for previous days, positive for following days.
    #[must_use]
    pub fn day_and_minutes(&self) -> (i32, f64) {
        let minutes = self.0;
        if !minutes.is_finite() {
            return (0, minutes);
        }

        let mut day_offset = floor(minutes / MINUTES_PER_DAY);
        let mut in_day = minutes - day_offset * MINUTES_PER_DAY;

        if in_day < 0.0 {
            in_day += MINUTES_PER_DAY;
            day_offset -= 1.0;
        } else if in_day >= MINUTES_PER_DAY {
            in_day -= MINUTES_PER_DAY;
            day_offset += 1.0;
        }

        let day_offset = if day_offset >= f64::from(i32::MAX) {
            i32::MAX
        } else if day_offset <= f64::from(i32::MIN) {
            i32::MIN
        } else {
            day_offset as i32
        };

        (day_offset, in_day)
    }
}

/// Result of a full-day rise/set calculation for one zenith threshold.
///
/// At extreme latitudes the Sun may stay above or below the threshold for
/// the entire day; transit (solar noon) is reported in every case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolarDay {
    /// Regular day with distinct rise, transit and set times
    Regular {
        /// Time the sun descends through the zenith threshold (morning)
        rise: MinutesUtc,
        /// Time of solar transit (solar noon)
        transit: MinutesUtc,
        /// Time the sun ascends through the zenith threshold (evening)
        set: MinutesUtc,
    },
    /// Polar day: the sun stays above the threshold all day
    PolarDay {
        /// Time of solar transit (closest approach to the zenith)
        transit: MinutesUtc,
    },
    /// Polar night: the sun stays below the threshold all day
    PolarNight {
        /// Time of solar transit (highest point, still below the threshold)
        transit: MinutesUtc,
    },
}

impl SolarDay {
    /// Gets the transit time (solar noon) for any outcome.
    #[must_use]
    pub const fn transit(&self) -> MinutesUtc {
        match self {
            Self::Regular { transit, .. }
            | Self::PolarDay { transit }
            | Self::PolarNight { transit } => *transit,
        }
    }

    /// Gets the rise time if the threshold is crossed on this day.
    #[must_use]
    pub const fn rise(&self) -> Option<MinutesUtc> {
        if let Self::Regular { rise, .. } = self {
            Some(*rise)
        } else {
            None
        }
    }

    /// Gets the set time if the threshold is crossed on this day.
    #[must_use]
    pub const fn set(&self) -> Option<MinutesUtc> {
        if let Self::Regular { set, .. } = self {
            Some(*set)
        } else {
            None
        }
    }

    /// Checks if this is a regular day with both crossings.
    #[must_use]
    pub const fn is_regular(&self) -> bool {
        matches!(self, Self::Regular { .. })
    }

    /// Checks if the sun never drops below the threshold (polar day).
    #[must_use]
    pub const fn is_polar_day(&self) -> bool {
        matches!(self, Self::PolarDay { .. })
    }

    /// Checks if the sun never reaches the threshold (polar night).
    #[must_use]
    pub const fn is_polar_night(&self) -> bool {
        matches!(self, Self::PolarNight { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zenith_degrees() {
        assert_eq!(Zenith::RiseSet.degrees(), 90.833);
        assert_eq!(Zenith::CivilTwilight.degrees(), 96.0);
        assert_eq!(Zenith::NauticalTwilight.degrees(), 102.0);
        assert_eq!(Zenith::AstronomicalTwilight.degrees(), 108.0);

        let custom = Zenith::custom(91.5).unwrap();
        assert_eq!(custom.degrees(), 91.5);

        assert!(Zenith::custom(-1.0).is_err());
        assert!(Zenith::custom(181.0).is_err());
        assert!(Zenith::custom(f64::NAN).is_err());
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_zenith_hash_normalizes_zero_sign() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Zenith::Custom(0.0));
        set.insert(Zenith::Custom(-0.0));

        assert_eq!(set.len(), 1, "hashing should treat +0.0 and -0.0 equally");
    }

    #[test]
    fn test_minutes_utc_day_and_minutes() {
        let same_day = MinutesUtc::from_minutes(720.0);
        assert_eq!(same_day.day_and_minutes(), (0, 720.0));

        let next_day = MinutesUtc::from_minutes(1500.0);
        let (day, minutes) = next_day.day_and_minutes();
        assert_eq!(day, 1);
        assert!((minutes - 60.0).abs() < 1e-10);

        let previous_day = MinutesUtc::from_minutes(-30.0);
        let (day, minutes) = previous_day.day_and_minutes();
        assert_eq!(day, -1);
        assert!((minutes - 1410.0).abs() < 1e-10);

        let far_out = MinutesUtc::from_minutes(2.0 * 1440.0 + 90.0);
        let (day, minutes) = far_out.day_and_minutes();
        assert_eq!(day, 2);
        assert!((minutes - 90.0).abs() < 1e-10);
    }

    #[test]
    fn test_solar_day_accessors() {
        let regular = SolarDay::Regular {
            rise: MinutesUtc::from_minutes(360.0),
            transit: MinutesUtc::from_minutes(725.0),
            set: MinutesUtc::from_minutes(1090.0),
        };
        assert!(regular.is_regular());
        assert!(!regular.is_polar_day());
        assert_eq!(regular.transit().minutes(), 725.0);
        assert_eq!(regular.rise().unwrap().minutes(), 360.0);
        assert_eq!(regular.set().unwrap().minutes(), 1090.0);

        let polar_day = SolarDay::PolarDay {
            transit: MinutesUtc::from_minutes(710.0),
        };
        assert!(polar_day.is_polar_day());
        assert!(polar_day.rise().is_none());
        assert!(polar_day.set().is_none());

        let polar_night = SolarDay::PolarNight {
            transit: MinutesUtc::from_minutes(730.0),
        };
        assert!(polar_night.is_polar_night());
        assert_eq!(polar_night.transit().minutes(), 730.0);
    }
}
