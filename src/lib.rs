//! # Solar Event Times
//!
//! Sunrise, sunset and twilight crossing times in UTC, computed from the
//! low-precision geocentric solar series in Meeus, "Astronomical
//! Algorithms" (2nd ed., 1998).

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The library answers one question: at what UTC time does the Sun cross a
//! given zenith angle on a given calendar date, at a given latitude? Four
//! named thresholds cover the common cases — standard sunrise/sunset
//! (including a fixed refraction allowance), and civil, nautical and
//! astronomical twilight. The series are accurate to about 0.01°, which
//! keeps event times within a fraction of a minute near the present epoch.
//!
//! ## Features
//!
//! - `std` (default): use standard library math functions
//! - `chrono` (default): `DateTime<Tz>` based convenience constructors
//! - `libm`: pure Rust math for `no_std` environments
//!
//! ## Quick Start
//!
//! ### Single crossing
//! ```rust
//! use solar_events::{events, Event, JulianDay, Zenith};
//!
//! // Sunrise in Paris (48.85°N) on 2012-01-02, in minutes UTC
//! let day = JulianDay::from_utc(2012, 1, 2, 0, 0, 0.0);
//! let sunrise = events::event_time_utc(Event::Rise, day, 48.85, Zenith::RiseSet)
//!     .expect("the sun rises at mid latitudes");
//!
//! let (_, minutes) = sunrise.day_and_minutes();
//! println!("sunrise {:02}:{:02} UTC", minutes as u32 / 60, minutes as u32 % 60);
//! ```
//!
//! ### Whole day at once
//! ```rust
//! use solar_events::{events, SolarDay, Zenith};
//!
//! match events::day_events_utc(2012, 6, 21, 78.0, Zenith::RiseSet).unwrap() {
//!     SolarDay::Regular { rise, transit, set } => {
//!         println!("rise {:.1} transit {:.1} set {:.1}",
//!             rise.minutes(), transit.minutes(), set.minutes());
//!     }
//!     SolarDay::PolarDay { .. } => println!("midnight sun"),
//!     SolarDay::PolarNight { .. } => println!("polar night"),
//! }
//! ```
//!
//! ## Notes on the contract
//!
//! - Event times are minutes since midnight UTC of the input date and are
//!   deliberately not wrapped into [0, 1440); out-of-range values place
//!   the event on the adjacent UTC calendar day.
//! - Polar day and polar night are ordinary outcomes, reported as `None`
//!   from the low-level solver and as dedicated [`SolarDay`] variants.
//! - Calendar inputs are not validated: the conversion arithmetic is total
//!   and out-of-range fields produce the day number it yields.
//! - Calendar dates strictly before 1582-10-15 are proleptic Julian, later
//!   dates Gregorian.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::math::{degrees_to_dms, normalize_degrees_0_to_360};
pub use crate::time::{JulianCentury, JulianDay};
pub use crate::types::{Event, MinutesUtc, SolarDay, Zenith};

// Pipeline modules
pub mod events;
pub mod sun;
pub mod time;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;
