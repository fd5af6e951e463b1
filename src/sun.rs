//! Geocentric solar position series.
//!
//! Low-precision closed-form series from Meeus, "Astronomical Algorithms"
//! (2nd ed., 1998): solar coordinates from chapter 25, obliquity from
//! chapter 22 and the equation of time from chapter 28. Accuracy of the
//! apparent longitude is about 0.01° near the present epoch, which keeps
//! derived event times within a fraction of a minute.
//!
//! Every function is a pure query over a single [`JulianCentury`]; the
//! quantities are mutually consistent only when computed from the same
//! instant. Angular results are degrees and are not normalized to
//! [0, 360) — normalize explicitly where a comparison needs it.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::suboptimal_flops)]

use crate::math::{
    asin, atan2, cos, cos_deg, degrees_to_radians, polynomial, radians_to_degrees, sin, sin_deg,
    tan_deg,
};
use crate::time::JulianCentury;

/// Minutes of time per degree of rotation (1440 min / 360°).
pub(crate) const MINUTES_PER_DEGREE: f64 = 4.0;

/// Geometric mean longitude of the Sun, in degrees (unnormalized).
#[must_use]
pub fn mean_longitude(t: JulianCentury) -> f64 {
    polynomial(&[280.46646, 36000.76983, 0.0003032], t.value())
}

/// Geometric mean anomaly of the Sun, in degrees (unnormalized).
#[must_use]
pub fn mean_anomaly(t: JulianCentury) -> f64 {
    polynomial(&[357.52911, 35999.05029, -0.0001537], t.value())
}

/// Eccentricity of Earth's orbit (dimensionless, ~0.0167 near J2000).
#[must_use]
pub fn eccentricity(t: JulianCentury) -> f64 {
    polynomial(&[0.016708634, -0.000042037, -0.0000001267], t.value())
}

/// Equation of center of the Sun, in degrees.
///
/// Three-harmonic correction of the mean anomaly toward the true anomaly;
/// `mean_anomaly` is in degrees, usually [`mean_anomaly`] at the same `t`.
#[must_use]
pub fn equation_of_center(t: JulianCentury, mean_anomaly: f64) -> f64 {
    let t = t.value();
    let m = degrees_to_radians(mean_anomaly);

    (1.914602 - t * (0.004817 + t * 0.000014)) * sin(m)
        + (0.019993 - 0.000101 * t) * sin(2.0 * m)
        + 0.000289 * sin(3.0 * m)
}

/// True longitude of the Sun, in degrees (unnormalized).
#[must_use]
pub fn true_longitude(t: JulianCentury) -> f64 {
    mean_longitude(t) + equation_of_center(t, mean_anomaly(t))
}

/// True anomaly of the Sun, in degrees (unnormalized).
#[must_use]
pub fn true_anomaly(t: JulianCentury) -> f64 {
    let m = mean_anomaly(t);
    m + equation_of_center(t, m)
}

/// Longitude of the Moon's mean ascending node, in degrees.
///
/// Serves as the low-cost argument of the nutation and obliquity
/// corrections; this is not a rigorous nutation model.
#[must_use]
pub fn ascending_node_longitude(t: JulianCentury) -> f64 {
    polynomial(&[125.04, -1934.136], t.value())
}

/// Apparent longitude of the Sun, in degrees.
///
/// True longitude corrected for aberration and for nutation via the
/// ascending-node term.
#[must_use]
pub fn apparent_longitude(t: JulianCentury) -> f64 {
    true_longitude(t) - 0.000569 - 0.00478 * sin_deg(ascending_node_longitude(t))
}

/// Mean obliquity of the ecliptic, in degrees.
#[must_use]
pub fn mean_obliquity(t: JulianCentury) -> f64 {
    let arc_seconds = polynomial(&[21.448, -46.8150, -0.00059, 0.001813], t.value());
    23.0 + (26.0 + arc_seconds / 60.0) / 60.0
}

/// Obliquity of the ecliptic corrected for nutation, in degrees.
#[must_use]
pub fn corrected_obliquity(t: JulianCentury) -> f64 {
    mean_obliquity(t) + 0.00256 * cos_deg(ascending_node_longitude(t))
}

/// Apparent right ascension of the Sun, in degrees.
///
/// Quadrant-preserving conversion of the apparent longitude through the
/// corrected obliquity; the result lies in (-180, 180].
#[must_use]
pub fn right_ascension(t: JulianCentury) -> f64 {
    let epsilon = corrected_obliquity(t);
    let lambda = apparent_longitude(t);
    radians_to_degrees(atan2(cos_deg(epsilon) * sin_deg(lambda), cos_deg(lambda)))
}

/// Apparent declination of the Sun, in degrees.
#[must_use]
pub fn declination(t: JulianCentury) -> f64 {
    let epsilon = corrected_obliquity(t);
    let lambda = apparent_longitude(t);
    radians_to_degrees(asin(sin_deg(epsilon) * sin_deg(lambda)))
}

/// Equation of time: apparent minus mean solar time, in minutes.
#[must_use]
pub fn equation_of_time(t: JulianCentury) -> f64 {
    let y = tan_deg(corrected_obliquity(t) / 2.0);
    let y = y * y;

    let l0 = degrees_to_radians(mean_longitude(t));
    let e = eccentricity(t);
    let m = degrees_to_radians(mean_anomaly(t));

    let offset = y * sin(2.0 * l0) - 2.0 * e * sin(m) + 4.0 * e * y * sin(m) * cos(2.0 * l0)
        - 0.5 * y * y * sin(4.0 * l0)
        - 1.25 * e * e * sin(2.0 * m);

    radians_to_degrees(offset) * MINUTES_PER_DEGREE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{degrees_to_dms, normalize_degrees_0_to_360};
    use crate::time::JulianDay;

    #[test]
    fn test_mean_longitude_reference() {
        // Meeus example 25.a: 1992 October 13.0 TD
        let t = JulianDay::from_calendar(1992, 10, 13.0).century();
        let l0 = normalize_degrees_0_to_360(mean_longitude(t));
        assert_eq!((l0 * 1e5).round(), 20_180_720.0);
    }

    #[test]
    fn test_mean_anomaly_reference() {
        let t = JulianDay::from_calendar(1992, 10, 13.0).century();
        let m = normalize_degrees_0_to_360(mean_anomaly(t));
        assert_eq!((m * 1e5).round(), 27_899_397.0);
    }

    #[test]
    fn test_eccentricity_reference() {
        let t = JulianDay::from_calendar(1992, 10, 13.0).century();
        assert!((eccentricity(t) - 0.016711668).abs() < 1e-8);
    }

    #[test]
    fn test_true_longitude_reference() {
        // Meeus example 25.a: true longitude 199.90988°
        let t = JulianDay::from_calendar(1992, 10, 13.0).century();
        let theta = normalize_degrees_0_to_360(true_longitude(t));
        assert!((theta - 199.90988).abs() < 2e-4);
    }

    #[test]
    fn test_true_anomaly_reference() {
        // Meeus example 25.a: v = M + C = 278.99397° - 1.89732°
        let t = JulianDay::from_calendar(1992, 10, 13.0).century();
        let v = normalize_degrees_0_to_360(true_anomaly(t));
        assert!((v - 277.09665).abs() < 2e-4);
    }

    #[test]
    fn test_corrected_obliquity_reference() {
        // Meeus example 25.a: ε = 23°.43999 after the nutation correction
        let t = JulianDay::from_calendar(1992, 10, 13.0).century();
        assert!((corrected_obliquity(t) - 23.43999).abs() < 1e-4);
        // The correction itself stays within ±0.00256°
        assert!((corrected_obliquity(t) - mean_obliquity(t)).abs() <= 0.00256);
    }

    #[test]
    fn test_mean_obliquity_reference() {
        // Meeus example 22.a: 1987 April 10.0, ε₀ = 23°26'27.407"
        let t = JulianDay::from_calendar(1987, 4, 10.0).century();
        let (degrees, minutes, seconds) = degrees_to_dms(mean_obliquity(t));
        assert_eq!(degrees, 23);
        assert_eq!(minutes, 26);
        assert!((seconds - 27.407).abs() < 1e-9);
    }

    #[test]
    fn test_apparent_longitude_close_to_true() {
        // Aberration and nutation shift the longitude by well under 0.02°.
        let t = JulianDay::from_calendar(1992, 10, 13.0).century();
        let delta = (apparent_longitude(t) - true_longitude(t)).abs();
        assert!(delta > 0.0);
        assert!(delta < 0.02);
    }

    #[test]
    fn test_declination_stays_within_obliquity() {
        for day in 0..=73 {
            let t = JulianDay::from_calendar(2000, 1, 1.0 + f64::from(day) * 5.0).century();
            let delta = declination(t);
            assert!(delta.abs() < 23.5, "declination {delta} out of range");
        }
    }

    #[test]
    fn test_declination_at_solstices() {
        let june = JulianDay::from_calendar(2012, 6, 20.5).century();
        assert!((declination(june) - 23.43).abs() < 0.05);

        let december = JulianDay::from_calendar(2012, 12, 21.5).century();
        assert!((declination(december) + 23.43).abs() < 0.05);
    }

    #[test]
    fn test_right_ascension_quadrant() {
        // Near the autumn equinox the Sun sits close to 180° longitude;
        // atan2 must keep the right ascension in the same half-turn.
        let t = JulianDay::from_calendar(1992, 10, 13.0).century();
        let alpha = normalize_degrees_0_to_360(right_ascension(t));
        assert!((alpha - 198.38).abs() < 0.1);
    }

    #[test]
    fn test_equation_of_time_reference() {
        // Meeus example 28.a: 1992 October 13.0, E ≈ +13.7 minutes
        let t = JulianDay::from_calendar(1992, 10, 13.0).century();
        assert!((equation_of_time(t) - 13.71).abs() < 0.1);
    }

    #[test]
    fn test_equation_of_time_bounded_over_year() {
        for day in 0..=122 {
            let t = JulianDay::from_calendar(2012, 1, 1.0 + f64::from(day) * 3.0).century();
            let e = equation_of_time(t);
            assert!(e.abs() < 20.0, "equation of time {e} out of bounds");
        }
    }
}
