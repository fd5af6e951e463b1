//! Error types for the solar events library.
//!
//! Only the high-level day-summary API validates its inputs; the core
//! pipeline is total over its numeric domain and reports the geometric
//! no-event case through `Option`, not through these errors.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during solar event calculations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid zenith angle (must be between 0 and 180 degrees).
    InvalidZenithAngle {
        /// The invalid zenith angle value provided.
        value: f64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidZenithAngle { value } => {
                write!(
                    f,
                    "invalid zenith angle {value}° (must be between 0° and 180°)"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid zenith angle error.
    #[must_use]
    pub const fn invalid_zenith_angle(value: f64) -> Self {
        Self::InvalidZenithAngle { value }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates a zenith angle is within the valid range (0 to 180 degrees).
///
/// # Errors
/// Returns `InvalidZenithAngle` if the angle is not finite or out of range.
pub fn check_zenith_angle(zenith: f64) -> Result<()> {
    if !(0.0..=180.0).contains(&zenith) {
        return Err(Error::invalid_zenith_angle(zenith));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_validation() {
        assert!(check_latitude(0.0).is_ok());
        assert!(check_latitude(90.0).is_ok());
        assert!(check_latitude(-90.0).is_ok());
        assert!(check_latitude(66.56).is_ok());

        assert!(check_latitude(91.0).is_err());
        assert!(check_latitude(-91.0).is_err());
        assert!(check_latitude(f64::NAN).is_err());
        assert!(check_latitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_zenith_angle_validation() {
        assert!(check_zenith_angle(90.833).is_ok());
        assert!(check_zenith_angle(0.0).is_ok());
        assert!(check_zenith_angle(180.0).is_ok());

        assert!(check_zenith_angle(-0.1).is_err());
        assert!(check_zenith_angle(180.1).is_err());
        assert!(check_zenith_angle(f64::NAN).is_err());
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_error_display() {
        let err = Error::invalid_latitude(95.0);
        assert_eq!(
            err.to_string(),
            "invalid latitude 95° (must be between -90° and +90°)"
        );

        let err = Error::invalid_zenith_angle(200.0);
        assert_eq!(
            err.to_string(),
            "invalid zenith angle 200° (must be between 0° and 180°)"
        );
    }
}
