use std::fmt;

use thiserror::Error;

pub const LAT_DEG_MIN: f64 = -90.0;
pub const LAT_DEG_MAX: f64 = 90.0;
pub const LNG_DEG_MIN: f64 = -180.0;
pub const LNG_DEG_MAX: f64 = 180.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoordError {
    #[error("latitude is not a finite number")]
    LatNotFinite,
    #[error("longitude is not a finite number")]
    LngNotFinite,
    #[error("latitude out of range [-90, 90]")]
    LatOutOfRange,
    #[error("longitude out of range [-180, 180]")]
    LngOutOfRange,
}

/// A point on the map in decimal degrees (WGS 84).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    /// Create a point without validating the coordinates.
    ///
    /// Use [`MapPoint::try_from_lat_lng_deg`] for untrusted input.
    #[must_use]
    pub const fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Result<Self, CoordError> {
        if !lat.is_finite() {
            return Err(CoordError::LatNotFinite);
        }
        if !lng.is_finite() {
            return Err(CoordError::LngNotFinite);
        }
        if !(LAT_DEG_MIN..=LAT_DEG_MAX).contains(&lat) {
            return Err(CoordError::LatOutOfRange);
        }
        if !(LNG_DEG_MIN..=LNG_DEG_MAX).contains(&lng) {
            return Err(CoordError::LngOutOfRange);
        }
        Ok(Self { lat, lng })
    }

    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    #[must_use]
    pub const fn lng(&self) -> f64 {
        self.lng
    }
}

/// Renders `lat,lng` with the shortest decimal representation
/// that round-trips, e.g. `37.5,36` for `(37.5, 36.0)`.
impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", Deg(self.lat), Deg(self.lng))
    }
}

/// A single coordinate value in decimal degrees.
///
/// Negative zero is printed as `0`. Tiny values are printed in plain
/// decimal notation, e.g. `0.0000005` instead of `5e-7`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deg(pub f64);

impl fmt::Display for Deg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(deg) = *self;
        if deg == 0.0 {
            return f.write_str("0");
        }
        write!(f, "{deg}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_bounds() {
        assert!(MapPoint::try_from_lat_lng_deg(90.0, 180.0).is_ok());
        assert!(MapPoint::try_from_lat_lng_deg(-90.0, -180.0).is_ok());
    }

    #[test]
    fn reject_out_of_range() {
        assert_eq!(
            MapPoint::try_from_lat_lng_deg(90.1, 0.0),
            Err(CoordError::LatOutOfRange)
        );
        assert_eq!(
            MapPoint::try_from_lat_lng_deg(0.0, -180.5),
            Err(CoordError::LngOutOfRange)
        );
    }

    #[test]
    fn reject_non_finite() {
        assert_eq!(
            MapPoint::try_from_lat_lng_deg(f64::NAN, 0.0),
            Err(CoordError::LatNotFinite)
        );
        assert_eq!(
            MapPoint::try_from_lat_lng_deg(0.0, f64::INFINITY),
            Err(CoordError::LngNotFinite)
        );
    }

    #[test]
    fn display_shortest_decimal() {
        let p = MapPoint::from_lat_lng_deg(37.5, 36.0);
        assert_eq!(p.to_string(), "37.5,36");
        let p = MapPoint::from_lat_lng_deg(37.066_666, 37.383_331);
        assert_eq!(p.to_string(), "37.066666,37.383331");
    }

    #[test]
    fn display_tiny_values_without_exponent() {
        let p = MapPoint::from_lat_lng_deg(5e-7, -1e-7);
        assert_eq!(p.to_string(), "0.0000005,-0.0000001");
    }

    #[test]
    fn display_negative_zero_as_zero() {
        let p = MapPoint::from_lat_lng_deg(-0.0, -12.25);
        assert_eq!(p.to_string(), "0,-12.25");
    }
}
