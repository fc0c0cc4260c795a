//! Human readable coordinates in degrees, minutes and seconds.

use std::fmt;

use afetmap_entities::geo::MapPoint;

const MILLIARCSEC_PER_DEG: f64 = 3_600_000.0;
const MILLIARCSEC_PER_MIN: u64 = 60_000;
const MILLIARCSEC_PER_SEC: u64 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    const fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'W',
        }
    }
}

/// A single coordinate in degrees, minutes and seconds.
///
/// Seconds are rounded to milliseconds of arc. The rounding carries over
/// into minutes and degrees, i.e. `59.9999999″` becomes one full minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dms {
    pub degrees: u32,
    pub minutes: u32,
    pub milliseconds: u32,
    pub hemisphere: Hemisphere,
}

impl Dms {
    #[must_use]
    pub fn latitude(deg: f64) -> Self {
        let hemisphere = if deg < 0.0 {
            Hemisphere::South
        } else {
            Hemisphere::North
        };
        Self::new(deg, hemisphere)
    }

    #[must_use]
    pub fn longitude(deg: f64) -> Self {
        let hemisphere = if deg < 0.0 {
            Hemisphere::West
        } else {
            Hemisphere::East
        };
        Self::new(deg, hemisphere)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn new(deg: f64, hemisphere: Hemisphere) -> Self {
        // Valid coordinates are bounded by 180°, which fits easily into u64.
        let total = (deg.abs() * MILLIARCSEC_PER_DEG).round() as u64;
        let degrees = total / (MILLIARCSEC_PER_MIN * 60);
        let rest = total % (MILLIARCSEC_PER_MIN * 60);
        let minutes = rest / MILLIARCSEC_PER_MIN;
        let milliseconds = rest % MILLIARCSEC_PER_MIN;
        Self {
            degrees: degrees as u32,
            minutes: minutes as u32,
            milliseconds: milliseconds as u32,
            hemisphere,
        }
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            degrees,
            minutes,
            milliseconds,
            hemisphere,
        } = *self;
        let seconds = u64::from(milliseconds) / MILLIARCSEC_PER_SEC;
        let fraction = u64::from(milliseconds) % MILLIARCSEC_PER_SEC;
        write!(
            f,
            "{degrees}° {minutes}′ {seconds}.{fraction:03}″ {}",
            hemisphere.letter()
        )
    }
}

/// Formats a map point as e.g. `37° 35′ 8.880″ N 36° 56′ 13.560″ E`.
#[must_use]
pub fn format_dms(pos: MapPoint) -> String {
    format!("{} {}", Dms::latitude(pos.lat()), Dms::longitude(pos.lng()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn north_east() {
        let pos = MapPoint::from_lat_lng_deg(37.5858, 36.9371);
        assert_eq!(format_dms(pos), "37° 35′ 8.880″ N 36° 56′ 13.560″ E");
    }

    #[test]
    fn north_west() {
        let pos = MapPoint::from_lat_lng_deg(40.76, -73.984);
        assert_eq!(format_dms(pos), "40° 45′ 36.000″ N 73° 59′ 2.400″ W");
    }

    #[test]
    fn south_east() {
        let pos = MapPoint::from_lat_lng_deg(-33.8675, 151.207);
        assert_eq!(format_dms(pos), "33° 52′ 3.000″ S 151° 12′ 25.200″ E");
    }

    #[test]
    fn zero_is_north_and_east() {
        let pos = MapPoint::from_lat_lng_deg(-0.0, 0.0);
        assert_eq!(format_dms(pos), "0° 0′ 0.000″ N 0° 0′ 0.000″ E");
    }

    #[test]
    fn rounding_carries_into_degrees() {
        let dms = Dms::latitude(36.999_999_99);
        assert_eq!(
            dms,
            Dms {
                degrees: 37,
                minutes: 0,
                milliseconds: 0,
                hemisphere: Hemisphere::North,
            }
        );
        assert_eq!(dms.to_string(), "37° 0′ 0.000″ N");
    }

    #[test]
    fn rounding_carries_into_minutes() {
        // 12° 30′ 59.9996″
        let dms = Dms::longitude(-(12.0 + 30.0 / 60.0 + 59.9996 / 3600.0));
        assert_eq!(dms.to_string(), "12° 31′ 0.000″ W");
    }
}
