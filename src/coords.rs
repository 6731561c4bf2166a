//! Parsing and range checks for typed-in fly-to coordinates.

use serde::{Deserialize, Serialize};

use crate::error::CoordinateError;

/// Usable latitude band of the Earth tile pyramid.
pub const LATITUDE_RANGE: (f64, f64) = (-60.0, 85.0);
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Parses both fields, then checks latitude before longitude.
pub fn validate(lat_text: &str, lng_text: &str) -> Result<LatLng, CoordinateError> {
    let lat = parse_decimal(lat_text);
    let lng = parse_decimal(lng_text);
    let (Some(lat), Some(lng)) = (lat, lng) else {
        return Err(CoordinateError::NotANumber);
    };
    if !(LATITUDE_RANGE.0..=LATITUDE_RANGE.1).contains(&lat) {
        return Err(CoordinateError::LatitudeOutOfRange(lat));
    }
    if !(LONGITUDE_RANGE.0..=LONGITUDE_RANGE.1).contains(&lng) {
        return Err(CoordinateError::LongitudeOutOfRange(lng));
    }
    Ok(LatLng { lat, lng })
}

// Optional sign, digits, at most one dot, at least one digit. No exponents,
// no `inf`/`NaN`, no comma separators.
fn parse_decimal(text: &str) -> Option<f64> {
    let t = text.trim();
    let body = t.strip_prefix(['+', '-']).unwrap_or(t);
    let mut digits = 0;
    let mut dots = 0;
    for c in body.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return None,
        }
    }
    if digits == 0 || dots > 1 {
        return None;
    }
    t.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_decimals() {
        assert_eq!(validate("41.15", "20.16"), Ok(LatLng::new(41.15, 20.16)));
        assert_eq!(validate(" -12.5 ", "+179"), Ok(LatLng::new(-12.5, 179.0)));
        assert_eq!(validate(".5", "-0."), Ok(LatLng::new(0.5, 0.0)));
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(validate("-60", "-180").is_ok());
        assert!(validate("85", "180").is_ok());
    }

    #[test]
    fn valid_pairs_round_trip() {
        for lat in [-60.0, -33.25, 0.0, 12.0, 41.15, 84.999] {
            for lng in [-180.0, -73.5, 0.0, 20.16, 180.0] {
                let got = validate(&lat.to_string(), &lng.to_string()).unwrap();
                assert_eq!(got, LatLng::new(lat, lng));
            }
        }
    }

    #[test]
    fn rejects_non_numbers() {
        for (lat, lng) in [
            ("", "1"),
            ("1", "abc"),
            ("41,15", "20"),
            ("1e2", "0"),
            ("inf", "0"),
            ("NaN", "0"),
            ("1.2.3", "0"),
            ("-", "0"),
            ("12abc", "0"),
        ] {
            assert_eq!(validate(lat, lng), Err(CoordinateError::NotANumber), "{lat:?} {lng:?}");
        }
    }

    #[test]
    fn parse_failure_wins_over_range() {
        assert_eq!(validate("999", "x"), Err(CoordinateError::NotANumber));
    }

    #[test]
    fn latitude_checked_first() {
        assert_eq!(validate("90", "0"), Err(CoordinateError::LatitudeOutOfRange(90.0)));
        assert_eq!(validate("-61", "500"), Err(CoordinateError::LatitudeOutOfRange(-61.0)));
        assert_eq!(validate("10", "-180.5"), Err(CoordinateError::LongitudeOutOfRange(-180.5)));
    }
}
