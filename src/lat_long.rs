use crate::geo::error::GeoError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct LatitudeLongitude(pub f64, pub f64);

impl LatitudeLongitude {
    pub fn latitude(&self) -> f64 {
        self.0
    }

    pub fn longitude(&self) -> f64 {
        self.1
    }

    /// Builds a coordinate from text fields as handed out by the airport service.
    /// Anything that isn't a finite number is rejected instead of becoming NaN.
    pub fn parse_fields(latitude: &str, longitude: &str) -> Result<Self, GeoError> {
        Ok(Self(
            parse_degrees("latitude", latitude)?,
            parse_degrees("longitude", longitude)?,
        ))
    }

    /// Haversine central angle in radians.
    pub fn central_angle(&self, other: &LatitudeLongitude) -> f64 {
        let lat1 = self.0.to_radians();
        let lat2 = other.0.to_radians();
        let delta_lat = lat2 - lat1;
        let delta_long = (other.1 - self.1).to_radians();

        let h = (delta_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_long / 2.0).sin().powi(2);
        let h = h.clamp(0.0, 1.0);

        2.0 * h.sqrt().atan2((1.0 - h).sqrt())
    }

    /// Arithmetic midpoint, used to centre a map on both endpoints.
    pub fn midpoint(&self, other: &LatitudeLongitude) -> LatitudeLongitude {
        LatitudeLongitude((self.0 + other.0) / 2.0, (self.1 + other.1) / 2.0)
    }

    pub(crate) fn to_unit_vector(self) -> [f64; 3] {
        let lat = self.0.to_radians();
        let long = self.1.to_radians();
        [
            lat.cos() * long.cos(),
            lat.cos() * long.sin(),
            lat.sin(),
        ]
    }

    pub(crate) fn from_unit_vector([x, y, z]: [f64; 3]) -> Self {
        let lat = z.atan2((x * x + y * y).sqrt());
        let long = y.atan2(x);
        Self(lat.to_degrees(), long.to_degrees())
    }
}

fn parse_degrees(field: &'static str, value: &str) -> Result<f64, GeoError> {
    match value.trim().parse::<f64>() {
        Ok(degrees) if degrees.is_finite() => Ok(degrees),
        _ => Err(GeoError::InvalidCoordinate {
            field,
            value: value.to_string(),
        }),
    }
}

impl FromStr for LatitudeLongitude {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, GeoError> {
        let Some((lat, long)) = s.split_once(',') else {
            return Err(GeoError::InvalidCoordinate {
                field: "coordinate",
                value: s.to_string(),
            });
        };
        Self::parse_fields(lat, long)
    }
}

impl Display for LatitudeLongitude {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{:.4}, {:.4}", self.latitude(), self.longitude()))
    }
}
