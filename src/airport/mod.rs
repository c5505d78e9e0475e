use crate::geo::error::GeoError;
use crate::lat_long::LatitudeLongitude;
use serde::{Deserialize, Serialize};

pub mod client;
pub mod config;
pub mod error;
pub mod lookup_service;

/// One airport as returned by the lookup service. Only the coordinate and the
/// naming fields are read by the rest of the program.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Airport {
    #[serde(default)]
    pub icao: String,
    #[serde(default)]
    pub iata: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub country: String,
    pub latitude: CoordinateField,
    pub longitude: CoordinateField,
}

/// The service sends coordinates as strings, but numbers are accepted too.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum CoordinateField {
    Number(f64),
    Text(String),
}

impl Default for CoordinateField {
    fn default() -> Self {
        CoordinateField::Text(String::new())
    }
}

impl CoordinateField {
    fn as_text(&self) -> String {
        match self {
            CoordinateField::Number(value) => value.to_string(),
            CoordinateField::Text(value) => value.clone(),
        }
    }
}

impl Airport {
    pub fn coordinate(&self) -> Result<LatitudeLongitude, GeoError> {
        LatitudeLongitude::parse_fields(&self.latitude.as_text(), &self.longitude.as_text())
    }

    pub fn code(&self) -> &str {
        if self.iata.is_empty() {
            &self.icao
        } else {
            &self.iata
        }
    }

    pub fn label(&self) -> String {
        format!("{} ({}) - {}", self.name, self.code(), self.city)
    }
}
