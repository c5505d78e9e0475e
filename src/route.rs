use crate::airport::Airport;
use crate::airport::error::LookupError;
use crate::airport::lookup_service::AirportLookupService;
use crate::geo::error::GeoError;
use crate::geo::{distance, interpolate_great_circle};
use crate::lat_long::LatitudeLongitude;
use log::info;
use serde::Serialize;
use std::convert::Infallible;
use std::str::FromStr;

pub const DEFAULT_PATH_POINTS: u32 = 100;
pub const MAX_PATH_POINTS: u32 = 100_000;

/// What the user typed for one end of the route.
#[derive(Clone, Debug, PartialEq)]
pub enum EndpointQuery {
    Coordinate(LatitudeLongitude),
    Airport(String),
}

impl FromStr for EndpointQuery {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Infallible> {
        Ok(match s.parse::<LatitudeLongitude>() {
            Ok(coordinate) => EndpointQuery::Coordinate(coordinate),
            Err(_) => EndpointQuery::Airport(s.trim().to_string()),
        })
    }
}

impl EndpointQuery {
    pub fn needs_lookup(&self) -> bool {
        matches!(self, EndpointQuery::Airport(_))
    }

    pub async fn resolve(
        &self,
        lookup: Option<&AirportLookupService>,
    ) -> anyhow::Result<Endpoint> {
        match self {
            EndpointQuery::Coordinate(coordinate) => Ok(Endpoint {
                name: coordinate.to_string(),
                coordinate: *coordinate,
            }),
            EndpointQuery::Airport(query) => {
                let lookup = lookup.ok_or(LookupError::NotConfigured)?;
                let airport = lookup.find(query).await?;
                info!("Resolved {query:?} to {}", airport.label());
                Ok(Endpoint::try_from(&airport)?)
            }
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Endpoint {
    pub name: String,
    pub coordinate: LatitudeLongitude,
}

impl TryFrom<&Airport> for Endpoint {
    type Error = GeoError;

    fn try_from(airport: &Airport) -> Result<Self, GeoError> {
        Ok(Self {
            name: airport.label(),
            coordinate: airport.coordinate()?,
        })
    }
}

/// Everything a map needs to draw the flight: both markers, where to centre, and the arc.
#[derive(Serialize, Debug)]
pub struct FlightRoute {
    pub from: Endpoint,
    pub to: Endpoint,
    pub distance_nm: f64,
    pub center: LatitudeLongitude,
    pub path: Vec<LatitudeLongitude>,
}

impl FlightRoute {
    pub fn new(from: Endpoint, to: Endpoint, num_points: u32) -> Result<Self, GeoError> {
        let path = interpolate_great_circle(from.coordinate, to.coordinate, num_points)?;
        Ok(Self {
            distance_nm: distance(from.coordinate, to.coordinate),
            center: from.coordinate.midpoint(&to.coordinate),
            from,
            to,
            path,
        })
    }
}
