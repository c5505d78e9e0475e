use reqwest::StatusCode;
use reqwest::header::InvalidHeaderValue;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum LookupError {
    MissingApiKey,
    NotConfigured,
    InvalidEndpoint(String),
    InvalidHeader(InvalidHeaderValue),
    Http(reqwest::Error),
    Status(StatusCode),
    NoResults(String),
}

impl Display for LookupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupError::MissingApiKey => f.write_str(
                "No API key for the airport service. Pass --api-key or set AIRPORTS_API_KEY.",
            ),
            LookupError::NotConfigured => f.write_str(
                "Airport lookup is not set up; give the endpoint as \"lat,lon\" instead",
            ),
            LookupError::InvalidEndpoint(url) => {
                f.write_fmt(format_args!("Airport service endpoint {url:?} is not a valid URL"))
            }
            LookupError::InvalidHeader(error) => {
                f.write_fmt(format_args!("Airport service credentials are unusable: {error}"))
            }
            LookupError::Http(error) => {
                f.write_fmt(format_args!("Airport lookup request failed: {error}"))
            }
            LookupError::Status(status) => {
                f.write_fmt(format_args!("Airport service responded with {status}"))
            }
            LookupError::NoResults(query) => {
                f.write_fmt(format_args!("No airport matches {query:?}"))
            }
        }
    }
}

impl Error for LookupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LookupError::InvalidHeader(error) => Some(error),
            LookupError::Http(error) => Some(error),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(error: reqwest::Error) -> Self {
        LookupError::Http(error)
    }
}

impl From<InvalidHeaderValue> for LookupError {
    fn from(error: InvalidHeaderValue) -> Self {
        LookupError::InvalidHeader(error)
    }
}
