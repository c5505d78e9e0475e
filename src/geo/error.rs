use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq)]
pub enum GeoError {
    InvalidCoordinate { field: &'static str, value: String },
    InvalidSampleCount(u32),
}

impl Display for GeoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GeoError::InvalidCoordinate { field, value } => {
                f.write_fmt(format_args!("Invalid {field}: {value:?} is not a number"))
            }
            GeoError::InvalidSampleCount(count) => f.write_fmt(format_args!(
                "A great-circle path needs at least 1 segment, got {count}"
            )),
        }
    }
}

impl Error for GeoError {}
