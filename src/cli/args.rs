use crate::cli::parser::DurationValueParser;
use crate::report::OutputFormat;
use crate::route::{DEFAULT_PATH_POINTS, EndpointQuery, MAX_PATH_POINTS};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Departure airport: IATA code, airport name, or "lat,lon"
    #[arg(allow_hyphen_values = true)]
    pub from: EndpointQuery,

    /// Arrival airport: IATA code, airport name, or "lat,lon"
    #[arg(allow_hyphen_values = true)]
    pub to: EndpointQuery,

    /// Number of segments in the great-circle path
    #[arg(
        short = 'n',
        long,
        default_value_t = DEFAULT_PATH_POINTS,
        value_parser = clap::value_parser!(u32).range(1..=MAX_PATH_POINTS as i64)
    )]
    pub points: u32,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also print the distance in kilometres
    #[arg(long)]
    pub km: bool,

    /// API key for the airport lookup service
    #[arg(long, env = "AIRPORTS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Country to restrict airport searches to
    #[arg(long)]
    pub country: Option<String>,

    /// Timeout for airport lookups
    #[arg(long, value_parser = DurationValueParser)]
    pub timeout: Option<Duration>,

    /// The path to a JSON airport lookup configuration
    #[arg(long)]
    pub lookup_config: Option<PathBuf>,

    /// The path to a log4rs yaml logging configuration
    #[arg(long)]
    pub log_config: Option<String>,
}
