mod airport;
mod cli;
mod geo;
mod lat_long;
mod logging;
mod report;
mod route;

use crate::airport::config::{DEFAULT_CONFIG_PATH, LookupConfig};
use crate::airport::lookup_service::AirportLookupService;
use crate::cli::args::Args;
use crate::logging::init_logging;
use crate::report::render;
use crate::route::FlightRoute;
use anyhow::{Context, bail};
use clap::Parser;
use log::info;
use std::path::Path;
use std::process::exit;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    if let Err(error) = init_logging(args.log_config.clone()) {
        eprintln!("{error:#}");
        exit(1);
    }

    if let Err(error) = run(args).await {
        eprintln!("Error: {error:#}");
        exit(1);
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let lookup = if args.from.needs_lookup() || args.to.needs_lookup() {
        Some(AirportLookupService::new(lookup_config(&args)?)?)
    } else {
        None
    };

    let (from, to) = tokio::try_join!(
        args.from.resolve(lookup.as_ref()),
        args.to.resolve(lookup.as_ref())
    )?;

    let route = FlightRoute::new(from, to, args.points)?;
    info!(
        "{} -> {}: {:.2} nm over {} path points",
        route.from.name,
        route.to.name,
        route.distance_nm,
        route.path.len()
    );
    println!("{}", render(&route, args.format, args.km)?);
    Ok(())
}

fn lookup_config(args: &Args) -> anyhow::Result<LookupConfig> {
    let config = match &args.lookup_config {
        Some(path) => {
            if !std::fs::exists(path)? {
                bail!("Lookup config {} does not exist", path.display());
            }
            LookupConfig::load(path)
                .with_context(|| format!("Error parsing {}", path.display()))?
        }
        None => LookupConfig::load(Path::new(DEFAULT_CONFIG_PATH))
            .with_context(|| format!("Error parsing {DEFAULT_CONFIG_PATH}"))?,
    };
    Ok(apply_overrides(config, args))
}

/// Command line options win over the config file.
fn apply_overrides(mut config: LookupConfig, args: &Args) -> LookupConfig {
    if let Some(api_key) = &args.api_key {
        config.api_key = Some(api_key.clone());
    }
    if let Some(country) = &args.country {
        config.country = country.clone();
    }
    if let Some(timeout) = args.timeout {
        config.timeout = timeout;
    }
    config
}
