use crate::geo::distance::{EARTH_RADIUS_KM, EARTH_RADIUS_NM};
use crate::route::FlightRoute;
use clap::ValueEnum;

#[derive(ValueEnum, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// Route document with the full path, for a map renderer
    Json,
}

pub fn render(route: &FlightRoute, format: OutputFormat, show_km: bool) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Text => render_text(route, show_km),
        OutputFormat::Json => serde_json::to_string_pretty(route)?,
    })
}

fn render_text(route: &FlightRoute, show_km: bool) -> String {
    let mut text = format!(
        "From: {}\nTo:   {}\nDistance: {} Nautical Miles\n",
        route.from.name,
        route.to.name,
        round_hundredths(route.distance_nm)
    );
    if show_km {
        let km = route.distance_nm / EARTH_RADIUS_NM * EARTH_RADIUS_KM;
        text.push_str(&format!("          {} Kilometres\n", round_hundredths(km)));
    }
    text
}

fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
