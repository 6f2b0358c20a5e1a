//! Stepwise - accessibility-aware walking route selection.

mod config;
mod render;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;
use stepwise_core::{select_best, EvalOptions, Point, ScoreWeights};
use stepwise_ors::{AlternativeRoutes, OrsClient, OrsConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::render::SelectionReport;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Destination as "lat,lon" or a place name
    destination: String,

    /// Origin as "lat,lon" or a place name
    #[arg(long, default_value = "22.2835513,114.1345991")]
    origin: String,

    /// Number of alternative routes to request
    #[arg(long, default_value_t = 2)]
    alternatives: u32,

    /// Geometry subsampling interval for elevation lookup
    #[arg(long, default_value_t = 5)]
    stride: usize,

    /// Score without the turn-count term
    #[arg(long)]
    no_turn_penalty: bool,

    /// Write the full selection report to this JSON file
    #[arg(long)]
    out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("stepwise_core=info".parse()?)
                .add_directive("stepwise_ors=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;

    let mut ors_config = OrsConfig::new(config.api_key);
    ors_config.base_url = config.base_url;
    ors_config.boundary_country = config.boundary_country;
    let client = OrsClient::new(ors_config);

    let origin = resolve_location(&client, &args.origin).await?;
    let destination = resolve_location(&client, &args.destination).await?;
    println!("Origin: {}, {}", origin.lat, origin.lon);
    println!("Destination: {}, {}", destination.lat, destination.lon);
    if let Ok(label) = client.reverse_geocode(destination).await {
        println!("Destination address: {}", label);
    }

    let alternatives = AlternativeRoutes {
        target_count: args.alternatives,
        ..AlternativeRoutes::default()
    };
    let routes = client
        .walking_directions(origin, destination, Some(alternatives))
        .await?;
    println!("Evaluating {} candidate route(s)...", routes.len());

    let mut options = EvalOptions {
        stride: args.stride,
        ..EvalOptions::default()
    };
    if args.no_turn_penalty {
        options.weights = ScoreWeights::without_turns();
    }

    let selection = select_best(&routes, &client, &options).await?;

    for breakdown in &selection.candidates {
        println!(
            "Route #{}: time {:.1}s, slope {:.2}%, {} steps, {} turns, score {:.2}",
            breakdown.index + 1,
            breakdown.duration_s,
            breakdown.slope_factor,
            breakdown.step_count,
            breakdown.turn_count,
            breakdown.score
        );
    }
    println!("Best route: #{}", selection.best_index + 1);

    render::print_route(&routes[selection.best_index], &selection.best);

    if let Some(path) = &args.out {
        let report = SelectionReport {
            generated_at: Utc::now(),
            origin,
            destination,
            selection: &selection,
            routes: &routes,
        };
        render::write_report(path, &report)?;
        println!("Saved selection report to {}", path.display());
    }

    Ok(())
}

/// Accept either "lat,lon" coordinates or a free-text place name.
async fn resolve_location(client: &OrsClient, input: &str) -> Result<Point> {
    match parse_coordinates(input) {
        Some(point) => Ok(point),
        None => Ok(client.geocode(input).await?),
    }
}

fn parse_coordinates(input: &str) -> Option<Point> {
    let (lat, lon) = input.split_once(',')?;
    let lat: f64 = lat.trim().parse().ok()?;
    let lon: f64 = lon.trim().parse().ok()?;
    ((-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon))
        .then(|| Point::new(lat, lon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_coordinate_pairs() {
        let point = parse_coordinates("22.2835513, 114.1345991").unwrap();
        assert_eq!(point.lat, 22.2835513);
        assert_eq!(point.lon, 114.1345991);
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert!(parse_coordinates("91.0,0.0").is_none());
        assert!(parse_coordinates("0.0,181.0").is_none());
    }

    #[test]
    fn place_names_are_not_coordinates() {
        assert!(parse_coordinates("Kennedy Town Station").is_none());
        assert!(parse_coordinates("Mong Kok, Kowloon").is_none());
    }
}
