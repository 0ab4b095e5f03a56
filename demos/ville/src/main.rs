//! ville — demonstration CLI for the taxiville toolkit.
//!
//! A taxi serves a sixteen-location city.  Each invocation starts from the
//! seed map, applies at most one disruption, and prints the result; the map
//! lives only in memory, so nothing persists across runs.  The current map
//! is an ordinary owned value that is reassigned only after a mutation
//! succeeds — failed mutations leave it exactly as it was.

mod city;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use taxi_core::{CityMap, Location};
use taxi_format::{itinerary_markdown, locations_table, segments_table};
use taxi_routing::shortest_path;
use taxi_traffic::{apply_congestion, apply_roadworks};

// ── CLI surface ───────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "ville", version, about = "Taxi routing over a demonstration city")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the locations served by the taxi.
    Locations,
    /// List the road segments of the city.
    Routes,
    /// Compute the shortest itinerary between two locations.
    Route { from: i64, to: i64 },
    /// Add congestion on one road segment (or relieve it with --relief).
    Congestion {
        from: i64,
        to: i64,
        /// Delay in minutes.
        minutes: f64,
        /// Relieve the segment instead: subtract the delay.
        #[arg(long)]
        relief: bool,
        /// Recompute an itinerary on the updated map.
        #[arg(long, num_args = 2, value_names = ["FROM", "TO"])]
        reroute: Option<Vec<i64>>,
    },
    /// Put one or more locations under roadworks.
    Roadworks {
        /// Delay in minutes, added once per affected segment endpoint.
        minutes: f64,
        /// Locations under roadworks.
        #[arg(required = true)]
        locations: Vec<i64>,
        /// Recompute an itinerary on the updated map.
        #[arg(long, num_args = 2, value_names = ["FROM", "TO"])]
        reroute: Option<Vec<i64>>,
    },
}

// ── Command handlers ──────────────────────────────────────────────────────────

fn print_route(from: Location, to: Location, city: &CityMap) {
    match shortest_path(from, to, city) {
        Ok(itinerary) => match itinerary_markdown(&itinerary, city) {
            Ok(text) => print!("{text}"),
            Err(e) => println!("{e}"),
        },
        Err(e) => println!("{e}"),
    }
}

fn reroute_if_asked(reroute: Option<Vec<i64>>, city: &CityMap) -> Result<()> {
    if let Some(pair) = reroute {
        let from = Location::from_signed(pair[0])?;
        let to = Location::from_signed(pair[1])?;
        println!();
        print_route(from, to, city);
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut current = city::build_city();

    match cli.command {
        Command::Locations => print!("{}", locations_table(&current)),

        Command::Routes => print!("{}", segments_table(&current)),

        Command::Route { from, to } => {
            let from = Location::from_signed(from)?;
            let to = Location::from_signed(to)?;
            print_route(from, to, &current);
        }

        Command::Congestion { from, to, minutes, relief, reroute } => {
            let from = Location::from_signed(from)?;
            let to = Location::from_signed(to)?;
            let delta = if relief { -minutes } else { minutes };

            match apply_congestion(from, to, delta, &current) {
                Ok(updated) => {
                    tracing::info!(%from, %to, delta, "congestion applied");
                    current = updated;
                    print!("{}", segments_table(&current));
                    if relief {
                        println!("Segment {from}-{to} is now {minutes} min faster.");
                    } else {
                        println!("Segment {from}-{to} now carries {minutes} min of congestion.");
                    }
                    reroute_if_asked(reroute, &current)?;
                }
                Err(e) => println!("{e}"),
            }
        }

        Command::Roadworks { minutes, locations, reroute } => {
            let targets = locations
                .into_iter()
                .map(Location::from_signed)
                .collect::<Result<Vec<_>, _>>()?;

            match apply_roadworks(&targets, minutes, &current) {
                Ok(updated) => {
                    tracing::info!(?targets, minutes, "roadworks applied");
                    current = updated;
                    print!("{}", segments_table(&current));
                    let names: Vec<String> =
                        targets.iter().map(Location::to_string).collect();
                    println!(
                        "Roadworks at location(s) {} for {minutes} min.",
                        names.join(", ")
                    );
                    reroute_if_asked(reroute, &current)?;
                }
                Err(e) => println!("{e}"),
            }
        }
    }

    Ok(())
}
