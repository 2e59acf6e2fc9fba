// ABOUTME: Pierre Outfit CLI - weather-aware cycling clothing recommendations from the terminal
// ABOUTME: Parses ride conditions, validates them and prints the outfit or the felt temperature
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Outfit for a cold windy morning ride
//! pierre-outfit recommend --temperature -5 --humidity 70 --wind-speed 15 --duration 90
//!
//! # Same ride as JSON, for a rider who runs cold
//! pierre-outfit recommend --temperature -5 --humidity 70 --wind-speed 15 --bias -2 --format json
//!
//! # Felt temperature with every intermediate step
//! pierre-outfit --verbose feels-like --temperature 10 --humidity 60 --wind-speed 20
//!
//! # Clothing vocabulary
//! pierre-outfit items
//! ```

mod commands;
mod helpers;

use clap::{Args, Parser, Subcommand};
use pierre_outfit::config::{OutfitServiceConfig, OutputFormat};
use pierre_outfit::models::{
    PersonalizationBias, WeatherSnapshot, WorkoutContext, WorkoutIntensity,
};
use pierre_outfit::validation::RecommendationRequest;
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "pierre-outfit",
    about = "Weather-aware cycling outfit recommendations",
    long_about = "Recommends a per body zone cycling outfit from temperature, humidity, wind and the planned ride."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Recommend an outfit for one ride
    Recommend {
        #[command(flatten)]
        ride: RideArgs,

        /// Output format (text or json), defaults to `OUTFIT_OUTPUT_FORMAT`
        #[arg(long)]
        format: Option<OutputFormat>,
    },

    /// Print the effective temperature for one ride
    FeelsLike {
        #[command(flatten)]
        ride: RideArgs,
    },

    /// List the clothing vocabulary grouped by body zone
    Items,
}

/// Ride conditions shared by the subcommands
#[derive(Args)]
struct RideArgs {
    /// Air temperature in Celsius
    #[arg(long, allow_negative_numbers = true)]
    temperature: f64,

    /// Relative humidity in percent
    #[arg(long)]
    humidity: u8,

    /// Wind speed in km/h
    #[arg(long)]
    wind_speed: f64,

    /// Workout intensity (recreational, tempo, intensive, endurance)
    #[arg(long)]
    intensity: Option<WorkoutIntensity>,

    /// Ride duration in minutes
    #[arg(long)]
    duration: Option<u32>,

    /// Personal thermal adjustment in Celsius (negative for riders who run cold)
    #[arg(long, allow_negative_numbers = true)]
    bias: Option<f64>,
}

impl RideArgs {
    fn into_request(self, config: &OutfitServiceConfig) -> RecommendationRequest {
        RecommendationRequest::new(
            WeatherSnapshot::new(self.temperature, self.humidity, self.wind_speed),
            WorkoutContext::new(
                self.intensity.unwrap_or(config.default_intensity),
                self.duration.unwrap_or(config.default_duration_minutes),
            ),
            PersonalizationBias::new(self.bias.unwrap_or(config.default_thermal_adjustment)),
        )
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = OutfitServiceConfig::from_env()?;
    let logging = if cli.verbose {
        config.logging.clone().verbose()
    } else {
        config.logging.clone()
    };
    logging.init()?;
    info!(
        intensity = %config.default_intensity,
        duration_minutes = config.default_duration_minutes,
        output_format = %config.output_format,
        "Outfit configuration loaded"
    );
    debug!(thermal_model = ?config.thermal_model, "Pierre outfit CLI");

    match cli.command {
        Command::Recommend { ride, format } => {
            let request = ride.into_request(&config);
            commands::recommend::run(&config, &request, format.unwrap_or(config.output_format))?;
        }
        Command::FeelsLike { ride } => {
            let request = ride.into_request(&config);
            commands::feels_like::run(&config, &request, cli.verbose)?;
        }
        Command::Items => commands::items::run(),
    }

    Ok(())
}
