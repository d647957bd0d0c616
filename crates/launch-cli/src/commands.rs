//! Query commands and their rendering.

use clap::{Subcommand, ValueEnum};
use launch_analytics::{AnalyticsError, LaunchAnalytics, ReportParams};
use serde_json::json;

use crate::config::Config;

type Result<T> = std::result::Result<T, AnalyticsError>;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Json,
    Markdown,
}

/// Analytics queries exposed on the command line
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Top-k most launched rockets
    Rockets {
        #[arg(short, long)]
        k: Option<usize>,
    },

    /// Top-k providers by success percentage
    Reliable {
        #[arg(short, long)]
        k: Option<usize>,
    },

    /// Top-k providers by failure percentage
    Unreliable {
        #[arg(short, long)]
        k: Option<usize>,
    },

    /// Top-k most recent launches
    Recent {
        #[arg(short, long)]
        k: Option<usize>,
    },

    /// Top-k most expensive launches
    Expensive {
        #[arg(short, long)]
        k: Option<usize>,
    },

    /// Country building the rockets of the most launches to an orbit
    DominantCountry {
        #[arg(short, long)]
        orbit: Option<String>,
    },

    /// Top-k providers by launch revenue in a year
    Revenue {
        #[arg(short, long)]
        k: Option<usize>,

        #[arg(short, long)]
        year: i32,
    },

    /// Launch counters per provider
    Providers,

    /// Every ranking from one snapshot
    Report {
        #[arg(short, long)]
        k: Option<usize>,

        #[arg(short, long)]
        orbit: Option<String>,

        #[arg(short, long)]
        year: i32,

        #[arg(long, value_enum, default_value_t = ReportFormat::Json)]
        format: ReportFormat,
    },
}

/// Run `command` and render its result for stdout.
pub fn run(engine: &LaunchAnalytics, command: &Command, config: &Config) -> Result<String> {
    let k_or_default = |k: &Option<usize>| k.unwrap_or(config.default_k);
    let orbit_or_default =
        |orbit: &Option<String>| orbit.clone().unwrap_or_else(|| config.default_orbit.clone());

    let output = match command {
        Command::Rockets { k } => {
            serde_json::to_string_pretty(&engine.most_launched_rockets(k_or_default(k))?)?
        }
        Command::Reliable { k } => serde_json::to_string_pretty(
            &engine.most_reliable_launch_service_providers(k_or_default(k))?,
        )?,
        Command::Unreliable { k } => serde_json::to_string_pretty(
            &engine.most_unreliable_launch_service_providers(k_or_default(k))?,
        )?,
        Command::Recent { k } => {
            serde_json::to_string_pretty(&engine.most_recent_launches(k_or_default(k))?)?
        }
        Command::Expensive { k } => {
            serde_json::to_string_pretty(&engine.most_expensive_launches(k_or_default(k))?)?
        }
        Command::DominantCountry { orbit } => {
            let orbit = orbit_or_default(orbit);
            let country = engine.dominant_country(&orbit)?;
            serde_json::to_string_pretty(&json!({ "orbit": orbit, "country": country }))?
        }
        Command::Revenue { k, year } => serde_json::to_string_pretty(
            &engine.highest_revenue_launch_service_providers(k_or_default(k), *year)?,
        )?,
        Command::Providers => serde_json::to_string_pretty(&engine.provider_stats()?)?,
        Command::Report {
            k,
            orbit,
            year,
            format,
        } => {
            let params = ReportParams {
                k: k_or_default(k),
                orbit: orbit_or_default(orbit),
                year: *year,
            };
            match format {
                ReportFormat::Json => engine.generate_report_json(&params)?,
                ReportFormat::Markdown => engine.generate_report_markdown(&params)?,
            }
        }
    };

    Ok(output)
}
