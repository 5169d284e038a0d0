mod callback;
mod strip;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "frontdesk-cli")]
#[command(about = "Visitor cohort and call-to-action tooling")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Evaluate the personalization strip for a set of visitor signals
    Strip {
        /// Evaluation instant (RFC 3339); defaults to now
        #[arg(long, value_parser = parse_instant)]
        at: Option<DateTime<Utc>>,
        /// City as sent by the geo header (may be URL-encoded)
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        travel_mode: Option<String>,
        #[arg(long)]
        travel_time: Option<String>,
        #[arg(long)]
        travel_distance: Option<String>,
        /// Prior visit count, as stored in the visit cookie
        #[arg(long)]
        visits: Option<u32>,
        #[arg(long, default_value = "")]
        service: String,
        #[arg(long, default_value = "")]
        suburb: String,
        #[arg(long)]
        emergency: bool,
    },
    /// Submit a callback request to the lead endpoint
    Callback {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long, default_value = "")]
        service: String,
        #[arg(long, default_value = "")]
        suburb: String,
        #[arg(long)]
        emergency: bool,
    },
}

fn parse_instant(raw: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 timestamp: {e}"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = frontdesk_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Strip {
            at,
            city,
            travel_mode,
            travel_time,
            travel_distance,
            visits,
            service,
            suburb,
            emergency,
        } => {
            let practice = strip::load_practice_or_default(&config)?;
            let raw = frontdesk_engine::RawSignals {
                city,
                travel_mode,
                travel_time,
                travel_distance,
                visit_count: visits.map(|v| v.to_string()),
                now: at.unwrap_or_else(Utc::now),
            };
            let request = frontdesk_engine::StripRequest {
                service_slug: service,
                suburb_slug: suburb,
                emergency,
            };
            strip::run_strip(&raw, &request, &practice)?;
        }
        Commands::Callback {
            name,
            phone,
            service,
            suburb,
            emergency,
        } => {
            callback::run_callback(&config, &name, &phone, &service, &suburb, emergency).await?;
        }
    }

    Ok(())
}
