use chrono::{Local, NaiveDate, TimeDelta};
use clap::{Parser, Subcommand};
use healthify_client::{ApiClient, ClientConfig, EntryQuery, DEFAULT_STATS_DAYS};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "healthify", about = "Query the Healthify tracking API")]
struct Cli {
    /// Overrides HEALTHIFY_API_URL.
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check the server is up.
    Health,
    /// Show today's entry, if any.
    Today,
    /// List entries, optionally filtered by date.
    Entries {
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
        /// Shorthand for --start <today minus N days>.
        #[arg(long, conflicts_with = "start")]
        last: Option<i64>,
    },
    /// Summary statistics.
    Stats {
        #[arg(long, default_value_t = DEFAULT_STATS_DAYS)]
        days: u32,
    },
    /// Known health issue types.
    IssueTypes,
    /// Workout routines.
    Workouts {
        /// Include inactive routines.
        #[arg(long)]
        all: bool,
    },
    /// One routine with its days and exercises.
    Routine { id: i64 },
    /// The workout day scheduled for today.
    WorkoutToday,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env();
    if let Some(url) = cli.api_url {
        config = ClientConfig::from_values(Some(url), None).with_timeout(config.timeout);
    }

    info!("using api at {}", config.base_url);
    let api = ApiClient::new(&config)?;

    match cli.command {
        Command::Health => print_json(&api.health().await?)?,
        Command::Today => print_json(&api.get_today().await?)?,
        Command::Entries {
            start,
            end,
            limit,
            last,
        } => {
            let start = match last {
                Some(days) => Some(days_before(Local::now().date_naive(), days)?),
                None => start,
            };
            let query = EntryQuery {
                start_date: start,
                end_date: end,
                limit,
            };
            print_json(&api.list_entries(&query).await?)?
        }
        Command::Stats { days } => print_json(&api.get_stats(days).await?)?,
        Command::IssueTypes => print_json(&api.list_issue_types().await?)?,
        Command::Workouts { all } => print_json(&api.list_workout_routines(!all).await?)?,
        Command::Routine { id } => print_json(&api.get_workout_routine(id).await?)?,
        Command::WorkoutToday => print_json(&api.get_todays_workout().await?)?,
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn days_before(today: NaiveDate, days: i64) -> Result<String, String> {
    TimeDelta::try_days(days)
        .and_then(|delta| today.checked_sub_signed(delta))
        .map(|date| date.to_string())
        .ok_or_else(|| format!("--last {days} is outside the supported date range"))
}
