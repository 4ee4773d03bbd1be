//! `guides` CLI — query guide availability, match guides and price bookings.
//!
//! Guide lists are read as a JSON array (the marketplace's camelCase shape)
//! from `-i <file>` or stdin.
//!
//! ## Usage
//!
//! ```sh
//! # Is a guide free on a date?
//! guides -i guides.json check --guide GP-1 --date 2025-11-05
//!
//! # Is a guide free for a 5-day tour?
//! guides -i guides.json range --guide GP-1 --start 2025-11-08 --days 5
//!
//! # List a guide's available dates
//! guides -i guides.json dates --guide GP-1 --from 2025-11-01 --to 2025-11-15
//!
//! # Search guides, or find substitutes for a guide who dropped out
//! guides -i guides.json match --language english --state kerala --from 2025-11-04 --to 2025-11-06
//! guides -i guides.json match --substitute-for GP-1 --from 2025-11-04 --to 2025-11-06
//!
//! # Read the period list for the date checks instead of the blocked dates
//! guides -i guides.json --source periods match --from 2025-11-04 --to 2025-11-06
//!
//! # Report overlapping availability periods
//! guides -i guides.json lint
//!
//! # Price a booking
//! guides quote --price 12500 --travelers 3 --discount 10
//! ```

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use guide_availability::{
    check_range, enumerate::to_iso_strings, find_first_open_window, find_open_windows,
    find_period_overlaps, find_substitutes, guides_from_json, parse_date, quote, reconcile,
    try_available_dates, AvailabilitySource, EngineOptions, Guide, GuideError, GuideFilter,
    GuideRepository, InMemoryGuideRepository, UnlistedPolicy,
};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "guides",
    version,
    about = "Guide availability and booking-eligibility tool"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Guide list JSON (reads from stdin if omitted)
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// Engine options JSON file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// What dates no availability period covers resolve to
    #[arg(long, global = true, value_enum)]
    unlisted: Option<Unlisted>,

    /// Availability representation used by date filters and reports
    #[arg(long, global = true, value_enum)]
    source: Option<Source>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Unlisted {
    Unavailable,
    Available,
}

#[derive(Clone, Copy, ValueEnum)]
enum Source {
    UnavailableDates,
    Periods,
    Combined,
}

#[derive(Subcommand)]
enum Commands {
    /// Is the guide available on a single date?
    Check {
        #[arg(long)]
        guide: String,
        #[arg(long)]
        date: String,
    },
    /// Is the guide available for every day of a tour?
    Range {
        #[arg(long)]
        guide: String,
        #[arg(long)]
        start: String,
        #[arg(long)]
        days: u32,
    },
    /// List the guide's available dates in a window, one per line
    Dates {
        #[arg(long)]
        guide: String,
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
    /// Print the profile ids of guides matching every given constraint
    Match {
        #[arg(long)]
        language: Option<String>,
        #[arg(long)]
        state: Option<String>,
        #[arg(long)]
        specialization: Option<String>,
        #[arg(long)]
        min_rating: Option<f64>,
        #[arg(long)]
        from: Option<String>,
        #[arg(long, requires = "from")]
        to: Option<String>,
        /// Exclude this guide and default to its languages
        #[arg(long)]
        substitute_for: Option<String>,
    },
    /// Print the guide's runs of consecutive available days as JSON
    Windows {
        #[arg(long)]
        guide: String,
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        /// Only print the first run of at least this many days
        #[arg(long)]
        min_days: Option<i64>,
    },
    /// Report overlapping periods for every guide as JSON
    Lint,
    /// Compare periods and blocked dates day by day as JSON
    Reconcile {
        #[arg(long)]
        guide: String,
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
    /// Price a booking as JSON
    Quote {
        /// Price per traveler in cents
        #[arg(long)]
        price: u64,
        #[arg(long)]
        travelers: u32,
        /// Percentage discount, 0-100
        #[arg(long, default_value_t = 0)]
        discount: u8,
    },
}

#[derive(Serialize)]
struct LintEntry<'a> {
    guide: &'a str,
    first: usize,
    second: usize,
    overlap_days: i64,
    contradictory: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let options = load_options(&cli)?;
    debug!(?options, "engine options");

    if let Commands::Quote {
        price,
        travelers,
        discount,
    } = cli.command
    {
        let q = quote(price, travelers, discount).context("Failed to price booking")?;
        println!("{}", serde_json::to_string_pretty(&q)?);
        return Ok(());
    }

    let json = read_input(cli.input.as_deref())?;
    let repo = InMemoryGuideRepository::new(
        guides_from_json(&json).context("Failed to parse guide list")?,
        options,
    );
    let options = *repo.options();
    let policy = options.unlisted_policy;

    match cli.command {
        Commands::Check { guide, date } => {
            let guide = find_guide(&repo, &guide)?;
            let date = parse_date(&date)?;
            print_verdict(guide.is_available_on(date, policy));
        }
        Commands::Range { guide, start, days } => {
            let guide = find_guide(&repo, &guide)?;
            let start = parse_date(&start)?;
            print_verdict(check_range(&guide.availability_periods, start, days, policy)?);
        }
        Commands::Dates { guide, from, to } => {
            let guide = find_guide(&repo, &guide)?;
            let (start, end) = (parse_date(&from)?, parse_date(&to)?);
            let dates = try_available_dates(&guide.availability_periods, start, end, policy)?;
            for line in to_iso_strings(dates) {
                println!("{}", line);
            }
        }
        Commands::Match {
            language,
            state,
            specialization,
            min_rating,
            from,
            to,
            substitute_for,
        } => {
            let mut filter = GuideFilter {
                language,
                state,
                specialization,
                min_rating,
                ..GuideFilter::default()
            };
            if let Some(from) = from {
                let start = parse_date(&from)?;
                let end = to.as_deref().map(parse_date).transpose()?;
                filter.start_date = Some(start);
                filter.end_date = end;
            }
            let matched = match substitute_for.as_deref() {
                Some(replaced) => find_substitutes(repo.guides(), replaced, &filter, &options),
                None => repo.list(&filter),
            };
            let ids: Vec<&str> = matched
                .iter()
                .map(|g| g.guide_profile_id.as_str())
                .collect();
            println!("{}", serde_json::to_string(&ids)?);
        }
        Commands::Windows {
            guide,
            from,
            to,
            min_days,
        } => {
            let guide = find_guide(&repo, &guide)?;
            let (start, end) = parse_window(&from, &to)?;
            let periods = &guide.availability_periods;
            let out = match min_days {
                Some(min) => serde_json::to_string_pretty(&find_first_open_window(
                    periods, start, end, policy, min,
                ))?,
                None => {
                    serde_json::to_string_pretty(&find_open_windows(periods, start, end, policy))?
                }
            };
            println!("{}", out);
        }
        Commands::Lint => {
            let entries: Vec<LintEntry<'_>> = repo
                .guides()
                .iter()
                .flat_map(|g| {
                    find_period_overlaps(&g.availability_periods)
                        .into_iter()
                        .map(move |o| LintEntry {
                            guide: &g.guide_profile_id,
                            first: o.first,
                            second: o.second,
                            overlap_days: o.overlap_days,
                            contradictory: o.contradictory,
                        })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        Commands::Reconcile { guide, from, to } => {
            let guide = find_guide(&repo, &guide)?;
            let (start, end) = parse_window(&from, &to)?;
            let rec = reconcile(guide, start, end, policy);
            println!("{}", serde_json::to_string_pretty(&rec)?);
        }
        Commands::Quote { .. } => unreachable!("handled before reading input"),
    }

    Ok(())
}

/// Merge `--config` with the `--unlisted` / `--source` overrides.
fn load_options(cli: &Cli) -> Result<EngineOptions> {
    let mut options = match &cli.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            EngineOptions::from_json(&raw)
                .with_context(|| format!("Invalid config: {}", path.display()))?
        }
        None => EngineOptions::default(),
    };
    if let Some(unlisted) = cli.unlisted {
        options.unlisted_policy = match unlisted {
            Unlisted::Unavailable => UnlistedPolicy::Unavailable,
            Unlisted::Available => UnlistedPolicy::Available,
        };
    }
    if let Some(source) = cli.source {
        options.availability_source = match source {
            Source::UnavailableDates => AvailabilitySource::UnavailableDates,
            Source::Periods => AvailabilitySource::Periods,
            Source::Combined => AvailabilitySource::Combined,
        };
    }
    Ok(options)
}

fn find_guide<'a>(repo: &'a InMemoryGuideRepository, id: &str) -> Result<&'a Guide> {
    repo.find_by_id(id)
        .ok_or_else(|| GuideError::GuideNotFound(id.to_string()).into())
}

fn parse_window(from: &str, to: &str) -> Result<(NaiveDate, NaiveDate)> {
    let start = parse_date(from)?;
    let end = parse_date(to)?;
    if end < start {
        anyhow::bail!("--to {} is before --from {}", to, from);
    }
    Ok((start, end))
}

fn print_verdict(available: bool) {
    println!("{}", if available { "available" } else { "unavailable" });
}

fn read_input(path: Option<&std::path::Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
