//! Eurovisor CLI - explore Eurovision Song Contest results from the terminal

mod config;
mod explore;
mod logging;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use eurovisor_core::application::{Explorer, FetchError};
use eurovisor_core::domain::filter::{parse_country_selection, parse_year};
use eurovisor_core::domain::{ContestantId, CountryDirectory, FilterState, Year};
use eurovisor_core::port::ContestApi;
use eurovisor_infra_http::HttpContestApi;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::debug;

#[derive(Parser)]
#[command(name = "eurovisor")]
#[command(about = "Eurovision Song Contest results explorer", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Contest API base URL
    #[arg(long, global = true, env = "EUROVISOR_API_URL")]
    api_url: Option<String>,

    /// Configuration file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Concurrent requests per batch
    #[arg(long, global = true)]
    batch_size: Option<usize>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show results for a year and/or country
    Results {
        /// Contest year, or "all"
        #[arg(short, long, default_value = "all")]
        year: String,

        /// Country code or name, or "all"
        #[arg(short, long, default_value = "all")]
        country: String,

        /// Look up each entry's video
        #[arg(long)]
        videos: bool,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// List participating countries
    Countries,

    /// List contest years
    Years,

    /// Show one contestant with its videos
    Contestant {
        /// Contest year
        year: Year,

        /// Contestant id within the contest
        id: ContestantId,
    },

    /// Interactive mode: change filters and watch results update
    Explore {
        /// Look up each entry's video
        #[arg(long)]
        videos: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let mut settings = config::load_settings(cli.config.as_deref())?;
    if let Some(api_url) = cli.api_url {
        settings.api_base_url = api_url;
    }
    if let Some(batch_size) = cli.batch_size {
        settings.batch_size = batch_size;
    }
    if let Commands::Results { videos: true, .. } | Commands::Explore { videos: true } =
        &cli.command
    {
        settings.resolve_videos = true;
    }
    debug!(?settings, "Settings loaded");

    let api = Arc::new(
        HttpContestApi::new(&settings.http_config()).context("Failed to create API client")?,
    );

    match cli.command {
        Commands::Results {
            year,
            country,
            json,
            ..
        } => {
            let filter = FilterState::default()
                .with_year(parse_year(&year)?)
                .with_country(parse_country_selection(&country)?);
            let explorer = Explorer::new(api, settings.fetch_options())?;
            return run_results(&explorer, filter, json).await;
        }

        Commands::Countries => {
            let countries = api
                .countries()
                .await
                .context("Failed to load countries")?;
            println!("{}", render::countries_table(&CountryDirectory::new(countries)));
        }

        Commands::Years => {
            let years = api.years().await.context("Failed to load contest years")?;
            println!("{}", "Eurovision contests".cyan().bold());
            println!();
            println!("{}", render::years_list(&years));
        }

        Commands::Contestant { year, id } => {
            let (details, countries) = tokio::try_join!(
                api.contestant_details(year, id),
                api.countries()
            )
            .with_context(|| format!("Failed to load contestant {} of {}", id, year))?;
            render::print_contestant(year, &details, &CountryDirectory::new(countries));
        }

        Commands::Explore { .. } => {
            let explorer = Arc::new(Explorer::new(api, settings.fetch_options())?);
            explore::run(explorer).await?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// One-shot fetch; Ctrl-C cancels the request in flight
async fn run_results(explorer: &Explorer, filter: FilterState, json: bool) -> Result<ExitCode> {
    if !json {
        render::print_loading(&filter);
    }

    let outcome = tokio::select! {
        outcome = explorer.apply_filter(filter) => outcome,
        _ = tokio::signal::ctrl_c() => {
            explorer.cancel();
            Err(FetchError::Cancelled)
        }
    };

    match outcome {
        Err(FetchError::Cancelled) => {
            eprintln!("{}", "Cancelled".yellow());
            Ok(ExitCode::FAILURE)
        }
        Err(_) if !json => {
            render::print_state(&explorer.snapshot());
            Ok(ExitCode::FAILURE)
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            Ok(ExitCode::FAILURE)
        }
        Ok(page) if json => {
            println!("{}", serde_json::to_string_pretty(&page.entries)?);
            Ok(ExitCode::SUCCESS)
        }
        Ok(_) => {
            render::print_state(&explorer.snapshot());
            Ok(ExitCode::SUCCESS)
        }
    }
}
