//! Interactive explore mode
//!
//! Reads filter commands from stdin. Each filter change runs in the
//! background and supersedes the previous one; a renderer task prints every
//! settled state.

use crate::render;
use anyhow::Result;
use colored::Colorize;
use eurovisor_core::application::{Explorer, ExplorerState};
use eurovisor_core::domain::filter::{parse_country_selection, parse_year};
use eurovisor_core::domain::{CountryCode, FilterState, Selection, Year};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

const HELP: &str = "\
Commands:
  year <YEAR|all>        filter by contest year
  country <CODE|all>     filter by country (code or name)
  clear                  reset both filters
  status                 show the current results again
  help                   show this help
  quit                   leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExploreCommand {
    Year(Selection<Year>),
    Country(Selection<CountryCode>),
    Clear,
    Status,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> std::result::Result<ExploreCommand, String> {
    let line = line.trim();
    let (verb, arg) = match line.split_once(char::is_whitespace) {
        Some((verb, arg)) => (verb, arg.trim()),
        None => (line, ""),
    };

    match verb.to_lowercase().as_str() {
        "year" | "y" => parse_year(arg)
            .map(ExploreCommand::Year)
            .map_err(|e| e.to_string()),
        "country" | "c" => parse_country_selection(arg)
            .map(ExploreCommand::Country)
            .map_err(|e| e.to_string()),
        "clear" => Ok(ExploreCommand::Clear),
        "status" | "s" => Ok(ExploreCommand::Status),
        "help" | "h" | "?" => Ok(ExploreCommand::Help),
        "quit" | "q" | "exit" => Ok(ExploreCommand::Quit),
        "" => Err("empty command".to_string()),
        other => Err(format!("unknown command '{}', try 'help'", other)),
    }
}

/// Filter after applying `command`, or None if it does not change filters
fn next_filter(current: &FilterState, command: &ExploreCommand) -> Option<FilterState> {
    match command {
        ExploreCommand::Year(year) => Some(current.clone().with_year(year.clone())),
        ExploreCommand::Country(country) => Some(current.clone().with_country(country.clone())),
        ExploreCommand::Clear => Some(FilterState::default()),
        _ => None,
    }
}

pub async fn run(explorer: Arc<Explorer>) -> Result<()> {
    println!("{}", "Eurovisor explore mode. Type 'help' for commands.".bold());

    let renderer = spawn_renderer(explorer.subscribe());
    let mut filter = FilterState::default();
    let mut fetch = spawn_fetch(&explorer, filter.clone());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => None,
        };
        let Some(line) = line else { break };
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message.red());
                continue;
            }
        };

        match command {
            ExploreCommand::Quit => break,
            ExploreCommand::Help => println!("{}", HELP),
            ExploreCommand::Status => render::print_state(&explorer.snapshot()),
            change => {
                if let Some(next) = next_filter(&filter, &change) {
                    filter = next;
                    fetch = spawn_fetch(&explorer, filter.clone());
                }
            }
        }
    }

    explorer.cancel();
    fetch.abort();
    renderer.abort();
    debug!("Explore mode finished");
    Ok(())
}

fn spawn_fetch(explorer: &Arc<Explorer>, filter: FilterState) -> JoinHandle<()> {
    let explorer = Arc::clone(explorer);
    tokio::spawn(async move {
        if let Err(e) = explorer.apply_filter(filter).await {
            debug!(error = %e, "Fetch did not complete");
        }
    })
}

/// Prints a line when loading starts and the full state once it settles
fn spawn_renderer(mut rx: watch::Receiver<ExplorerState>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut last: Option<ExplorerState> = None;
        while rx.changed().await.is_ok() {
            let state = rx.borrow_and_update().clone();
            if !worth_printing(&state, last.as_ref()) {
                continue;
            }
            if state.loading {
                render::print_loading(&state.filter);
            } else {
                render::print_state(&state);
            }
            last = Some(state);
        }
    })
}

/// Whether `state` differs from the last printed one in a visible way
fn worth_printing(state: &ExplorerState, last: Option<&ExplorerState>) -> bool {
    match last {
        None => true,
        Some(last) => {
            state.loading != last.loading
                || state.filter != last.filter
                || state.error != last.error
                || state.results != last.results
        }
    }
}
