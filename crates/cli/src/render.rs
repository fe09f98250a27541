//! Terminal rendering of explorer state

use colored::Colorize;
use eurovisor_core::application::ExplorerState;
use eurovisor_core::domain::{
    Badge, ContestantDetails, CountryDirectory, EntryResult, FilterState, StatusMessage, Year,
};
use tabled::settings::Style;
use tabled::{Table, Tabled};

pub const NO_RESULTS: &str = "No results found. Try adjusting your filters.";

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "Year")]
    year: Year,
    #[tabled(rename = "Country")]
    country: String,
    #[tabled(rename = "Artist")]
    artist: String,
    #[tabled(rename = "Song")]
    song: String,
    #[tabled(rename = "Result")]
    result: String,
    #[tabled(rename = "Video")]
    video: String,
}

/// Badge with its icon, or empty
pub fn badge_label(entry: &EntryResult) -> String {
    match Badge::for_entry(entry) {
        Some(badge) => match badge.icon() {
            Some(icon) => format!("{} {}", icon, badge),
            None => badge.to_string(),
        },
        None => String::new(),
    }
}

pub fn results_table(entries: &[EntryResult]) -> String {
    let rows: Vec<EntryRow> = entries
        .iter()
        .map(|e| EntryRow {
            year: e.year,
            country: format!("{} ({})", e.country_name, e.country),
            artist: e.artist.clone(),
            song: e.song.clone(),
            result: badge_label(e),
            video: e.video_url.clone().unwrap_or_default(),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

#[derive(Tabled)]
struct CountryRow {
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Country")]
    name: String,
}

pub fn countries_table(countries: &CountryDirectory) -> String {
    let rows: Vec<CountryRow> = countries
        .sorted_by_name()
        .into_iter()
        .map(|(code, name)| CountryRow {
            code: code.to_string(),
            name: name.to_string(),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Years newest first, ten per line
pub fn years_list(years: &[Year]) -> String {
    let mut years = years.to_vec();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years
        .chunks(10)
        .map(|line| {
            line.iter()
                .map(|y| y.to_string())
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn print_contestant(year: Year, details: &ContestantDetails, countries: &CountryDirectory) {
    println!(
        "{}",
        format!("{} - {}", details.artist, details.song).cyan().bold()
    );
    println!();
    println!("  {} {}", "Year:".bold(), year);
    println!(
        "  {} {} ({})",
        "Country:".bold(),
        countries.name_for(&details.country),
        details.country
    );
    if let Some(url) = &details.url {
        println!("  {} {}", "Link:".bold(), url);
    }
    match details.primary_video_url() {
        Some(video) => println!("  {} {}", "Video:".bold(), video),
        None => println!("  {} {}", "Video:".bold(), "none".dimmed()),
    }
}

/// Result count, plus top-three finishes when there are any
pub fn summary_line(entries: &[EntryResult]) -> String {
    let podium = entries
        .iter()
        .filter(|e| Badge::for_entry(e).is_some_and(|b| b.is_podium()))
        .count();
    if podium == 0 {
        format!("{} result(s)", entries.len())
    } else {
        format!("{} result(s), {} on the podium", entries.len(), podium)
    }
}

pub fn status_line(filter: &FilterState) -> String {
    StatusMessage::for_filter(filter).to_string()
}

pub fn print_loading(filter: &FilterState) {
    println!("{} {}", status_line(filter).cyan().bold(), "(loading...)".dimmed());
}

pub fn print_state(state: &ExplorerState) {
    println!("{}", status_line(&state.filter).cyan().bold());

    if let Some(error) = &state.error {
        println!("{} {}", "Error:".red().bold(), error.red());
    } else if state.results.is_empty() {
        println!("{}", NO_RESULTS.yellow());
    } else {
        println!("{}", results_table(&state.results));
        println!("{}", summary_line(&state.results).dimmed());
    }
}
