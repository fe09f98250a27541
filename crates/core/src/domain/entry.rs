// Entry Result - one country's participation in one contest, with
// qualification and winner status derived client-side

use super::contest::{Contest, Contestant, ContestantId, Year};
use super::country::CountryDirectory;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryResult {
    pub year: Year,
    pub contestant_id: ContestantId,
    pub country: String,
    pub country_name: String,
    pub artist: String,
    pub song: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub is_winner: bool,
    pub did_qualify: bool,
}

impl EntryResult {
    fn base(year: Year, contestant: &Contestant, countries: &CountryDirectory) -> Self {
        Self {
            year,
            contestant_id: contestant.id,
            country: contestant.country.clone(),
            country_name: countries.name_for(&contestant.country).to_string(),
            artist: contestant.artist.clone(),
            song: contestant.song.clone(),
            place: None,
            video_url: None,
            is_winner: false,
            did_qualify: false,
        }
    }

    /// Derive an entry from the contestant's final-round performance.
    ///
    /// Performing in the final means qualified; place 1 means winner.
    /// Anyone else (semi-final only, or no final round at all) did not qualify.
    pub fn derive(
        year: Year,
        contest: &Contest,
        contestant: &Contestant,
        countries: &CountryDirectory,
    ) -> Self {
        let mut entry = Self::base(year, contestant, countries);

        if let Some(performance) = contest
            .final_round()
            .and_then(|r| r.performance_of(contestant.id))
        {
            entry.place = performance.place;
            entry.is_winner = performance.place == Some(1);
            entry.did_qualify = true;
        }

        entry
    }

    /// Winner entry of a contest, if the contest has one
    pub fn winner_of(year: Year, contest: &Contest, countries: &CountryDirectory) -> Option<Self> {
        let contestant = contest.winner()?;
        let mut entry = Self::base(year, contestant, countries);
        entry.place = Some(1);
        entry.is_winner = true;
        entry.did_qualify = true;
        Some(entry)
    }

    /// Ordering for a single contest's entries: winner, then finalists by
    /// place (unplaced last), then non-qualifiers alphabetically by country
    pub fn year_order(a: &Self, b: &Self) -> Ordering {
        b.is_winner
            .cmp(&a.is_winner)
            .then_with(|| b.did_qualify.cmp(&a.did_qualify))
            .then_with(|| {
                if a.did_qualify {
                    match (a.place, b.place) {
                        (Some(pa), Some(pb)) => pa.cmp(&pb),
                        (None, Some(_)) => Ordering::Greater,
                        (Some(_), None) => Ordering::Less,
                        (None, None) => Ordering::Equal,
                    }
                } else {
                    a.country_name
                        .to_lowercase()
                        .cmp(&b.country_name.to_lowercase())
                }
            })
    }

    pub fn sort_for_year(entries: &mut [Self]) {
        entries.sort_by(Self::year_order);
    }

    pub fn sort_newest_first(entries: &mut [Self]) {
        entries.sort_by(|a, b| b.year.cmp(&a.year));
    }
}
