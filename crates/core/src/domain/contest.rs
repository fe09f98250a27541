// Contest Domain Model
//
// Mirrors the JSON shapes served by the contest API. Collections that the
// API omits for sparse years are optional so callers can tell "missing"
// from "empty".

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Contest year (e.g. 1956)
pub type Year = i32;

/// Contestant ID, unique within one contest
pub type ContestantId = u32;

/// Name of the final round
pub const FINAL_ROUND: &str = "final";

/// Element of `GET /contests`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestSummary {
    pub year: Year,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contestant {
    pub id: ContestantId,
    pub country: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub song: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub name: String,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub votes: HashMap<String, i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    pub contestant_id: ContestantId,
    #[serde(default)]
    pub running: Option<u32>,
    #[serde(default)]
    pub place: Option<u32>,
    #[serde(default)]
    pub scores: Vec<Score>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub name: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub performances: Option<Vec<Performance>>,
}

impl Round {
    pub fn is_final(&self) -> bool {
        self.name == FINAL_ROUND
    }

    pub fn is_semi_final(&self) -> bool {
        self.name.to_lowercase().contains("semi")
    }

    /// Performance of a contestant in this round, if they took part
    pub fn performance_of(&self, contestant_id: ContestantId) -> Option<&Performance> {
        self.performances
            .as_ref()?
            .iter()
            .find(|p| p.contestant_id == contestant_id)
    }
}

/// Full contest, `GET /contests/{year}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contest {
    pub year: Year,
    #[serde(default)]
    pub contestants: Option<Vec<Contestant>>,
    #[serde(default)]
    pub rounds: Option<Vec<Round>>,
}

impl Contest {
    /// The round named exactly "final"
    pub fn final_round(&self) -> Option<&Round> {
        self.rounds.as_ref()?.iter().find(|r| r.is_final())
    }

    pub fn semi_final_rounds(&self) -> impl Iterator<Item = &Round> {
        self.rounds
            .iter()
            .flatten()
            .filter(|r| r.is_semi_final())
    }

    pub fn contestant_by_id(&self, id: ContestantId) -> Option<&Contestant> {
        self.contestants.as_ref()?.iter().find(|c| c.id == id)
    }

    pub fn contestant_from(&self, country: &str) -> Option<&Contestant> {
        self.contestants
            .as_ref()?
            .iter()
            .find(|c| c.country == country)
    }

    /// Contestant placed first in the final round
    pub fn winner(&self) -> Option<&Contestant> {
        let winning = self
            .final_round()?
            .performances
            .as_ref()?
            .iter()
            .find(|p| p.place == Some(1))?;
        self.contestant_by_id(winning.contestant_id)
    }

    /// True when the contestant appeared in a semi-final
    pub fn appeared_in_semi_final(&self, contestant_id: ContestantId) -> bool {
        self.semi_final_rounds()
            .any(|r| r.performance_of(contestant_id).is_some())
    }
}

/// `GET /contests/{year}/contestants/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestantDetails {
    pub id: ContestantId,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub song: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub video_urls: Vec<String>,
}

impl ContestantDetails {
    pub fn primary_video_url(&self) -> Option<&str> {
        self.video_urls.first().map(String::as_str)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn contestant(id: ContestantId, country: &str) -> Contestant {
        Contestant {
            id,
            country: country.to_string(),
            artist: format!("Artist {}", id),
            song: format!("Song {}", id),
            url: None,
        }
    }

    pub fn performance(contestant_id: ContestantId, place: u32) -> Performance {
        Performance {
            contestant_id,
            running: None,
            place: Some(place),
            scores: Vec::new(),
        }
    }

    pub fn round(name: &str, performances: Vec<Performance>) -> Round {
        Round {
            name: name.to_string(),
            date: None,
            performances: Some(performances),
        }
    }

    /// Contest with one semi-final: SE wins, NO second, FI (id 3) out in the semi
    pub fn contest_2023() -> Contest {
        Contest {
            year: 2023,
            contestants: Some(vec![
                contestant(1, "NO"),
                contestant(2, "SE"),
                contestant(3, "FI"),
            ]),
            rounds: Some(vec![
                round("semifinal1", vec![performance(3, 11), performance(2, 1)]),
                round("final", vec![performance(1, 2), performance(2, 1)]),
            ]),
        }
    }
}
