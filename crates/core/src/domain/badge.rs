// Result badge shown next to an entry

use super::contest::Year;
use super::entry::EntryResult;
use std::fmt;

/// The 2020 contest was cancelled; its entries never competed
pub const CANCELLED_YEAR: Year = 2020;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    CovidCancelled,
    Winner,
    NonQualifying,
    Place(u32),
}

impl Badge {
    /// First matching badge: cancelled year, winner, non-qualifier, placing
    pub fn for_entry(entry: &EntryResult) -> Option<Self> {
        if entry.year == CANCELLED_YEAR {
            Some(Badge::CovidCancelled)
        } else if entry.is_winner {
            Some(Badge::Winner)
        } else if !entry.did_qualify {
            Some(Badge::NonQualifying)
        } else {
            entry.place.map(Badge::Place)
        }
    }

    pub fn icon(&self) -> Option<&'static str> {
        match self {
            Badge::CovidCancelled => Some("😷"),
            Badge::Winner => Some("🏆"),
            Badge::NonQualifying => Some("❌"),
            Badge::Place(_) => None,
        }
    }

    /// Top three finish
    pub fn is_podium(&self) -> bool {
        match self {
            Badge::Winner => true,
            Badge::Place(place) => (1..=3).contains(place),
            _ => false,
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Badge::CovidCancelled => write!(f, "COVID Canceled"),
            Badge::Winner => write!(f, "Winner"),
            Badge::NonQualifying => write!(f, "Non-Qualifying"),
            Badge::Place(place) => write!(f, "{}{} place", place, ordinal_suffix(*place)),
        }
    }
}

/// English ordinal suffix: 1st, 2nd, 3rd, 4th, 11th, 12th, 13th, 21st...
pub fn ordinal_suffix(n: u32) -> &'static str {
    match (n % 10, n % 100) {
        (1, k) if k != 11 => "st",
        (2, k) if k != 12 => "nd",
        (3, k) if k != 13 => "rd",
        _ => "th",
    }
}
