// Filter State - (year or all, country or all) selects the fetch strategy

use super::contest::Year;
use super::country::{builtin_name, parse_country, CountryCode};
use super::error::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Either everything, or one value
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T> Selection<T> {
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Selection::All => None,
            Selection::Only(value) => Some(value),
        }
    }
}

impl<T> From<Option<T>> for Selection<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Selection::All, Selection::Only)
    }
}

fn is_all_keyword(input: &str) -> bool {
    let input = input.trim();
    input.is_empty() || input.eq_ignore_ascii_case("all")
}

/// Parse "all" / "" / "2019"
pub fn parse_year(input: &str) -> Result<Selection<Year>> {
    if is_all_keyword(input) {
        return Ok(Selection::All);
    }
    input
        .trim()
        .parse::<Year>()
        .map(Selection::Only)
        .map_err(|_| DomainError::InvalidYear(input.trim().to_string()))
}

/// Parse "all" / "" / "SE" / "Sweden"
pub fn parse_country_selection(input: &str) -> Result<Selection<CountryCode>> {
    if is_all_keyword(input) {
        return Ok(Selection::All);
    }
    parse_country(input).map(Selection::Only)
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub year: Selection<Year>,
    pub country: Selection<CountryCode>,
}

/// Which fetch runs for a filter combination
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStrategy {
    Winners,
    CountryEntries(CountryCode),
    YearEntries(Year),
    CountryInYear(Year, CountryCode),
}

impl FilterState {
    pub fn new(year: Option<Year>, country: Option<CountryCode>) -> Self {
        Self {
            year: year.into(),
            country: country.into(),
        }
    }

    pub fn with_year(mut self, year: Selection<Year>) -> Self {
        self.year = year;
        self
    }

    pub fn with_country(mut self, country: Selection<CountryCode>) -> Self {
        self.country = country;
        self
    }

    pub fn strategy(&self) -> FetchStrategy {
        match (&self.year, &self.country) {
            (Selection::All, Selection::All) => FetchStrategy::Winners,
            (Selection::All, Selection::Only(code)) => FetchStrategy::CountryEntries(code.clone()),
            (Selection::Only(year), Selection::All) => FetchStrategy::YearEntries(*year),
            (Selection::Only(year), Selection::Only(code)) => {
                FetchStrategy::CountryInYear(*year, code.clone())
            }
        }
    }
}

impl fmt::Display for FilterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self
            .year
            .as_option()
            .map_or_else(|| "all".to_string(), |y| y.to_string());
        let country = self.country.as_option().map_or("all", String::as_str);
        write!(f, "year={} country={}", year, country)
    }
}

/// Heading describing what the current filter shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub icon: &'static str,
    pub text: String,
}

impl StatusMessage {
    pub fn for_filter(filter: &FilterState) -> Self {
        let name_of = |code: &str| builtin_name(code).unwrap_or(code).to_string();

        match filter.strategy() {
            FetchStrategy::CountryInYear(year, code) => Self {
                icon: "🎯",
                text: format!("{}'s entry in the {} Eurovision", name_of(&code), year),
            },
            FetchStrategy::YearEntries(year) => Self {
                icon: "📅",
                text: format!("All entries from the {} Eurovision", year),
            },
            FetchStrategy::CountryEntries(code) => Self {
                icon: "🌍",
                text: format!("All Eurovision entries from {}", name_of(&code)),
            },
            FetchStrategy::Winners => Self {
                icon: "🏆",
                text: "Eurovision Winners by Year".to_string(),
            },
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_selection() {
        assert_eq!(FilterState::default().strategy(), FetchStrategy::Winners);
        assert_eq!(
            FilterState::new(None, Some("SE".into())).strategy(),
            FetchStrategy::CountryEntries("SE".into())
        );
        assert_eq!(
            FilterState::new(Some(1974), None).strategy(),
            FetchStrategy::YearEntries(1974)
        );
        assert_eq!(
            FilterState::new(Some(1974), Some("SE".into())).strategy(),
            FetchStrategy::CountryInYear(1974, "SE".into())
        );
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("all").unwrap(), Selection::All);
        assert_eq!(parse_year(" ALL ").unwrap(), Selection::All);
        assert_eq!(parse_year("").unwrap(), Selection::All);
        assert_eq!(parse_year("1998").unwrap(), Selection::Only(1998));
        assert_eq!(
            parse_year("nineteen"),
            Err(DomainError::InvalidYear("nineteen".into()))
        );
    }

    #[test]
    fn test_parse_country_selection() {
        assert_eq!(parse_country_selection("All").unwrap(), Selection::All);
        assert_eq!(
            parse_country_selection("ireland").unwrap(),
            Selection::Only("IE".to_string())
        );
    }

    #[test]
    fn test_status_messages() {
        let both = FilterState::new(Some(1974), Some("SE".into()));
        assert_eq!(
            StatusMessage::for_filter(&both).text,
            "Sweden's entry in the 1974 Eurovision"
        );

        let year = FilterState::new(Some(2012), None);
        assert_eq!(
            StatusMessage::for_filter(&year).text,
            "All entries from the 2012 Eurovision"
        );

        let country = FilterState::new(None, Some("XK".into()));
        let message = StatusMessage::for_filter(&country);
        assert_eq!(message.text, "All Eurovision entries from XK");
        assert_eq!(message.icon, "🌍");

        let none = StatusMessage::for_filter(&FilterState::default());
        assert_eq!(none.to_string(), "🏆 Eurovision Winners by Year");
    }

    #[test]
    fn test_display() {
        let filter = FilterState::new(Some(2001), Some("EE".into()));
        assert_eq!(filter.to_string(), "year=2001 country=EE");
        assert_eq!(FilterState::default().to_string(), "year=all country=all");
    }
}
