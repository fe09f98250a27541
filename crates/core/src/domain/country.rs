// Country codes and names
//
// The API keys everything by a two-letter code. The directory served by
// `GET /countries` is authoritative; the built-in table covers lookups made
// before it has loaded (status messages, parsing user input).

use super::error::{DomainError, Result};
use std::collections::HashMap;

/// Two-letter country code as used by the API (e.g. "SE")
pub type CountryCode = String;

/// Built-in (name, code) table, including historical participants
pub const KNOWN_COUNTRIES: &[(&str, &str)] = &[
    ("Albania", "AL"),
    ("Andorra", "AD"),
    ("Armenia", "AM"),
    ("Australia", "AU"),
    ("Austria", "AT"),
    ("Azerbaijan", "AZ"),
    ("Belarus", "BY"),
    ("Belgium", "BE"),
    ("Bosnia & Herzegovina", "BA"),
    ("Bulgaria", "BG"),
    ("Croatia", "HR"),
    ("Cyprus", "CY"),
    ("Czech Republic", "CZ"),
    ("Denmark", "DK"),
    ("Estonia", "EE"),
    ("Finland", "FI"),
    ("France", "FR"),
    ("Georgia", "GE"),
    ("Germany", "DE"),
    ("Greece", "GR"),
    ("Hungary", "HU"),
    ("Iceland", "IS"),
    ("Ireland", "IE"),
    ("Israel", "IL"),
    ("Italy", "IT"),
    ("Latvia", "LV"),
    ("Lithuania", "LT"),
    ("Luxembourg", "LU"),
    ("Malta", "MT"),
    ("Moldova", "MD"),
    ("Monaco", "MC"),
    ("Montenegro", "ME"),
    ("Morocco", "MA"),
    ("Netherlands", "NL"),
    ("North Macedonia", "MK"),
    ("Norway", "NO"),
    ("Poland", "PL"),
    ("Portugal", "PT"),
    ("Romania", "RO"),
    ("Russia", "RU"),
    ("San Marino", "SM"),
    ("Serbia", "RS"),
    ("Serbia & Montenegro", "CS"),
    ("Slovakia", "SK"),
    ("Slovenia", "SI"),
    ("Spain", "ES"),
    ("Sweden", "SE"),
    ("Switzerland", "CH"),
    ("Turkey", "TR"),
    ("Ukraine", "UA"),
    ("United Kingdom", "GB"),
    ("Yugoslavia", "YU"),
];

/// Name from the built-in table
pub fn builtin_name(code: &str) -> Option<&'static str> {
    KNOWN_COUNTRIES
        .iter()
        .find(|(_, c)| c.eq_ignore_ascii_case(code))
        .map(|(name, _)| *name)
}

/// Code from the built-in table (case-insensitive name match)
pub fn builtin_code(name: &str) -> Option<&'static str> {
    let name = name.trim();
    KNOWN_COUNTRIES
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, code)| *code)
}

/// Parse user input into a country code.
///
/// Accepts a known country name ("Sweden") or any two-letter code ("se").
pub fn parse_country(input: &str) -> Result<CountryCode> {
    let input = input.trim();
    if let Some(code) = builtin_code(input) {
        return Ok(code.to_string());
    }
    if input.len() == 2 && input.chars().all(|c| c.is_ascii_alphabetic()) {
        return Ok(input.to_ascii_uppercase());
    }
    Err(DomainError::UnknownCountry(input.to_string()))
}

/// Code -> name lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryDirectory {
    names: HashMap<CountryCode, String>,
}

impl CountryDirectory {
    pub fn new(names: HashMap<CountryCode, String>) -> Self {
        Self { names }
    }

    /// Directory seeded from the built-in table
    pub fn builtin() -> Self {
        Self::new(
            KNOWN_COUNTRIES
                .iter()
                .map(|(name, code)| (code.to_string(), name.to_string()))
                .collect(),
        )
    }

    /// Display name for a code, falling back to the code itself
    pub fn name_for<'a>(&'a self, code: &'a str) -> &'a str {
        self.names.get(code).map(String::as_str).unwrap_or(code)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Entries sorted by name
    pub fn sorted_by_name(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .names
            .iter()
            .map(|(code, name)| (code.as_str(), name.as_str()))
            .collect();
        entries.sort_by(|a, b| a.1.to_lowercase().cmp(&b.1.to_lowercase()));
        entries
    }
}
