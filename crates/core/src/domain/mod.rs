// Domain Layer - Contest data, derivation rules and filter model

pub mod badge;
pub mod contest;
pub mod country;
pub mod entry;
pub mod error;
pub mod filter;

// Re-exports
pub use badge::Badge;
pub use contest::{
    Contest, ContestSummary, Contestant, ContestantDetails, ContestantId, Performance, Round,
    Score, Year,
};
pub use country::{CountryCode, CountryDirectory};
pub use entry::EntryResult;
pub use error::DomainError;
pub use filter::{FetchStrategy, FilterState, Selection, StatusMessage};
