// Eurovisor Infrastructure - HTTP Adapter
// Implements: ContestApi against the public contest REST API

mod client;
mod contest_api;

pub use client::{build_client, HttpApiConfig, DEFAULT_API_BASE_URL};
pub use contest_api::HttpContestApi;

// Note: reqwest::Error conversion is handled by helper functions
// due to Rust's orphan rules (cannot implement From<reqwest::Error> for AppError here)
