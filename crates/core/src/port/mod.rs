// Port Layer - Interfaces for external dependencies

pub mod contest_api;

// Re-exports
pub use contest_api::ContestApi;
