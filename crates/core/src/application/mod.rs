// Application Layer - Fetch strategies and filter-driven orchestration

pub mod cancel;
pub mod constants;
pub mod explorer;
pub mod fetch;

// Re-exports
pub use cancel::{cancel_channel, CancelSender, CancelToken, Cancelled};
pub use explorer::{Explorer, ExplorerState};
pub use fetch::{FetchError, FetchOptions, InitialData, ResultsPage};
