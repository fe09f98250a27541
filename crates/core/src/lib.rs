// Eurovisor Core - Domain Logic, Ports & Fetch Orchestration
// NO infrastructure dependencies (ports and adapters)

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
