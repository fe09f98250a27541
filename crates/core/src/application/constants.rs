// Fetch constants (no magic values)

/// Concurrent contest requests per batch (browsers allow ~6 per host)
pub const DEFAULT_BATCH_SIZE: usize = 6;

/// Upper bound accepted for a configured batch size
pub const MAX_BATCH_SIZE: usize = 32;
