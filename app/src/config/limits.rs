/// Global limits for configuration validation
/// Minimum suggestion request timeout (seconds)
pub const MIN_SUGGESTION_TIMEOUT_SECS: u64 = 1;

/// Maximum reasonable suggestion request timeout (seconds)
pub const MAX_SUGGESTION_TIMEOUT_SECS: u64 = 120;
