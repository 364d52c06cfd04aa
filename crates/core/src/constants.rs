/// Constants used throughout the outcome workspace
// Service status codes
pub const DEFAULT_SUCCESS_STATUS_CODE: u16 = 200;
pub const DEFAULT_FAILURE_STATUS_CODE: u16 = 500;

// Aggregation
pub const COMBINED_MESSAGE_SEPARATOR: &str = "\n";

// Environment variable names
pub const OUTCOME_LOG_VAR: &str = "OUTCOME_LOG";

// Logging
pub const DEFAULT_LOG_FILTER: &str = "info";
