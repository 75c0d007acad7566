//! Exit code constants for the minuta CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable input, invalid config)
//! - 2: Validation failure (template lint found problems)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable files, malformed JSON/YAML.
pub const USER_ERROR: i32 = 1;

/// Validation failure: `minuta lint` found problems in a template.
pub const VALIDATION_FAILURE: i32 = 2;
