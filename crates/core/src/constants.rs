/// Constants used throughout the volman codebase
// Environment variable names
pub const VOLMAN_MASTERS_VAR: &str = "VOLMAN_MASTERS";
pub const VOLMAN_USE_SSL_VAR: &str = "VOLMAN_USE_SSL";
pub const VOLMAN_LOG_VAR: &str = "VOLMAN_LOG";

// Separator for endpoint lists given through the environment
pub const MASTERS_SEPARATOR: char = ',';

// Logging
pub const DEFAULT_LOG_FILTER: &str = "info";

// Background work
pub const BACKGROUND_THREAD_PREFIX: &str = "volman-bg";

// Placeholder printed instead of secret material
pub const REDACTED: &str = "***";
