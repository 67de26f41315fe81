// Server
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: &str = "3000";
pub const HOST_ENV: &str = "JOURNAL_HOST";
pub const PORT_ENV: &str = "JOURNAL_PORT";

/// Version of the journal package
pub const JOURNAL_VERSION: &str = env!("CARGO_PKG_VERSION");

// Responses
pub const ENTRY_RECEIVED_MSG: &str = "Entry received";
