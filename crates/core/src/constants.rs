/// Date format of Vault date fields.
pub const VAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Maximum in-flight per-record lookup queries.
pub const DEFAULT_LOOKUP_CONCURRENCY: usize = 4;

/// Deep-link id prefix used when a record id is shorter than three characters.
pub const FALLBACK_LINK_PREFIX: &str = "00C";
