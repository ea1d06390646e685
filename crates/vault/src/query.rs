//! Literal quoting for the Vault query language.
//!
//! The query language has no bind parameters, so values are spliced into the
//! query text. Only values drawn from the record-id alphabet are accepted.

use crate::error::{Result, VaultError};

/// Validates `value` and returns it wrapped in single quotes.
pub fn quote_literal(value: &str) -> Result<String> {
    if is_safe_literal(value) {
        Ok(format!("'{}'", value))
    } else {
        Err(VaultError::InvalidLiteral(value.to_string()))
    }
}

fn is_safe_literal(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}
