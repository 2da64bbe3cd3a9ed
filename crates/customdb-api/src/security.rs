//! Input validation for query text
//!
//! Checks applied before text reaches the lexer, so that callers get a
//! clear error for empty input and oversized input never gets copied into
//! the lexer's character buffer.

use customdb_core::error::{Error, Result};

/// Maximum accepted query length, in bytes
pub const MAX_QUERY_LENGTH: usize = 1024 * 1024; // 1 MB

/// Validates SQL query string
///
/// # Security
///
/// - Prevents oversized queries (>1MB)
/// - Prevents empty queries
///
/// # Errors
///
/// Returns Error::InvalidInput if validation fails
#[inline]
pub fn validate_query(query: &str) -> Result<()> {
    if query.is_empty() {
        return Err(Error::InvalidInput("Query cannot be empty".to_string()));
    }

    if query.len() > MAX_QUERY_LENGTH {
        return Err(Error::InvalidInput(format!(
            "Query length {} exceeds maximum {}",
            query.len(),
            MAX_QUERY_LENGTH
        )));
    }

    Ok(())
}
