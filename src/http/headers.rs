use std::collections::BTreeMap;

use crate::error::RequestError;

/// Parses the per-case header column: a flat JSON object of strings.
///
/// An empty column yields no headers.
///
/// # Errors
///
/// Returns [`RequestError::HeaderParse`] when the column is not a JSON object
/// whose values are all strings.
pub fn parse_header_map(headers_json: &str) -> Result<BTreeMap<String, String>, RequestError> {
    if headers_json.is_empty() {
        return Ok(BTreeMap::new());
    }
    serde_json::from_str(headers_json).map_err(|source| RequestError::HeaderParse { source })
}
