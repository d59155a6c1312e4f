use std::collections::HashSet;
use std::path::Path;

use tracing::warn;

use crate::parsing::ParseError;

/// Read marker gene identifiers, one per line.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or the errors of
/// [`parse_identifier_text`].
pub fn parse_identifier_file(path: &Path) -> Result<Vec<String>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_identifier_text(&content)
}

/// Parse identifiers from text.
///
/// Lines are trimmed and blank lines skipped. A repeated identifier is
/// reported and dropped, so the result holds distinct values in first-seen
/// order.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if no identifiers are found.
pub fn parse_identifier_text(text: &str) -> Result<Vec<String>, ParseError> {
    let mut ids = Vec::new();
    let mut seen = HashSet::new();

    for (i, line) in text.lines().enumerate() {
        let id = line.trim();
        if id.is_empty() {
            continue;
        }

        if !seen.insert(id) {
            warn!("Duplicate identifier '{id}' on line {} ignored", i + 1);
            continue;
        }

        ids.push(id.to_string());
    }

    if ids.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No identifiers found".to_string(),
        ));
    }

    Ok(ids)
}
