//! Loader for combinations generated by earlier runs.
//!
//! Each non-blank line is a delimited record holding at least an ID column and
//! a combination column. The combination is canonicalized and fingerprinted
//! so that it matches regardless of the order it was written in.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::path::Path;

use tracing::warn;

use crate::core::combination::{canonicalize, Fingerprint};
use crate::parsing::ParseError;

/// Column layout of a previous-combinations file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviousFormat {
    /// Field delimiter
    pub delimiter: char,
    /// Separator between identifiers inside the combination field
    pub separator: char,
    /// 0-based index of the combination field
    pub combination_column: usize,
    /// 0-based index of the ID field
    pub id_column: usize,
}

impl Default for PreviousFormat {
    fn default() -> Self {
        Self {
            delimiter: '\t',
            separator: ',',
            combination_column: 2,
            id_column: 0,
        }
    }
}

/// Combinations and IDs already taken by earlier runs
#[derive(Debug, Clone, Default)]
pub struct PreviousSet {
    lines_by_fingerprint: HashMap<Fingerprint, BTreeSet<String>>,
    used_ids: HashSet<String>,
}

impl PreviousSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a raw record under `fingerprint` and mark `id` as used.
    ///
    /// Returns the record already stored for this fingerprint, if any, so the
    /// caller can report the conflict. Both records are kept.
    pub fn insert(&mut self, fingerprint: Fingerprint, line: &str, id: &str) -> Option<String> {
        let bucket = self.lines_by_fingerprint.entry(fingerprint).or_default();
        let existing = bucket.iter().next().cloned();
        bucket.insert(line.to_string());
        self.used_ids.insert(id.to_string());
        existing
    }

    #[must_use]
    pub fn contains(&self, fingerprint: &Fingerprint) -> bool {
        self.lines_by_fingerprint.contains_key(fingerprint)
    }

    /// Raw records stored for `fingerprint`.
    pub fn lines(&self, fingerprint: &Fingerprint) -> impl Iterator<Item = &str> {
        self.lines_by_fingerprint
            .get(fingerprint)
            .into_iter()
            .flat_map(|bucket| bucket.iter().map(String::as_str))
    }

    #[must_use]
    pub fn is_used_id(&self, id: &str) -> bool {
        self.used_ids.contains(id)
    }

    #[must_use]
    pub fn used_ids(&self) -> &HashSet<String> {
        &self.used_ids
    }

    /// Number of distinct combinations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines_by_fingerprint.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines_by_fingerprint.is_empty()
    }
}

/// Load previous combinations from a file.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or the errors of
/// [`parse_previous_text`].
pub fn parse_previous_file(path: &Path, format: &PreviousFormat) -> Result<PreviousSet, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_previous_text(&content, format)
}

/// Load previous combinations from text.
///
/// Blank lines are skipped; every other line is a record. A combination seen on
/// more than one line is reported as a warning and kept.
///
/// # Errors
///
/// Returns `ParseError::MissingColumn` if a record lacks the ID or
/// combination column.
pub fn parse_previous_text(text: &str, format: &PreviousFormat) -> Result<PreviousSet, ParseError> {
    let mut previous = PreviousSet::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let line_num = i + 1;
        let fields: Vec<&str> = line.split(format.delimiter).map(str::trim).collect();
        let field = |column: usize| {
            fields
                .get(column)
                .copied()
                .ok_or(ParseError::MissingColumn {
                    line: line_num,
                    column,
                })
        };

        let combination = field(format.combination_column)?;
        let id = field(format.id_column)?;

        let canonical = canonicalize(combination.split(format.separator).map(str::trim));
        let fingerprint = Fingerprint::of(&canonical);

        if let Some(existing) = previous.insert(fingerprint, line, id) {
            warn!("Same combination found more than one time: '{line}' - '{existing}'");
        }
    }

    Ok(previous)
}
