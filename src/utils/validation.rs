//! Centralized input checks.

/// Above this many identifiers the power set is too large to enumerate in practice.
pub const MAX_PRACTICAL_EXHAUSTIVE: usize = 25;

/// Warning text when exhaustive enumeration over `count` identifiers is impractical.
#[must_use]
pub fn exhaustive_size_warning(count: usize) -> Option<String> {
    if count > MAX_PRACTICAL_EXHAUSTIVE {
        Some(format!(
            "Exhaustive exploration of {count} identifiers visits 2^{count} subsets; \
             consider the random strategy above {MAX_PRACTICAL_EXHAUSTIVE} identifiers"
        ))
    } else {
        None
    }
}

/// Input validation error types
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Field delimiter and identifier separator must differ (both are {0:?})")]
    DelimiterClash(char),
    #[error("Combination column and ID column must differ (both are {0})")]
    ColumnClash(usize),
}

/// Validate the layout of a previous-combinations file.
///
/// # Errors
///
/// Returns `ValidationError::DelimiterClash` when the field delimiter equals
/// the identifier separator, or `ValidationError::ColumnClash` when the
/// combination and ID columns are the same.
pub fn validate_record_layout(
    delimiter: char,
    separator: char,
    combination_column: usize,
    id_column: usize,
) -> Result<(), ValidationError> {
    if delimiter == separator {
        return Err(ValidationError::DelimiterClash(delimiter));
    }
    if combination_column == id_column {
        return Err(ValidationError::ColumnClash(id_column));
    }
    Ok(())
}
