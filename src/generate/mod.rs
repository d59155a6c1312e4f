//! Combination generation strategies.
//!
//! - [`exhaustive`]: walk the power set of the identifiers and keep every
//!   subset in the size range
//! - [`random`]: draw random subsets until the requested number of new
//!   combinations is found
//!
//! Both strategies skip combinations already present in the [`PreviousSet`],
//! sort their output by size and canonical string, and only then allocate
//! IDs. A failed run allocates nothing.
//!
//! ## Example
//!
//! ```rust
//! use marker_concat::core::types::{GenerationConfig, Strategy};
//! use marker_concat::generate::generate;
//! use marker_concat::parsing::previous::PreviousSet;
//!
//! let ids = vec!["MK1".to_string(), "MK2".to_string(), "MK3".to_string()];
//! let config = GenerationConfig::new(Strategy::Exhaustive);
//! let records = generate(&ids, &PreviousSet::new(), &config, &mut rand::rng()).unwrap();
//!
//! assert_eq!(records[0].id, "0001");
//! assert_eq!(records[0].combination, "MK1,MK2");
//! ```
//!
//! [`PreviousSet`]: crate::parsing::previous::PreviousSet

use std::collections::HashSet;

use rand::Rng;
use thiserror::Error;
use tracing::debug;

use crate::core::allocator::IdAllocator;
use crate::core::size_range::SizeRange;
use crate::core::types::{CombinationRecord, GenerationConfig, Strategy};
use crate::parsing::previous::PreviousSet;

pub mod exhaustive;
pub mod random;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(
        "Found '{found}' combinations instead of '{requested}'. \
         Adjust your input parameters and/or execute again"
    )]
    SamplingExhausted { found: usize, requested: usize },
}

/// Run one generation with the configured strategy.
///
/// Repeated identifiers are collapsed first, keeping first-seen order. Size
/// limits are then adjusted against the number of distinct identifiers, and
/// IDs are allocated so that they never collide with those in `previous`.
///
/// # Errors
///
/// Returns `GenerateError::SamplingExhausted` if the random strategy cannot
/// find the requested number of combinations.
pub fn generate<S: AsRef<str>, R: Rng>(
    identifiers: &[S],
    previous: &PreviousSet,
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<Vec<CombinationRecord>, GenerateError> {
    let mut seen = HashSet::new();
    let distinct: Vec<&str> = identifiers
        .iter()
        .map(|id| id.as_ref())
        .filter(|id| seen.insert(*id))
        .collect();

    let range = SizeRange::adjust(config.min_size, config.max_size, distinct.len());
    debug!(
        "Generating {} combinations of size {}..={} from {} identifiers ({} previous)",
        config.strategy,
        range.smallest(),
        range.largest(),
        distinct.len(),
        previous.len()
    );

    let mut allocator = IdAllocator::new(previous.used_ids().clone());
    debug!("{} combination IDs already in use", allocator.used_count());

    match config.strategy {
        Strategy::Exhaustive => Ok(exhaustive::generate_exhaustive(
            &distinct,
            range,
            previous,
            &mut allocator,
        )),
        Strategy::Random { runs } => random::generate_random(
            &distinct,
            range,
            runs,
            previous,
            &mut allocator,
            config.sampler,
            rng,
        ),
    }
}
