use std::collections::{BTreeSet, HashMap};

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::core::allocator::IdAllocator;
use crate::core::combination::{Combination, Fingerprint};
use crate::core::size_range::SizeRange;
use crate::core::types::{CombinationRecord, SamplerConfig};
use crate::generate::GenerateError;
use crate::parsing::previous::PreviousSet;

/// Draws random combinations until `runs` distinct new ones are found.
pub struct RandomSampler<'a, S> {
    identifiers: &'a [S],
    range: SizeRange,
    previous: &'a PreviousSet,
    config: SamplerConfig,
}

impl<'a, S: AsRef<str>> RandomSampler<'a, S> {
    #[must_use]
    pub fn new(
        identifiers: &'a [S],
        range: SizeRange,
        previous: &'a PreviousSet,
        config: SamplerConfig,
    ) -> Self {
        Self {
            identifiers,
            range,
            previous,
            config,
        }
    }

    /// Draw one candidate of a random size in range.
    ///
    /// The returned combination may be smaller than the chosen size when the
    /// draw budget runs out first.
    fn draw_candidate<R: Rng>(&self, rng: &mut R) -> (usize, Combination) {
        let target = rng.random_range(self.range.smallest()..=self.range.largest());
        let mut picked = BTreeSet::new();
        let mut draws = 0;

        while picked.len() < target && draws < self.config.draw_budget {
            if let Some(id) = self.identifiers.choose(rng) {
                picked.insert(id.as_ref());
            }
            draws += 1;
        }

        (target, Combination::from_ids(picked))
    }

    /// Collect `runs` distinct combinations absent from the previous set.
    ///
    /// The result is sorted by size and canonical string, independent of the
    /// order in which combinations were drawn.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::SamplingExhausted` if the escape budget of
    /// `runs * escape_factor` attempts is spent before `runs` combinations
    /// were found.
    pub fn sample<R: Rng>(&self, runs: usize, rng: &mut R) -> Result<Vec<Combination>, GenerateError> {
        let mut found: HashMap<Fingerprint, Combination> = HashMap::new();
        if runs == 0 {
            return Ok(Vec::new());
        }
        if self.range.is_empty() {
            return Err(GenerateError::SamplingExhausted {
                found: 0,
                requested: runs,
            });
        }

        let mut escape = self.config.escape_budget(runs);
        while found.len() < runs && escape > 0 {
            escape -= 1;

            let (target, candidate) = self.draw_candidate(rng);
            if candidate.size() != target {
                continue;
            }

            let fingerprint = candidate.fingerprint();
            if self.previous.contains(&fingerprint) || found.contains_key(&fingerprint) {
                continue;
            }
            found.insert(fingerprint, candidate);
        }

        debug!(
            "Random sampling used {} of {} attempts",
            self.config.escape_budget(runs) - escape,
            self.config.escape_budget(runs)
        );

        if found.len() != runs {
            return Err(GenerateError::SamplingExhausted {
                found: found.len(),
                requested: runs,
            });
        }

        let mut combinations: Vec<Combination> = found.into_values().collect();
        combinations.sort();
        Ok(combinations)
    }
}

/// Sample `runs` new combinations and assign IDs in sorted order.
///
/// # Errors
///
/// Returns `GenerateError::SamplingExhausted` when fewer than `runs`
/// combinations could be found; no IDs are allocated in that case.
pub fn generate_random<S: AsRef<str>, R: Rng>(
    identifiers: &[S],
    range: SizeRange,
    runs: usize,
    previous: &PreviousSet,
    allocator: &mut IdAllocator,
    config: SamplerConfig,
    rng: &mut R,
) -> Result<Vec<CombinationRecord>, GenerateError> {
    let combinations = RandomSampler::new(identifiers, range, previous, config).sample(runs, rng)?;

    info!("Found {} random combinations", combinations.len());

    Ok(combinations
        .iter()
        .map(|combination| CombinationRecord::new(allocator.next_id(), combination))
        .collect())
}
