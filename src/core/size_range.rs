use tracing::warn;

/// Smallest combination size ever generated.
pub const MIN_COMBINATION_SIZE: usize = 2;

/// Combination sizes allowed in a run, as exclusive bounds.
///
/// A size `n` is accepted when `min_exclusive < n < max_exclusive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeRange {
    min_exclusive: usize,
    max_exclusive: usize,
}

impl SizeRange {
    /// Turn user-provided size limits into exclusive bounds over `available`
    /// identifiers, emitting a warning for every value that had to change.
    ///
    /// - `max_size` defaults to `available` and is clamped to it. The upper
    ///   bound is `max_size + 1`, except when the clamped value equals
    ///   `available`, in which case it is `available` itself.
    /// - `min_size` is raised to at least 2; the lower bound is `min_size - 1`.
    /// - If `min_size` reaches the upper bound, the lower bound becomes
    ///   `upper - 2`, leaving a single valid size.
    #[must_use]
    pub fn adjust(min_size: usize, max_size: Option<usize>, available: usize) -> Self {
        let clamped_max = max_size.map_or(available, |m| m.min(available));
        let max_exclusive = if clamped_max == available {
            available
        } else {
            clamped_max + 1
        };

        let largest = max_exclusive.saturating_sub(1);
        if max_size != Some(largest) {
            warn!("Adjusting max_size to {largest}");
        }

        let min_exclusive = if min_size < MIN_COMBINATION_SIZE {
            warn!("Adjusting min_size to {MIN_COMBINATION_SIZE}");
            MIN_COMBINATION_SIZE - 1
        } else if min_size >= max_exclusive {
            let forced = max_exclusive.saturating_sub(2);
            warn!("Adjusting min_size to {}", forced + 1);
            forced
        } else {
            min_size - 1
        };

        Self {
            min_exclusive,
            max_exclusive,
        }
    }

    #[must_use]
    pub fn min_exclusive(&self) -> usize {
        self.min_exclusive
    }

    #[must_use]
    pub fn max_exclusive(&self) -> usize {
        self.max_exclusive
    }

    /// Smallest accepted size.
    #[must_use]
    pub fn smallest(&self) -> usize {
        self.min_exclusive + 1
    }

    /// Largest accepted size.
    #[must_use]
    pub fn largest(&self) -> usize {
        self.max_exclusive.saturating_sub(1)
    }

    #[must_use]
    pub fn contains(&self, size: usize) -> bool {
        self.min_exclusive < size && size < self.max_exclusive
    }

    /// True when no size satisfies both bounds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.smallest() > self.largest()
    }
}
