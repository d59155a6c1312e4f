use std::collections::HashSet;

/// Padding width of the first block of identifiers.
pub const DEFAULT_ID_WIDTH: usize = 4;

/// Hands out unused, zero-padded numeric combination IDs.
///
/// Starting at `1` with width 4, IDs `0001..=1000` are tried first; once the
/// counter passes the capacity of the current width, the width grows by one
/// (`01001`, `01002`, ...). The counter never goes back, and every ID
/// returned is recorded as used.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u64,
    width: usize,
    capacity: u64,
    used: HashSet<String>,
}

impl IdAllocator {
    /// Create an allocator that avoids every ID in `used`.
    #[must_use]
    #[allow(clippy::implicit_hasher)]
    pub fn new(used: HashSet<String>) -> Self {
        Self::with_start(used, 1, DEFAULT_ID_WIDTH)
    }

    /// Create an allocator with an explicit starting counter and width.
    #[must_use]
    #[allow(clippy::implicit_hasher)]
    pub fn with_start(used: HashSet<String>, start: u64, width: usize) -> Self {
        let exponent = u32::try_from(width.saturating_sub(1)).unwrap_or(u32::MAX);
        Self {
            next: start,
            width,
            capacity: 10u64.saturating_pow(exponent),
            used,
        }
    }

    /// Return the next unused ID and mark it as used.
    pub fn next_id(&mut self) -> String {
        loop {
            let candidate = format!("{:0width$}", self.next, width = self.width);
            self.advance();
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
        }
    }

    fn advance(&mut self) {
        self.next += 1;
        if self.next > self.capacity {
            self.capacity = self.capacity.saturating_mul(10);
            self.width += 1;
        }
    }

    #[cfg(test)]
    fn is_used(&self, id: &str) -> bool {
        self.used.contains(id)
    }

    /// Number of IDs known to be taken.
    #[must_use]
    pub fn used_count(&self) -> usize {
        self.used.len()
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new(HashSet::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn used(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_first_id_is_padded_to_four() {
        let mut alloc = IdAllocator::default();
        assert_eq!(alloc.next_id(), "0001");
        assert_eq!(alloc.next_id(), "0002");
    }

    #[test]
    fn test_skips_used_ids() {
        let mut alloc = IdAllocator::new(used(&["0001", "0002", "0004"]));
        assert_eq!(alloc.next_id(), "0003");
        assert_eq!(alloc.next_id(), "0005");
        assert!(alloc.is_used("0003"));
        assert!(alloc.is_used("0005"));
        assert_eq!(alloc.used_count(), 5);
    }

    #[test]
    fn test_unpadded_previous_ids_do_not_block() {
        // IDs are compared as strings
        let mut alloc = IdAllocator::new(used(&["1", "2"]));
        assert_eq!(alloc.next_id(), "0001");
    }

    #[test]
    fn test_never_repeats() {
        let mut alloc = IdAllocator::new(used(&["0010", "0500", "01001"]));
        let mut seen = HashSet::new();
        for _ in 0..3000 {
            let id = alloc.next_id();
            assert!(id != "0010" && id != "0500" && id != "01001");
            assert!(seen.insert(id));
        }
    }

    #[test]
    fn test_width_grows_after_capacity() {
        let mut alloc = IdAllocator::default();
        let ids: Vec<String> = (0..1001).map(|_| alloc.next_id()).collect();

        assert_eq!(ids[0], "0001");
        assert_eq!(ids[999], "1000");
        assert_eq!(ids[1000], "01001");
        assert_eq!(ids[1000].len(), 5);
    }

    #[test]
    fn test_width_grows_again() {
        let mut alloc = IdAllocator::with_start(HashSet::new(), 10_000, 5);
        assert_eq!(alloc.next_id(), "10000");
        assert_eq!(alloc.next_id(), "010001");
    }

    #[test]
    fn test_full_block_spills_into_next_width() {
        let block: HashSet<String> = (1..=1000).map(|n| format!("{n:04}")).collect();
        let mut alloc = IdAllocator::new(block);
        assert_eq!(alloc.next_id(), "01001");
    }

    #[test]
    fn test_deterministic() {
        let mut a = IdAllocator::new(used(&["0002"]));
        let mut b = IdAllocator::new(used(&["0002"]));
        for _ in 0..20 {
            assert_eq!(a.next_id(), b.next_id());
        }
    }
}
