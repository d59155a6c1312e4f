use std::collections::BTreeSet;

use tracing::{info, warn};

use crate::core::allocator::IdAllocator;
use crate::core::combination::Combination;
use crate::core::size_range::SizeRange;
use crate::core::types::CombinationRecord;
use crate::parsing::previous::PreviousSet;
use crate::utils::validation::exhaustive_size_warning;

/// Lazy iterator over every subset of a slice.
///
/// Subsets are produced by counting in binary over the item positions, so
/// the empty subset comes first and the full slice last. Only the current
/// membership mask is kept in memory.
#[derive(Debug, Clone)]
pub struct PowerSet<'a, T> {
    items: &'a [T],
    mask: Vec<bool>,
    done: bool,
}

impl<'a, T> PowerSet<'a, T> {
    #[must_use]
    pub fn new(items: &'a [T]) -> Self {
        Self {
            items,
            mask: vec![false; items.len()],
            done: false,
        }
    }

    /// Advance the mask by one; returns false once it wraps around.
    fn increment(&mut self) -> bool {
        for bit in &mut self.mask {
            if *bit {
                *bit = false;
            } else {
                *bit = true;
                return true;
            }
        }
        false
    }
}

impl<'a, T> Iterator for PowerSet<'a, T> {
    type Item = Vec<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let subset = self
            .items
            .iter()
            .zip(&self.mask)
            .filter_map(|(item, &member)| member.then_some(item))
            .collect();

        self.done = !self.increment();
        Some(subset)
    }
}

/// Every distinct combination of `identifiers` whose size is in `range`,
/// sorted by size and then canonical string.
pub fn combinations_in_range<S: AsRef<str>>(
    identifiers: &[S],
    range: SizeRange,
) -> BTreeSet<Combination> {
    PowerSet::new(identifiers)
        .filter(|subset| range.contains(subset.len()))
        .map(Combination::from_ids)
        .filter(|combination| range.contains(combination.size()))
        .collect()
}

/// Enumerate all combinations in `range` and assign IDs to those not in `previous`.
pub fn generate_exhaustive<S: AsRef<str>>(
    identifiers: &[S],
    range: SizeRange,
    previous: &PreviousSet,
    allocator: &mut IdAllocator,
) -> Vec<CombinationRecord> {
    if let Some(msg) = exhaustive_size_warning(identifiers.len()) {
        warn!("{msg}");
    }

    let all = combinations_in_range(identifiers, range);

    let records: Vec<CombinationRecord> = all
        .iter()
        .filter(|combination| !previous.contains(&combination.fingerprint()))
        .map(|combination| CombinationRecord::new(allocator.next_id(), combination))
        .collect();

    info!(
        "Found {} combinations after an exhaustive exploration. New ones: {}",
        all.len(),
        records.len()
    );

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::combination::Fingerprint;

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_power_set_yields_all_subsets() {
        let items = ["A", "B", "C"];
        let subsets: Vec<Vec<&&str>> = PowerSet::new(&items).collect();

        assert_eq!(subsets.len(), 8);
        assert!(subsets[0].is_empty());
        assert_eq!(subsets[7].len(), 3);

        let distinct: BTreeSet<String> = subsets
            .iter()
            .map(|s| Combination::from_ids(s.iter().map(|x| **x)).canonical().to_string())
            .collect();
        assert_eq!(distinct.len(), 8);
    }

    #[test]
    fn test_power_set_of_empty_slice() {
        let items: [&str; 0] = [];
        let subsets: Vec<_> = PowerSet::new(&items).collect();
        assert_eq!(subsets.len(), 1);
        assert!(subsets[0].is_empty());
    }

    #[test]
    fn test_four_identifiers_default_range() {
        // Power set of 4 items: sizes 0,1,2,3,4 occur 1,4,6,4,1 times.
        // Default bounds keep sizes 2 and 3.
        let identifiers = ids(&["D", "B", "A", "C"]);
        let range = SizeRange::adjust(2, None, identifiers.len());
        let all: Vec<Combination> = combinations_in_range(&identifiers, range).into_iter().collect();

        let canonical: Vec<&str> = all.iter().map(Combination::canonical).collect();
        assert_eq!(
            canonical,
            vec![
                "A,B", "A,C", "A,D", "B,C", "B,D", "C,D", "A,B,C", "A,B,D", "A,C,D", "B,C,D",
            ]
        );
    }

    #[test]
    fn test_five_identifiers_explicit_range() {
        // Sizes 3..=4 of 5 items: C(5,3) + C(5,4) = 10 + 5
        let identifiers = ids(&["E", "D", "C", "B", "A"]);
        let range = SizeRange::adjust(3, Some(4), identifiers.len());
        let all = combinations_in_range(&identifiers, range);

        assert_eq!(all.len(), 15);
        assert_eq!(all.iter().filter(|c| c.size() == 3).count(), 10);
        assert_eq!(all.iter().filter(|c| c.size() == 4).count(), 5);
        assert_eq!(all.iter().next().unwrap().canonical(), "A,B,C");
        assert_eq!(all.iter().last().unwrap().canonical(), "B,C,D,E");
    }

    #[test]
    fn test_three_identifiers_default_range() {
        let identifiers = ids(&["A", "B", "C"]);
        let range = SizeRange::adjust(2, None, 3);
        let mut alloc = IdAllocator::default();
        let records = generate_exhaustive(&identifiers, range, &PreviousSet::new(), &mut alloc);

        let rows: Vec<(&str, usize, &str)> = records
            .iter()
            .map(|r| (r.id.as_str(), r.size, r.combination.as_str()))
            .collect();
        assert_eq!(
            rows,
            vec![("0001", 2, "A,B"), ("0002", 2, "A,C"), ("0003", 2, "B,C")]
        );
    }

    #[test]
    fn test_previous_combinations_are_skipped() {
        let identifiers = ids(&["A", "B", "C", "D"]);
        let range = SizeRange::adjust(2, Some(2), 4);

        let mut previous = PreviousSet::new();
        previous.insert(Fingerprint::of("A,C"), "0001\t2\tA,C", "0001");
        previous.insert(Fingerprint::of("B,D"), "0003\t2\tD,B", "0003");

        let mut alloc = IdAllocator::new(previous.used_ids().clone());
        let records = generate_exhaustive(&identifiers, range, &previous, &mut alloc);

        let rows: Vec<(&str, &str)> = records
            .iter()
            .map(|r| (r.id.as_str(), r.combination.as_str()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("0002", "A,B"),
                ("0004", "A,D"),
                ("0005", "B,C"),
                ("0006", "C,D"),
            ]
        );
    }

    #[test]
    fn test_output_independent_of_input_order() {
        let a = ids(&["MK1", "MK2", "MK3", "MK4", "MK5"]);
        let b = ids(&["MK4", "MK2", "MK5", "MK1", "MK3"]);
        let range = SizeRange::adjust(2, None, 5);

        let run_a = generate_exhaustive(&a, range, &PreviousSet::new(), &mut IdAllocator::default());
        let run_b = generate_exhaustive(&b, range, &PreviousSet::new(), &mut IdAllocator::default());
        assert_eq!(run_a, run_b);
    }
}
