use std::collections::BTreeSet;

/// Separator used inside canonical combination strings.
pub const CANONICAL_SEPARATOR: &str = ",";

/// Normalize a collection of identifiers into its canonical string.
///
/// Identifiers are deduplicated, sorted lexicographically and joined with
/// [`CANONICAL_SEPARATOR`], so the result does not depend on input order or
/// repeated entries.
///
/// # Examples
///
/// ```
/// use marker_concat::core::combination::canonicalize;
///
/// assert_eq!(canonicalize(["geneB", "geneA", "geneB"]), "geneA,geneB");
/// ```
pub fn canonicalize<I, S>(ids: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    join_sorted(&sorted_unique(ids))
}

fn sorted_unique<I, S>(ids: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ids.into_iter().map(|s| s.as_ref().to_string()).collect()
}

fn join_sorted(ids: &BTreeSet<String>) -> String {
    ids.iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(CANONICAL_SEPARATOR)
}

/// MD5 digest of a canonical combination string, used as the dedup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint([u8; 16]);

impl Fingerprint {
    /// Compute the fingerprint of an already canonical string.
    #[must_use]
    pub fn of(canonical: &str) -> Self {
        Self(md5::compute(canonical.as_bytes()).0)
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// A set of distinct identifiers in canonical form.
///
/// Field order matters: the derived `Ord` sorts by size first, then by the
/// canonical string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Combination {
    size: usize,
    canonical: String,
}

impl Combination {
    /// Build a combination from any collection of identifiers.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let unique = sorted_unique(ids);
        Self {
            size: unique.len(),
            canonical: join_sorted(&unique),
        }
    }

    /// Number of distinct identifiers.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    #[must_use]
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::of(&self.canonical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize_ignores_order_and_duplicates() {
        let a = canonicalize(["MK3", "MK1", "MK2"]);
        let b = canonicalize(["MK2", "MK3", "MK1", "MK1"]);
        assert_eq!(a, "MK1,MK2,MK3");
        assert_eq!(a, b);
    }

    #[test]
    fn test_canonicalize_distinguishes_different_sets() {
        assert_ne!(canonicalize(["MK1", "MK2"]), canonicalize(["MK1", "MK3"]));
        assert_ne!(canonicalize(["MK1", "MK2"]), canonicalize(["MK1", "MK2", "MK3"]));
    }

    #[test]
    fn test_canonicalize_is_lexicographic() {
        // String order, not numeric order
        assert_eq!(canonicalize(["g10", "g9", "g1"]), "g1,g10,g9");
    }

    #[test]
    fn test_fingerprint_matches_md5_hex() {
        let fp = Fingerprint::of("a,b");
        assert_eq!(fp.to_string(), format!("{:x}", md5::compute(b"a,b")));
        assert_eq!(fp.to_string().len(), 32);
    }

    #[test]
    fn test_fingerprint_is_stable() {
        assert_eq!(Fingerprint::of("A,B,C"), Fingerprint::of("A,B,C"));
        assert_ne!(Fingerprint::of("A,B,C"), Fingerprint::of("A,B"));
    }

    #[test]
    fn test_combination_size_and_ordering() {
        let small = Combination::from_ids(["Z", "Y"]);
        let large = Combination::from_ids(["A", "B", "C"]);
        let other_small = Combination::from_ids(["B", "A"]);

        assert_eq!(small.size(), 2);
        assert_eq!(large.size(), 3);

        let mut all = vec![large.clone(), small.clone(), other_small.clone()];
        all.sort();
        assert_eq!(all, vec![other_small, small, large]);
    }

    #[test]
    fn test_combination_from_duplicates_collapses() {
        let c = Combination::from_ids(["A", "A", "B"]);
        assert_eq!(c.size(), 2);
        assert_eq!(c.canonical(), "A,B");
        assert_eq!(c.fingerprint(), Combination::from_ids(["B", "A"]).fingerprint());
    }

    #[test]
    fn test_empty_combination() {
        let c = Combination::from_ids(Vec::<String>::new());
        assert_eq!(c.size(), 0);
        assert_eq!(c.canonical(), "");
    }
}
