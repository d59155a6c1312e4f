//! Core data types for combination generation.
//!
//! - [`combination`]: canonical form of a set of identifiers and its MD5 [`Fingerprint`]
//! - [`allocator`]: [`IdAllocator`], the zero-padded combination ID namespace
//! - [`size_range`]: [`SizeRange`], the adjusted exclusive size bounds of a run
//! - [`types`]: [`CombinationRecord`], [`Strategy`] and run configuration
//!
//! ## Canonical form
//!
//! A combination is an unordered set, so it is always compared through its
//! canonical string: identifiers sorted lexicographically and joined with `,`.
//!
//! | Input | Canonical |
//! |-------|-----------|
//! | `MK3, MK1` | `MK1,MK3` |
//! | `MK1, MK3, MK1` | `MK1,MK3` |
//!
//! The MD5 of the canonical string is the dedup key, which matches records
//! written by earlier runs.
//!
//! [`Fingerprint`]: combination::Fingerprint
//! [`IdAllocator`]: allocator::IdAllocator
//! [`SizeRange`]: size_range::SizeRange
//! [`CombinationRecord`]: types::CombinationRecord
//! [`Strategy`]: types::Strategy

pub mod allocator;
pub mod combination;
pub mod size_range;
pub mod types;
