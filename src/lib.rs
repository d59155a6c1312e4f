//! # marker-concat
//!
//! A library for generating combinations ("concatenations") of marker gene
//! identifiers without repeating combinations produced by earlier runs.
//!
//! Given a list of marker gene IDs, `marker-concat` either enumerates every
//! subset within a size range or samples a requested number of distinct random
//! subsets. Each new combination gets a zero-padded ID that never collides
//! with IDs already in use.
//!
//! ## Features
//!
//! - **Order-independent matching**: combinations are compared through their
//!   sorted canonical form and its MD5 fingerprint
//! - **Incremental runs**: previously generated combinations and IDs are
//!   loaded and skipped
//! - **Two strategies**: exhaustive power-set enumeration or bounded random
//!   sampling
//! - **Deterministic output**: records are sorted by size, then by combination
//!
//! ## Example
//!
//! ```rust
//! use marker_concat::{generate, GenerationConfig, PreviousSet, Strategy};
//! use marker_concat::parsing::previous::{parse_previous_text, PreviousFormat};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let ids: Vec<String> = ["MK1", "MK2", "MK3", "MK4"].iter().map(|s| s.to_string()).collect();
//! let previous = parse_previous_text("0001\t2\tMK2,MK1\n", &PreviousFormat::default()).unwrap();
//!
//! let config = GenerationConfig::new(Strategy::Random { runs: 3 }).with_max_size(Some(2));
//! let mut rng = StdRng::seed_from_u64(42);
//! let records = generate(&ids, &previous, &config, &mut rng).unwrap();
//!
//! assert_eq!(records.len(), 3);
//! assert!(records.iter().all(|r| r.id != "0001" && r.combination != "MK1,MK2"));
//! ```
//!
//! ## Modules
//!
//! - [`core`]: canonical combinations, ID allocation, size ranges and shared types
//! - [`parsing`]: readers for identifier lists and previous combinations
//! - [`generate`]: exhaustive and random generation strategies
//! - [`output`]: record serialization
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod generate;
pub mod output;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use core::allocator::IdAllocator;
pub use core::combination::{canonicalize, Combination, Fingerprint};
pub use core::size_range::SizeRange;
pub use core::types::*;
pub use generate::{generate, GenerateError};
pub use parsing::previous::PreviousSet;
