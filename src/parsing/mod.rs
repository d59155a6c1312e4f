//! Readers for the files that feed a generation run.
//!
//! - **Identifier lists**: one marker gene ID per line
//! - **Previous combinations**: delimited records written by earlier runs
//!
//! ## Example
//!
//! ```rust
//! use marker_concat::parsing::identifiers::parse_identifier_text;
//! use marker_concat::parsing::previous::{parse_previous_text, PreviousFormat};
//!
//! let ids = parse_identifier_text("MK1\nMK2\nMK3\n").unwrap();
//! assert_eq!(ids.len(), 3);
//!
//! let previous = parse_previous_text("0001\t2\tMK1,MK2\n", &PreviousFormat::default()).unwrap();
//! assert!(previous.is_used_id("0001"));
//! ```
//!
//! ## Previous combination columns
//!
//! | Column | Default index | Content |
//! |--------|---------------|---------|
//! | ID | 0 | Combination ID |
//! | size | 1 | Not read |
//! | combination | 2 | Identifiers joined by the separator |

use thiserror::Error;

pub mod identifiers;
pub mod previous;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Line {line} has no column {column}")]
    MissingColumn { line: usize, column: usize },
}
