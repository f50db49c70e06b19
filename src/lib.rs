// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Email Typo Suggestions
//!
//! Detects near-miss spellings of well-known mailbox providers in
//! user-supplied addresses and proposes a corrected address, for use in
//! form-validation flows.
//!
//! # Features
//!
//! - Strongly-typed decomposition of raw addresses
//! - Four pluggable string-distance metrics (Sift3, Levenshtein, optimal
//!   string alignment, Damerau-Levenshtein)
//! - Curated provider and suffix reference lists with sensible defaults
//! - Threshold-based nearest-match heuristic with a top-level-domain
//!   fallback pass
//!
//! # Example
//!
//! ```rust
//! use email_suggest::{MatchConfig, suggest};
//!
//! let config = MatchConfig::default();
//!
//! let fixed = suggest("USER@GMIAL.COM", &config).unwrap();
//! assert_eq!(fixed.full_address, "user@gmail.com");
//!
//! // Nothing to fix: the domain is already a known provider.
//! assert!(suggest("user@gmail.com", &config).is_none());
//! ```

mod distance;
mod engine;
mod error;
mod matcher;
mod parser;
mod types;

pub use distance::*;
pub use engine::suggest;
pub use error::{ParseError, Result};
pub use matcher::find_closest;
pub use parser::split_email;
pub use types::*;
