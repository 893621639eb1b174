//! xmltract - Extract the text content of particular XML elements.
//!
//! Given a target element local name (and optionally a namespace prefix),
//! xmltract scans one or more XML documents and prints one line per matched
//! element, with the captured text whitespace-normalized, in document order.
//!
//! # Example
//!
//! ```
//! use xmltract::{normalize, MatchCriteria};
//!
//! let criteria = MatchCriteria::new("title", None, false);
//! assert!(criteria.matches(None, "title"));
//! assert_eq!(normalize("  a   b  "), "a b");
//! ```
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`config`]: Configuration constants and validation
//! - [`criteria`]: Element matching criteria
//! - [`normalize`]: Whitespace normalization of captured text
//! - [`stream`]: Single-pass streaming traversal (constant memory)
//! - [`tree`]: Retained-subtree traversal (full descendant text)
//! - [`extract`]: Driver iterating over input sources
//! - [`error`]: Error types and Result alias
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod criteria;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod stream;
pub mod tree;

// Re-export main entry point
pub use extract::{run, ExtractOptions, FailurePolicy, TraversalMode};

// Re-export commonly used items
pub use config::resolve_encoding;
pub use criteria::MatchCriteria;
pub use error::{ExtractError, Result};
pub use normalize::normalize;
