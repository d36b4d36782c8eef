//! # kgtool
//!
//! Profiling for semi-structured JSON and JSON-LD documents.
//!
//! Two questions are answered about a document or a corpus of documents:
//! how many RDF-style triples a JSON-LD document encodes, broken down per
//! predicate, and which fields of a corpus of JSON records are populated,
//! how often, with what sample values.
//!
//! ## Features
//!
//! - Structural triple counting with per-predicate and per-tag breakdowns
//! - A single emptiness policy shared by every statistic
//! - Flatten-and-aggregate corpus profiling with a representative sample
//! - Canonical JSON text and SHA-1 fingerprints for deduplication
//!
//! ## Example
//!
//! ```rust
//! use kgtool::stats::count_triples;
//! use serde_json::json;
//!
//! let table = count_triples(&json!({"name": "Alice", "knows": {"name": "Bob"}}));
//! assert_eq!(table.get("triple"), 3);
//! assert_eq!(table.get("p_name"), 2);
//! ```

#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::needless_pass_by_value)]

/// Core data structures and types
pub mod core;

/// Configuration structures and loading
pub mod config;

/// Error types and result definitions
pub mod error;

/// JSON file I/O, canonical serialization and property access
pub mod json;

/// Triple counting, normalization and corpus profiling
pub mod stats;

// Re-export commonly used types
pub use crate::core::{Diagnostic, DiagnosticSink, FrequencyTable, LogSink};
pub use config::KgToolConfig;
pub use error::{Error, Result};
