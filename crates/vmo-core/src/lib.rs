//! Core data model for vmo-lookup.
//!
//! This crate defines the VMO [`Record`] type, the immutable [`Dataset`]
//! loaded once at startup, the offline dataset [`validate`] pass that gates
//! what the search core is allowed to see, and the [`audit`] helpers used to
//! inspect dataset quality.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod audit;
pub mod dataset;
pub mod error;
pub mod record;
pub mod validate;

pub use dataset::{Dataset, DatasetStats};
pub use error::{Error, Result};
pub use record::{Record, RecordType};
pub use validate::{Issue, IssueKind, ValidationReport};
