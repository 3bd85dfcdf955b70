//! Data-quality audits over a loaded dataset.

use std::collections::{BTreeMap, BTreeSet};

use crate::dataset::Dataset;
use crate::record::RecordType;

/// A model code that is used by more than one make.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateCode {
    pub code: String,
    /// Distinct make names using the code, sorted.
    pub makes: Vec<String>,
}

/// Find model codes shared across different makes.
///
/// Codes are compared exactly as stored. The result is sorted by code.
pub fn duplicate_codes(dataset: &Dataset) -> Vec<DuplicateCode> {
    let mut by_code: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for record in dataset
        .iter()
        .filter(|r| r.record_type == RecordType::Model)
    {
        by_code
            .entry(record.code.as_str())
            .or_default()
            .insert(record.make_name.as_str());
    }

    let duplicates: Vec<DuplicateCode> = by_code
        .into_iter()
        .filter(|(_, makes)| makes.len() > 1)
        .map(|(code, makes)| DuplicateCode {
            code: code.to_string(),
            makes: makes.into_iter().map(str::to_string).collect(),
        })
        .collect();

    log::debug!("Found {} codes shared across makes", duplicates.len());
    duplicates
}
