use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;

use crate::error::{Error, Result};
use crate::record::{Record, RecordType};
use crate::validate;

/// The full, immutable set of VMO records.
///
/// A dataset is built once (usually with [`Dataset::load`]) and then only
/// read. Every record in it has a non-empty code and a unique id; dataset
/// order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<Record>,
}

/// Record counts by type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatasetStats {
    pub makes: usize,
    pub models: usize,
}

impl DatasetStats {
    pub fn total(&self) -> usize {
        self.makes + self.models
    }
}

impl Dataset {
    /// Load and validate a dataset file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or
    /// [`Error::InvalidDataset`] if any record fails validation.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let dataset = Self::from_json(&content)?;
        log::info!(
            "Loaded {} records from {}",
            dataset.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Parse and validate a dataset from JSON text.
    ///
    /// # Errors
    ///
    /// Same as [`Dataset::load`], minus the I/O.
    pub fn from_json(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        let report = validate::validate_value(&value)?;
        if !report.is_ok() {
            for issue in &report.issues {
                log::warn!("{issue}");
            }
            return Err(Error::InvalidDataset {
                issues: report.issue_count(),
            });
        }
        let records: Vec<Record> = serde_json::from_value(value)?;
        Self::from_records(records)
    }

    /// Build a dataset from records already in memory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidData`] if a code or make name is blank, or an
    /// id repeats.
    pub fn from_records(records: Vec<Record>) -> Result<Self> {
        let mut ids = HashSet::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if record.code.trim().is_empty() {
                return Err(Error::InvalidData(format!(
                    "record {index} id={} has an empty code",
                    record.id
                )));
            }
            if record.make_name.trim().is_empty() {
                return Err(Error::InvalidData(format!(
                    "record {index} id={} has an empty make name",
                    record.id
                )));
            }
            if !ids.insert(record.id.as_str()) {
                return Err(Error::InvalidData(format!(
                    "record {index} repeats id {}",
                    record.id
                )));
            }
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn stats(&self) -> DatasetStats {
        self.records
            .iter()
            .fold(DatasetStats::default(), |mut stats, record| {
                match record.record_type {
                    RecordType::Make => stats.makes += 1,
                    RecordType::Model => stats.models += 1,
                }
                stats
            })
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Record> {
        vec![
            Record::make("F", "FORD"),
            Record::model("F", "FORD", "F150", "F-150"),
            Record::model("F", "FORD", "ECON", "ECONOLINE"),
        ]
    }

    #[test]
    fn test_from_records_preserves_order() {
        let dataset = Dataset::from_records(sample()).unwrap();
        let codes: Vec<&str> = dataset.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["F", "F150", "ECON"]);
        assert_eq!(dataset.len(), 3);
        assert!(!dataset.is_empty());
    }

    #[test]
    fn test_from_records_rejects_duplicate_ids() {
        let mut records = sample();
        records.push(Record::model("F", "FORD", "F150", "again"));
        let err = Dataset::from_records(records).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }

    #[test]
    fn test_from_records_rejects_blank_code() {
        let records = vec![Record::make(" ", "NOBODY")];
        assert!(Dataset::from_records(records).is_err());
    }

    #[test]
    fn test_from_records_rejects_blank_make_name() {
        let records = vec![Record::model("F", "", "F150", "F-150")];
        let err = Dataset::from_records(records).unwrap_err();
        assert!(matches!(err, Error::InvalidData(msg) if msg.contains("make name")));
    }

    #[test]
    fn test_from_json_rejects_blank_make_name() {
        let mut records = sample();
        records[1].make_name = "  ".to_string();
        let json = serde_json::to_string(&records).unwrap();
        let err = Dataset::from_json(&json).unwrap_err();
        assert!(matches!(err, Error::InvalidDataset { issues: 1 }));
    }

    #[test]
    fn test_stats() {
        let stats = Dataset::from_records(sample()).unwrap().stats();
        assert_eq!(stats, DatasetStats { makes: 1, models: 2 });
        assert_eq!(stats.total(), 3);
    }

    #[test]
    fn test_find_by_id() {
        let dataset = Dataset::from_records(sample()).unwrap();
        assert_eq!(dataset.find_by_id("model-F-ECON").unwrap().code, "ECON");
        assert!(dataset.find_by_id("model-F-NOPE").is_none());
    }

    #[test]
    fn test_from_json_rejects_malformed_records() {
        let json = r#"[{"id":"make-F","type":"make","code":"F","model":"",
            "description":"FORD","makeName":"FORD","searchTerms":null}]"#;
        let err = Dataset::from_json(json).unwrap_err();
        assert!(matches!(err, Error::InvalidDataset { issues: 1 }));
    }

    #[test]
    fn test_from_json_round_trips_records() {
        let json = serde_json::to_string(&sample()).unwrap();
        let dataset = Dataset::from_json(&json).unwrap();
        assert_eq!(dataset.records(), sample().as_slice());
    }
}
