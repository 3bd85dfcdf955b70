use serde::{Deserialize, Serialize};
use std::fmt;

/// Label shown under a make record, in place of a make name.
pub const MANUFACTURER_LABEL: &str = "Vehicle Manufacturer";

/// Whether a record describes a manufacturer or one of its models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Make,
    Model,
}

impl RecordType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Make => "make",
            Self::Model => "model",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single VMO classification code.
///
/// Records are produced offline and shipped as a JSON list; at runtime they
/// are only ever read. Field names on the wire are camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Stable, unique identifier (e.g. `make-F` or `model-F-F150`).
    pub id: String,

    /// The VMO code itself. Never empty; matched case-insensitively.
    pub code: String,

    #[serde(rename = "type")]
    pub record_type: RecordType,

    /// Manufacturer display name.
    pub make_name: String,

    /// Model display name. Empty for make records.
    #[serde(default)]
    pub model: String,

    /// Human-readable label, also the final tie-break when ranking.
    pub description: String,

    /// Precomputed searchable text, matched by substring.
    pub search_terms: String,

    /// Code of the owning make.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub make_code: Option<String>,
}

impl Record {
    /// Build a make record the way the dataset generator does.
    #[must_use]
    pub fn make(code: impl Into<String>, make_name: impl Into<String>) -> Self {
        let code = code.into();
        let make_name = make_name.into();
        Self {
            id: format!("make-{code}"),
            search_terms: format!("{code} {make_name}"),
            description: make_name.clone(),
            make_code: Some(code.clone()),
            record_type: RecordType::Make,
            model: String::new(),
            code,
            make_name,
        }
    }

    /// Build a model record belonging to the make `make_code`.
    ///
    /// The model name defaults to the code, matching generated datasets;
    /// use [`Record::with_model`] to override it.
    #[must_use]
    pub fn model(
        make_code: impl Into<String>,
        make_name: impl Into<String>,
        code: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let make_code = make_code.into();
        let make_name = make_name.into();
        let code = code.into();
        let description = description.into();
        Self {
            id: format!("model-{make_code}-{code}"),
            search_terms: format!("{make_code} {make_name} {code} {description}"),
            record_type: RecordType::Model,
            model: code.clone(),
            make_code: Some(make_code),
            code,
            make_name,
            description,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_search_terms(mut self, search_terms: impl Into<String>) -> Self {
        self.search_terms = search_terms.into();
        self
    }

    #[must_use]
    pub fn is_make(&self) -> bool {
        self.record_type == RecordType::Make
    }

    /// Case-insensitive equality of the code and `query`, ignoring
    /// surrounding whitespace in the query.
    pub fn is_exact(&self, query: &str) -> bool {
        self.code.to_lowercase() == query.trim().to_lowercase()
    }

    /// Primary display line: the make name for makes, otherwise the
    /// description, falling back to the model name.
    pub fn title(&self) -> &str {
        match self.record_type {
            RecordType::Make => &self.make_name,
            RecordType::Model if self.description.is_empty() => &self.model,
            RecordType::Model => &self.description,
        }
    }

    /// Secondary display line.
    pub fn subtitle(&self) -> &str {
        match self.record_type {
            RecordType::Make => MANUFACTURER_LABEL,
            RecordType::Model => &self.make_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_record() {
        let ford = Record::make("F", "FORD");
        assert_eq!(ford.id, "make-F");
        assert_eq!(ford.search_terms, "F FORD");
        assert_eq!(ford.description, "FORD");
        assert!(ford.model.is_empty());
        assert!(ford.is_make());
    }

    #[test]
    fn test_model_record() {
        let f150 = Record::model("F", "FORD", "F150", "F-150 PICKUP");
        assert_eq!(f150.id, "model-F-F150");
        assert_eq!(f150.model, "F150");
        assert_eq!(f150.make_code.as_deref(), Some("F"));
        assert_eq!(f150.search_terms, "F FORD F150 F-150 PICKUP");
        assert!(!f150.is_make());
    }

    #[test]
    fn test_is_exact_ignores_case_and_padding() {
        let record = Record::make("0AKL", "OAKLAND");
        assert!(record.is_exact("0akl"));
        assert!(record.is_exact("  0AKL "));
        assert!(!record.is_exact("0ak"));
    }

    #[test]
    fn test_title_and_subtitle() {
        let make = Record::make("F", "FORD");
        assert_eq!(make.title(), "FORD");
        assert_eq!(make.subtitle(), MANUFACTURER_LABEL);

        let model = Record::model("F", "FORD", "ECON", "ECONOLINE");
        assert_eq!(model.title(), "ECONOLINE");
        assert_eq!(model.subtitle(), "FORD");

        let bare = Record::model("F", "FORD", "XL", "");
        assert_eq!(bare.title(), "XL");
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{
            "id": "model-F-F150",
            "type": "model",
            "code": "F150",
            "model": "F-150",
            "description": "F-150",
            "makeCode": "F",
            "makeName": "FORD",
            "searchTerms": "F FORD F150 F-150"
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.record_type, RecordType::Model);
        assert_eq!(record.make_name, "FORD");
        assert_eq!(record.model, "F-150");

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["type"], "model");
        assert_eq!(back["searchTerms"], "F FORD F150 F-150");
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let json = r#"{"id":"x","type":"trim","code":"X","makeName":"X",
            "description":"","searchTerms":"X"}"#;
        assert!(serde_json::from_str::<Record>(json).is_err());
    }
}
