//! Offline validation of a raw dataset file.
//!
//! The search core assumes every record is well formed and never type-checks
//! at runtime. This pass is the gate that makes that assumption safe: it walks
//! the untyped JSON, records one [`Issue`] per problem with enough context to
//! find it in the source file, and leaves the decision to fail to the caller.

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::error::{Error, Result};

/// Fields that must be present and hold strings on every record.
pub const REQUIRED_STRING_FIELDS: [&str; 5] =
    ["code", "searchTerms", "description", "model", "makeName"];

/// What is wrong with a single record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// The list entry is not a JSON object.
    NotAnObject { found: &'static str },
    /// A field that must be a string is missing or holds another type.
    NotAString { field: &'static str, found: &'static str },
    /// `type` is a string but neither `make` nor `model`.
    UnknownType { found: String },
    /// `code` is present but blank.
    EmptyCode,
    /// `makeName` is present but blank.
    EmptyMakeName,
    /// `id` is absent.
    MissingId,
    /// `id` repeats an earlier record.
    DuplicateId { first_index: usize },
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject { found } => write!(f, "expected an object, found {found}"),
            Self::NotAString { field, found } => {
                write!(f, "{field} is not a string (found {found})")
            }
            Self::UnknownType { found } => {
                write!(f, "type must be \"make\" or \"model\" (found {found:?})")
            }
            Self::EmptyCode => f.write_str("code is empty"),
            Self::EmptyMakeName => f.write_str("makeName is empty"),
            Self::MissingId => f.write_str("id is missing"),
            Self::DuplicateId { first_index } => {
                write!(f, "id duplicates record {first_index}")
            }
        }
    }
}

/// One problem found in the dataset, located by list index and id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub index: usize,
    pub id: Option<String>,
    pub kind: IssueKind,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => write!(f, "Item {} id={}: {}", self.index, id, self.kind),
            None => write!(f, "Item {}: {}", self.index, self.kind),
        }
    }
}

/// Outcome of validating a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Number of entries in the list.
    pub total: usize,
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    /// Number of distinct records with at least one issue.
    pub fn invalid_records(&self) -> usize {
        let mut indices: Vec<usize> = self.issues.iter().map(|i| i.index).collect();
        indices.dedup();
        indices.len()
    }
}

/// Validate the dataset file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not JSON, or its top
/// level is not a list. Problems with individual records are reported in
/// the returned [`ValidationReport`], not as errors.
pub fn validate_file(path: &Path) -> Result<ValidationReport> {
    let content = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content)?;
    let report = validate_value(&value)?;
    log::info!(
        "Validated {} records from {}: {} issue(s)",
        report.total,
        path.display(),
        report.issue_count()
    );
    Ok(report)
}

/// Validate an already-parsed dataset.
///
/// # Errors
///
/// Returns [`Error::InvalidData`] if `value` is not a JSON list.
pub fn validate_value(value: &Value) -> Result<ValidationReport> {
    let Value::Array(items) = value else {
        return Err(Error::InvalidData(format!(
            "dataset must be a list of records, found {}",
            json_type_name(Some(value))
        )));
    };

    let mut report = ValidationReport {
        total: items.len(),
        issues: Vec::new(),
    };
    let mut seen_ids: HashMap<&str, usize> = HashMap::new();

    for (index, item) in items.iter().enumerate() {
        let Value::Object(fields) = item else {
            report.issues.push(Issue {
                index,
                id: None,
                kind: IssueKind::NotAnObject {
                    found: json_type_name(Some(item)),
                },
            });
            continue;
        };

        let id = fields.get("id").and_then(Value::as_str);
        let mut push = |kind: IssueKind| {
            report.issues.push(Issue {
                index,
                id: id.map(str::to_string),
                kind,
            });
        };

        match fields.get("id") {
            None => push(IssueKind::MissingId),
            Some(Value::String(id)) => {
                if let Some(&first_index) = seen_ids.get(id.as_str()) {
                    push(IssueKind::DuplicateId { first_index });
                } else {
                    seen_ids.insert(id, index);
                }
            }
            Some(other) => push(IssueKind::NotAString {
                field: "id",
                found: json_type_name(Some(other)),
            }),
        }

        for field in REQUIRED_STRING_FIELDS {
            if let Some(kind) = check_string_field(fields, field) {
                push(kind);
            }
        }

        if is_blank(fields, "code") {
            push(IssueKind::EmptyCode);
        }
        if is_blank(fields, "makeName") {
            push(IssueKind::EmptyMakeName);
        }

        match fields.get("type") {
            Some(Value::String(t)) if t == "make" || t == "model" => {}
            Some(Value::String(t)) => push(IssueKind::UnknownType { found: t.clone() }),
            other => push(IssueKind::NotAString {
                field: "type",
                found: json_type_name(other),
            }),
        }
    }

    for issue in &report.issues {
        log::debug!("{issue}");
    }

    Ok(report)
}

fn check_string_field(fields: &Map<String, Value>, field: &'static str) -> Option<IssueKind> {
    match fields.get(field) {
        Some(Value::String(_)) => None,
        other => Some(IssueKind::NotAString {
            field,
            found: json_type_name(other),
        }),
    }
}

/// A string field holding only whitespace. Wrong types are reported elsewhere.
fn is_blank(fields: &Map<String, Value>, field: &str) -> bool {
    fields
        .get(field)
        .and_then(Value::as_str)
        .is_some_and(|text| text.trim().is_empty())
}

fn json_type_name(value: Option<&Value>) -> &'static str {
    match value {
        None => "missing",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "list",
        Some(Value::Object(_)) => "object",
    }
}
