use std::fmt;

/// Lowercase `raw` and strip surrounding whitespace.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// A normalized, non-empty search query.
///
/// There is no way to build an empty `Query`: text that normalizes to
/// nothing means "no search performed", which callers see as `None` from
/// [`Query::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Query {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
