//! Ranking of candidate records against a query.
//!
//! Candidates are ordered by a fixed sequence of tiers. Each tier only
//! breaks ties left by the one before it:
//!
//! 1. exact code match
//! 2. among exact matches, makes before models
//! 3. code starts with the query
//! 4. some word of the display text starts with the query
//! 5. shorter code
//! 6. description, alphabetically (letters, then accents, then case)
//!
//! Tier 4 therefore only separates records that tied on tier 3: a code-prefix
//! match always outranks a record that matched through its search terms,
//! however well that record's words line up with the query.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;
use vmo_core::Record;

use crate::query::Query;

// ---------------------------------------------------------------------------
// Rank keys
// ---------------------------------------------------------------------------

/// Everything the comparator needs about one record, computed once per search.
#[derive(Debug, Clone)]
pub struct RankKey<'a> {
    pub record: &'a Record,
    pub exact: bool,
    pub code_prefix: bool,
    pub word_start: bool,
    code_len: usize,
}

impl<'a> RankKey<'a> {
    pub fn new(record: &'a Record, query: &Query) -> Self {
        let code = record.code.to_lowercase();
        let q = query.as_str();
        Self {
            record,
            exact: code == q,
            code_prefix: code.starts_with(q),
            word_start: words(record).any(|word| word.starts_with(q)),
            code_len: record.code.chars().count(),
        }
    }

    /// Compare two keys built for the same query. `Less` means `self` ranks
    /// higher.
    pub fn cmp_rank(&self, other: &Self) -> Ordering {
        // `true` sorts first on every boolean tier.
        other
            .exact
            .cmp(&self.exact)
            .then_with(|| {
                if self.exact && other.exact {
                    type_order(self.record).cmp(&type_order(other.record))
                } else {
                    Ordering::Equal
                }
            })
            .then_with(|| other.code_prefix.cmp(&self.code_prefix))
            .then_with(|| other.word_start.cmp(&self.word_start))
            .then_with(|| self.code_len.cmp(&other.code_len))
            .then_with(|| collate(&self.record.description, &other.record.description))
    }
}

/// Compare two records under `query`. `Less` means `a` ranks higher.
pub fn compare(a: &Record, b: &Record, query: &Query) -> Ordering {
    RankKey::new(a, query).cmp_rank(&RankKey::new(b, query))
}

fn type_order(record: &Record) -> u8 {
    u8::from(!record.is_make())
}

// ---------------------------------------------------------------------------
// Text helpers
// ---------------------------------------------------------------------------

/// Lowercased words of a record's display text (description, model and make
/// name), split on whitespace and hyphens.
pub fn words(record: &Record) -> impl Iterator<Item = String> + '_ {
    [
        record.description.as_str(),
        record.model.as_str(),
        record.make_name.as_str(),
    ]
    .into_iter()
    .flat_map(|text| text.split(|c: char| c.is_whitespace() || c == '-'))
    .filter(|word| !word.is_empty())
    .map(str::to_lowercase)
}

/// Multi-level alphabetical order in the manner of a root-locale collator:
/// base letters first, then accents (unaccented before accented), then case
/// (lowercase before uppercase). The raw text settles anything left so that
/// distinct strings never compare equal.
fn collate(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| with_accents(a).cmp(with_accents(b)))
        .then_with(|| uppercase_flags(a).cmp(uppercase_flags(b)))
        .then_with(|| a.cmp(b))
}

fn base_letters(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd()
        .filter(|&c| !is_combining_mark(c))
        .flat_map(char::to_lowercase)
}

fn with_accents(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd().flat_map(char::to_lowercase)
}

fn uppercase_flags(text: &str) -> impl Iterator<Item = bool> + '_ {
    text.nfd()
        .filter(|&c| !is_combining_mark(c))
        .map(char::is_uppercase)
}
