use vmo_core::{Dataset, Record};

use crate::query::Query;
use crate::rank::RankKey;

/// Hard cap on the number of results returned by a search.
pub const MAX_RESULTS: usize = 75;

/// One ranked result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit<'a> {
    /// Position of the record in the dataset.
    pub index: usize,
    pub record: &'a Record,
    /// The record's code equals the query.
    pub exact: bool,
}

/// The outcome of a search.
///
/// An idle result (no query) and a result with zero matches are both empty,
/// but only the latter has a [`query`](SearchResults::query).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults<'a> {
    query: Option<Query>,
    hits: Vec<Hit<'a>>,
    total_matches: usize,
}

impl<'a> SearchResults<'a> {
    pub(crate) fn idle() -> Self {
        Self {
            query: None,
            hits: Vec::new(),
            total_matches: 0,
        }
    }

    pub(crate) fn new(query: Query, hits: Vec<Hit<'a>>, total_matches: usize) -> Self {
        Self {
            query: Some(query),
            hits,
            total_matches,
        }
    }

    /// The normalized query, or `None` when no search was performed.
    pub fn query(&self) -> Option<&Query> {
        self.query.as_ref()
    }

    pub fn hits(&self) -> &[Hit<'a>] {
        &self.hits
    }

    pub fn records(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.hits.iter().map(|hit| hit.record)
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// True when the query was blank and nothing was searched.
    pub fn is_idle(&self) -> bool {
        self.query.is_none()
    }

    /// Matches found before the result cap was applied.
    pub fn total_matches(&self) -> usize {
        self.total_matches
    }

    pub fn is_truncated(&self) -> bool {
        self.total_matches > self.hits.len()
    }

    /// The top result, if it is an exact code match.
    pub fn exact_match(&self) -> Option<&Hit<'a>> {
        self.hits.first().filter(|hit| hit.exact)
    }
}

/// Whether `record` is a candidate for `query`: its code starts with the
/// query, or its search terms contain it.
pub fn matches(record: &Record, query: &Query) -> bool {
    let q = query.as_str();
    record.code.to_lowercase().starts_with(q) || record.search_terms.to_lowercase().contains(q)
}

/// Search `dataset` for whatever the user typed.
///
/// Blank input returns an idle result. Never fails.
pub fn search<'a>(dataset: &'a Dataset, raw: &str) -> SearchResults<'a> {
    match Query::parse(raw) {
        Some(query) => search_query(dataset, query),
        None => SearchResults::idle(),
    }
}

/// Search `dataset` with an already-normalized query.
pub fn search_query(dataset: &Dataset, query: Query) -> SearchResults<'_> {
    let mut candidates: Vec<(usize, RankKey<'_>)> = dataset
        .iter()
        .enumerate()
        .filter(|(_, record)| matches(record, &query))
        .map(|(index, record)| (index, RankKey::new(record, &query)))
        .collect();

    // Stable, so records that rank equal keep dataset order.
    candidates.sort_by(|(_, a), (_, b)| a.cmp_rank(b));

    let total_matches = candidates.len();
    let hits: Vec<Hit<'_>> = candidates
        .into_iter()
        .take(MAX_RESULTS)
        .map(|(index, key)| Hit {
            index,
            record: key.record,
            exact: key.exact,
        })
        .collect();

    log::trace!(
        "query {:?}: {} matches, returning {}",
        query.as_str(),
        total_matches,
        hits.len()
    );
    SearchResults::new(query, hits, total_matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            Record::model("F", "FORD", "F150", "F-150 PICKUP").with_model("F-150"),
            Record::make("F", "FORD"),
            Record::model("F", "FORD", "E150", "ECONOLINE VAN"),
            Record::model("GMC", "GMC", "0AKL", "OAKLAND"),
            Record::model("GMC", "GMC", "CNV", "CONVERSION 0AKL BODY"),
        ])
        .unwrap()
    }

    fn codes<'a>(results: &SearchResults<'a>) -> Vec<&'a str> {
        results.records().map(|r| r.code.as_str()).collect()
    }

    #[test]
    fn test_blank_query_is_idle() {
        let dataset = dataset();
        for raw in ["", "   ", "\t\n"] {
            let results = search(&dataset, raw);
            assert!(results.is_idle());
            assert!(results.is_empty());
            assert_eq!(results.len(), 0);
            assert!(results.query().is_none());
        }
    }

    #[test]
    fn test_no_matches_is_not_idle() {
        let dataset = dataset();
        let results = search(&dataset, "zzzz");
        assert!(results.is_empty());
        assert!(!results.is_idle());
        assert_eq!(results.query().unwrap().as_str(), "zzzz");
    }

    #[test]
    fn test_exact_make_ranks_first() {
        let dataset = dataset();
        let results = search(&dataset, "f");
        assert_eq!(codes(&results)[..2], ["F", "F150"]);
        assert!(results.hits()[0].exact);
        assert!(!results.hits()[1].exact);
        assert_eq!(results.exact_match().unwrap().record.id, "make-F");
    }

    #[test]
    fn test_exact_code_before_search_terms_match() {
        let dataset = dataset();
        let results = search(&dataset, "0AKL");
        assert_eq!(codes(&results), vec!["0AKL", "CNV"]);
        assert!(results.hits()[0].exact);
        assert_eq!(results.hits()[0].index, 3);
    }

    #[test]
    fn test_word_start_match() {
        let dataset = dataset();
        let results = search(&dataset, "eco");
        assert_eq!(codes(&results), vec!["E150"]);
        assert!(results.exact_match().is_none());
    }

    #[test]
    fn test_search_terms_substring_match() {
        // "kla" only appears inside words, never at a code start
        let dataset = dataset();
        let results = search(&dataset, "kla");
        assert_eq!(codes(&results), vec!["0AKL"]);
    }

    #[test]
    fn test_custom_search_terms_drive_the_filter() {
        let dataset = Dataset::from_records(vec![
            Record::model("F", "FORD", "TBRD", "THUNDERBIRD").with_search_terms("TBIRD T-BIRD"),
            Record::model("F", "FORD", "E150", "ECONOLINE VAN"),
        ])
        .unwrap();

        // Only in the custom terms, and not at a word start of the display text.
        assert_eq!(codes(&search(&dataset, "bird")), vec!["TBRD"]);
        // The generated terms were replaced, so the make name no longer matches.
        assert_eq!(codes(&search(&dataset, "ford")), vec!["E150"]);
    }

    #[test]
    fn test_description_order_ignores_accents_and_puts_lowercase_first() {
        let dataset = Dataset::from_records(vec![
            Record::model("X", "ACME", "X1", "ZETA"),
            Record::model("X", "ACME", "X2", "ÉCLAIR"),
            Record::model("X", "ACME", "X3", "Apple"),
            Record::model("X", "ACME", "X4", "apple"),
        ])
        .unwrap();
        let descriptions: Vec<&str> = search(&dataset, "x")
            .records()
            .map(|r| r.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["apple", "Apple", "ÉCLAIR", "ZETA"]);
    }

    #[test]
    fn test_query_is_trimmed_and_case_folded() {
        let dataset = dataset();
        assert_eq!(search(&dataset, "  EcO "), search(&dataset, "eco"));
    }

    #[test]
    fn test_results_are_capped() {
        let records: Vec<Record> = (0..200)
            .map(|i| Record::model("F", "FORD", format!("F{i:03}"), format!("MODEL {i}")))
            .collect();
        let dataset = Dataset::from_records(records).unwrap();

        let results = search(&dataset, "f");
        assert_eq!(results.len(), MAX_RESULTS);
        assert_eq!(results.total_matches(), 200);
        assert!(results.is_truncated());
    }

    #[test]
    fn test_equal_ranks_keep_dataset_order() {
        let dataset = Dataset::from_records(vec![
            Record::model("A", "ACME", "X1", "SAME").with_id("first"),
            Record::model("B", "ACME", "X1", "SAME").with_id("second"),
        ])
        .unwrap();
        let ids: Vec<&str> = search(&dataset, "x")
            .records()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["first", "second"]);
    }
}
