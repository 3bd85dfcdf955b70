use vmo_core::Dataset;

use crate::engine::{self, Hit, SearchResults};
use crate::query::Query;

/// Memoizes the most recent search against one dataset.
///
/// Interactive front ends search on every keystroke and often repeat the
/// same normalized query (trailing spaces, case changes). The cache keeps
/// the ranked order for the last query and rebuilds results from it.
/// Results are identical to calling [`engine::search`] directly.
#[derive(Debug)]
pub struct SearchCache<'a> {
    dataset: &'a Dataset,
    last: Option<Memo>,
    hits: u64,
    misses: u64,
}

#[derive(Debug)]
struct Memo {
    query: Query,
    indices: Vec<(usize, bool)>,
    total_matches: usize,
}

impl<'a> SearchCache<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            last: None,
            hits: 0,
            misses: 0,
        }
    }

    /// Search for `raw`, reusing the last ranking when the normalized query
    /// is unchanged.
    pub fn search(&mut self, raw: &str) -> SearchResults<'a> {
        let Some(query) = Query::parse(raw) else {
            return engine::search(self.dataset, "");
        };

        if let Some(memo) = self.last.as_ref().filter(|memo| memo.query == query) {
            self.hits += 1;
            log::trace!("cache hit for {:?}", query.as_str());
            return memo.rebuild(self.dataset);
        }

        self.misses += 1;
        let results = engine::search_query(self.dataset, query.clone());
        self.last = Some(Memo {
            query,
            indices: results
                .hits()
                .iter()
                .map(|hit| (hit.index, hit.exact))
                .collect(),
            total_matches: results.total_matches(),
        });
        results
    }

    /// Number of searches answered from the memo.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of searches that had to rank the dataset.
    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn clear(&mut self) {
        self.last = None;
    }
}

impl Memo {
    fn rebuild<'a>(&self, dataset: &'a Dataset) -> SearchResults<'a> {
        let hits = self
            .indices
            .iter()
            .filter_map(|&(index, exact)| {
                dataset.get(index).map(|record| Hit {
                    index,
                    record,
                    exact,
                })
            })
            .collect();
        SearchResults::new(self.query.clone(), hits, self.total_matches)
    }
}
