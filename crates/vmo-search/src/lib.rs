//! Ranked search for vmo-lookup.
//!
//! Given a [`Dataset`](vmo_core::Dataset) and whatever the user has typed so
//! far, [`search`] returns at most [`MAX_RESULTS`] matching records, best
//! match first. The search is a pure function of its inputs: it holds no
//! state, performs no I/O and accepts any string without error.
//! [`SearchCache`] memoizes the most recent query for callers that search on
//! every keystroke.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod cache;
pub mod engine;
pub mod query;
pub mod rank;

pub use cache::SearchCache;
pub use engine::{matches, search, search_query, Hit, SearchResults, MAX_RESULTS};
pub use query::{normalize, Query};
pub use rank::{compare, RankKey};
