use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::path::Path;
use vmo_search::{search, SearchCache, SearchResults, MAX_RESULTS};

use super::load_dataset;

/// Look up a single query and print the results.
pub fn run_search(dataset_path: &Path, query: &str, json: bool) -> Result<()> {
    let dataset = load_dataset(dataset_path)?;
    let results = search(&dataset, query);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        let records: Vec<_> = results.records().collect();
        serde_json::to_writer_pretty(&mut out, &records).context("Failed to write JSON")?;
        writeln!(out)?;
    } else {
        render_results(&mut out, query, &results)?;
    }
    Ok(())
}

/// Read queries from stdin and print results for each line.
pub fn run_interactive(dataset_path: &Path) -> Result<()> {
    let dataset = load_dataset(dataset_path)?;
    let mut cache = SearchCache::new(&dataset);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();

    render_results(&mut out, "", &cache.search(""))?;
    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line).context("Failed to read query")? == 0 {
            break;
        }
        let query = line.trim_end_matches(['\r', '\n']);
        if query.trim() == ":q" {
            break;
        }
        render_results(&mut out, query, &cache.search(query))?;
    }

    log::debug!(
        "Interactive session: {} cached, {} ranked",
        cache.hits(),
        cache.misses()
    );
    Ok(())
}

/// Print results the way a person reads them: count, then one block per
/// record, with distinct messages for "nothing typed" and "nothing found".
pub fn render_results<W: Write>(
    out: &mut W,
    query: &str,
    results: &SearchResults<'_>,
) -> io::Result<()> {
    if results.is_idle() {
        writeln!(out, "System ready. Enter a code (e.g. 0AKL) or a name.")?;
        return Ok(());
    }

    if results.is_empty() {
        writeln!(out, "No matches found")?;
        writeln!(out, "  Query: {}", query.trim())?;
        return Ok(());
    }

    if results.is_truncated() {
        writeln!(
            out,
            "{} results (showing first {} of {})",
            results.len(),
            MAX_RESULTS,
            results.total_matches()
        )?;
    } else {
        writeln!(out, "{} results", results.len())?;
    }
    writeln!(out)?;

    for hit in results.hits() {
        let record = hit.record;
        if hit.exact {
            writeln!(out, "  {:<8}  {}  [EXACT MATCH]", record.code, record.title())?;
        } else {
            writeln!(out, "  {:<8}  {}", record.code, record.title())?;
        }
        writeln!(out, "  {:<8}  {}", "", record.subtitle())?;
    }
    Ok(())
}
