use anyhow::Result;
use std::io::{BufRead, Write};
use vsm_core::{SearchEngine, SearchHit};

pub const EMPTY_QUERY: &str = "Please enter a query to search.";
pub const NO_RESULTS: &str = "No matching documents found. Try a different query.";

/// Run one query. Blank queries are rejected here rather than sent to the engine.
pub fn run_query(engine: &SearchEngine, query: &str) -> Result<Option<Vec<SearchHit>>> {
    if query.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(engine.search(query)?))
}

pub fn render_hits(hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return format!("{NO_RESULTS}\n");
    }
    let mut out = String::new();
    for hit in hits {
        out.push_str(&format!("DocID: {} (Relevance Score: {:.4})\n", hit.doc_id, hit.score));
        out.push_str(hit.content.trim_end());
        out.push_str("\n\n");
    }
    out
}

pub fn render_json(query: &str, hits: &[SearchHit]) -> Result<String> {
    let body = serde_json::json!({ "query": query, "total_hits": hits.len(), "results": hits });
    Ok(serde_json::to_string_pretty(&body)?)
}

/// Read queries line by line until EOF, writing rendered results for each.
pub fn run_interactive<R: BufRead, W: Write>(engine: &SearchEngine, input: R, mut output: W) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        match run_query(engine, &line)? {
            Some(hits) => {
                tracing::info!(query = %line.trim(), hits = hits.len(), "query served");
                output.write_all(render_hits(&hits).as_bytes())?;
            }
            None => writeln!(output, "{EMPTY_QUERY}")?,
        }
        output.flush()?;
    }
    Ok(())
}
