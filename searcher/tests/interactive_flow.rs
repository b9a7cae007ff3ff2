use searcher::{render_json, run_interactive, run_query, EMPTY_QUERY, NO_RESULTS};
use std::fs::File;
use std::io::{Cursor, Write};
use tempfile::tempdir;
use vsm_core::{EngineError, SearchEngine};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

fn build_tiny_corpus(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("corpus-1.zip");
    let mut zw = ZipWriter::new(File::create(&path).unwrap());
    let opts = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    for (name, body) in [("0.txt", "cat sat mat"), ("1.txt", "dog sat log"), ("2.txt", "cat dog met")] {
        zw.start_file(name, opts).unwrap();
        zw.write_all(body.as_bytes()).unwrap();
    }
    zw.finish().unwrap();
    path
}

#[test]
fn interactive_session_renders_each_query() {
    let dir = tempdir().unwrap();
    let engine = SearchEngine::default();
    engine.build_index(build_tiny_corpus(dir.path())).unwrap();

    let input = Cursor::new("cat dog\n   \nzzz\n");
    let mut out = Vec::new();
    run_interactive(&engine, input, &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    let first = out.lines().next().unwrap();
    assert_eq!(first, "DocID: 2 (Relevance Score: 0.8165)");
    assert!(out.contains("DocID: 0 (Relevance Score: 0.4082)"));
    assert!(out.contains(EMPTY_QUERY));
    assert!(out.trim_end().ends_with(NO_RESULTS));
}

#[test]
fn blank_query_is_not_sent_to_engine() {
    // engine has no index: a blank query must not surface IndexNotBuilt
    let engine = SearchEngine::default();
    assert!(run_query(&engine, "  ").unwrap().is_none());
    let err = run_query(&engine, "cat").unwrap_err();
    assert!(matches!(err.downcast_ref::<EngineError>(), Some(EngineError::IndexNotBuilt)));
}

#[test]
fn json_output_lists_hits_in_rank_order() {
    let dir = tempdir().unwrap();
    let engine = SearchEngine::default();
    engine.build_index(build_tiny_corpus(dir.path())).unwrap();
    let hits = run_query(&engine, "cat dog").unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&render_json("cat dog", &hits).unwrap()).unwrap();
    let arr = json["results"].as_array().unwrap();
    assert_eq!(json["total_hits"].as_u64().unwrap(), 3);
    assert_eq!(arr[0]["doc_id"].as_u64().unwrap(), 2);
    assert_eq!(arr[0]["content"].as_str().unwrap(), "cat dog met");
}
