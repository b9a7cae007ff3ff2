//! In-memory vector-space retrieval: lnc-weighted inverted index, ltc queries, cosine ranking.

pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod index;
pub mod search;
pub mod soundex;
pub mod tokenizer;

pub use config::EngineConfig;
pub use engine::SearchEngine;
pub use error::{DecodeSkipped, EngineError, Result};
pub use index::{DocId, Document, Index, IndexStats};
pub use search::SearchHit;
