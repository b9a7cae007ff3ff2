use crate::config::EngineConfig;
use crate::corpus::{load_corpus, load_corpus_from_reader, LoadedCorpus};
use crate::error::{DecodeSkipped, EngineError, Result};
use crate::index::{Index, IndexStats};
use crate::search::SearchHit;
use parking_lot::{Mutex, RwLock};
use std::io::{Read, Seek};
use std::path::Path;
use std::sync::Arc;

/// Holds the currently published index generation.
///
/// Builds run one at a time and assemble a complete [`Index`] before swapping it in,
/// so searches always see either the previous generation or the new one in full.
/// A failed build leaves the published generation untouched.
#[derive(Default)]
pub struct SearchEngine {
    config: EngineConfig,
    current: RwLock<Option<Arc<Index>>>,
    build_lock: Mutex<()>,
}

impl SearchEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config, current: RwLock::new(None), build_lock: Mutex::new(()) }
    }

    pub fn build_index<P: AsRef<Path>>(&self, path: P) -> Result<IndexStats> {
        let _guard = self.build_lock.lock();
        tracing::info!(corpus = %path.as_ref().display(), "building index");
        let corpus = load_corpus(path, &self.config)?;
        Ok(self.publish(corpus))
    }

    pub fn build_from_reader<R: Read + Seek>(&self, reader: R) -> Result<IndexStats> {
        let _guard = self.build_lock.lock();
        tracing::info!("building index from archive handle");
        let corpus = load_corpus_from_reader(reader, &self.config)?;
        Ok(self.publish(corpus))
    }

    pub fn build_from_texts<I, S>(&self, texts: I) -> IndexStats
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let _guard = self.build_lock.lock();
        let index = Index::from_texts(texts);
        self.swap_in(index, Vec::new())
    }

    fn publish(&self, corpus: LoadedCorpus) -> IndexStats {
        let LoadedCorpus { documents, skipped } = corpus;
        self.swap_in(Index::build(documents), skipped)
    }

    fn swap_in(&self, index: Index, skipped: Vec<DecodeSkipped>) -> IndexStats {
        let stats = index.stats(skipped);
        *self.current.write() = Some(Arc::new(index));
        tracing::info!(num_docs = stats.num_docs, num_terms = stats.num_terms, skipped = stats.skipped.len(), "index build complete");
        stats
    }

    /// The published generation, if any. Holding the `Arc` pins that generation.
    pub fn snapshot(&self) -> Option<Arc<Index>> { self.current.read().clone() }

    pub fn is_built(&self) -> bool { self.current.read().is_some() }

    pub fn search(&self, query: &str) -> Result<Vec<SearchHit>> {
        let index = self.snapshot().ok_or(EngineError::IndexNotBuilt)?;
        Ok(index.search(query, self.config.top_k))
    }
}
