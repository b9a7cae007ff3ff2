use crate::error::DecodeSkipped;
use crate::tokenizer::tokenize;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

pub type DocId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub content: String,
}

/// lnc postings for one term: document id -> `1 + log10(tf)`, always > 0.
pub type Postings = BTreeMap<DocId, f64>;

/// One immutable index generation. Built in a single pass and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Index {
    docs: Vec<Document>,
    postings: HashMap<String, Postings>,
    df: HashMap<String, u32>,
    doc_lengths: Vec<f64>,
    num_docs: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexStats {
    pub num_docs: u32,
    pub num_terms: usize,
    pub skipped: Vec<DecodeSkipped>,
}

impl Index {
    /// Build from documents whose ids are their positions in `docs`.
    pub fn build(docs: Vec<Document>) -> Self {
        let mut postings: HashMap<String, Postings> = HashMap::new();
        let mut df: HashMap<String, u32> = HashMap::new();
        let mut doc_lengths = Vec::with_capacity(docs.len());

        for doc in &docs {
            // ordered so the norm below sums in the same order on every build
            let mut tf_counts: BTreeMap<String, u32> = BTreeMap::new();
            for term in tokenize(&doc.content) {
                *tf_counts.entry(term).or_insert(0) += 1;
            }

            let mut squared_sum = 0.0f64;
            for (term, count) in tf_counts {
                let weight = log_tf(count);
                squared_sum += weight * weight;
                *df.entry(term.clone()).or_insert(0) += 1;
                postings.entry(term).or_default().insert(doc.id, weight);
            }
            doc_lengths.push(squared_sum.sqrt());
        }

        let num_docs = docs.len() as u32;
        tracing::debug!(num_docs, num_terms = postings.len(), "index generation built");
        Self { docs, postings, df, doc_lengths, num_docs }
    }

    /// Build from raw texts, assigning ids in iteration order.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let docs = texts
            .into_iter()
            .enumerate()
            .map(|(i, content)| Document { id: i as DocId, content: content.into() })
            .collect();
        Self::build(docs)
    }

    pub fn num_docs(&self) -> u32 { self.num_docs }

    pub fn num_terms(&self) -> usize { self.postings.len() }

    pub fn documents(&self) -> &[Document] { &self.docs }

    pub fn document(&self, id: DocId) -> Option<&Document> { self.docs.get(id as usize) }

    pub fn terms(&self) -> impl Iterator<Item = &str> + '_ { self.postings.keys().map(String::as_str) }

    pub fn postings(&self, term: &str) -> Option<&Postings> { self.postings.get(term) }

    /// Number of documents containing `term`; 0 when the term is not in the vocabulary.
    pub fn doc_freq(&self, term: &str) -> u32 { self.df.get(term).copied().unwrap_or(0) }

    /// Stored lnc weight of `term` in `doc`; 0.0 when absent.
    pub fn weight(&self, term: &str, doc: DocId) -> f64 {
        self.postings.get(term).and_then(|p| p.get(&doc)).copied().unwrap_or(0.0)
    }

    /// Euclidean norm of the document's lnc vector; 0.0 for unknown ids.
    pub fn doc_length(&self, doc: DocId) -> f64 { self.doc_lengths.get(doc as usize).copied().unwrap_or(0.0) }

    pub fn stats(&self, skipped: Vec<DecodeSkipped>) -> IndexStats {
        IndexStats { num_docs: self.num_docs, num_terms: self.num_terms(), skipped }
    }
}

/// `1 + log10(count)`; callers only pass counts >= 1.
pub(crate) fn log_tf(count: u32) -> f64 { 1.0 + (count as f64).log10() }
