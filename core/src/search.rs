use crate::index::{log_tf, DocId, Index};
use crate::tokenizer::tokenize;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub doc_id: DocId,
    pub score: f64,
    pub content: String,
}

/// ltc query vector: distinct term -> `(1 + log10(tf)) * log10(N / df)`, 0 for unknown terms.
#[derive(Debug, Clone, Default)]
pub struct QueryVector {
    pub weights: BTreeMap<String, f64>,
    pub length: f64,
}

impl Index {
    pub fn query_vector(&self, query: &str) -> QueryVector {
        let mut tf_q: BTreeMap<String, u32> = BTreeMap::new();
        for term in tokenize(query) {
            *tf_q.entry(term).or_insert(0) += 1;
        }

        let n = self.num_docs() as f64;
        let mut squared_sum = 0.0f64;
        let mut weights = BTreeMap::new();
        for (term, count) in tf_q {
            let df_t = self.doc_freq(&term);
            let weight = if df_t > 0 { log_tf(count) * (n / df_t as f64).log10() } else { 0.0 };
            squared_sum += weight * weight;
            weights.insert(term, weight);
        }
        QueryVector { weights, length: squared_sum.sqrt() }
    }

    /// Rank documents against `query` by lnc.ltc cosine similarity.
    ///
    /// Candidates are the documents sharing at least one term with the query. Ties on
    /// score go to the lower document id. At most `top_k` hits are returned.
    pub fn search(&self, query: &str, top_k: usize) -> Vec<SearchHit> {
        let qv = self.query_vector(query);

        let mut candidates: BTreeSet<DocId> = BTreeSet::new();
        for term in qv.weights.keys() {
            if let Some(postings) = self.postings(term) {
                candidates.extend(postings.keys().copied());
            }
        }
        if candidates.is_empty() {
            tracing::debug!(terms = qv.weights.len(), "no candidate documents");
            return Vec::new();
        }
        let num_candidates = candidates.len();

        let mut scored: Vec<(DocId, f64)> = candidates
            .into_iter()
            .map(|doc_id| {
                let doc_len = self.doc_length(doc_id);
                if doc_len == 0.0 || qv.length == 0.0 {
                    return (doc_id, 0.0);
                }
                let dot: f64 = qv.weights.iter().map(|(term, q_w)| self.weight(term, doc_id) * q_w).sum();
                (doc_id, dot / (doc_len * qv.length))
            })
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        scored.truncate(top_k);

        let hits: Vec<SearchHit> = scored
            .into_iter()
            .filter_map(|(doc_id, score)| {
                self.document(doc_id).map(|doc| SearchHit { doc_id, score, content: doc.content.clone() })
            })
            .collect();
        tracing::debug!(terms = qv.weights.len(), candidates = num_candidates, hits = hits.len(), "search complete");
        hits
    }
}
