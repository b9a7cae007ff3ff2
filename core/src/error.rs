/// Errors surfaced by building or querying an index.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("corpus archive not found or unreadable at {location}: {source}")]
    CorpusNotFound {
        location: String,
        #[source]
        source: zip::result::ZipError,
    },
    #[error("index not built yet; call build_index first")]
    IndexNotBuilt,
}

pub type Result<T> = std::result::Result<T, EngineError>;

/// An archive entry dropped from the corpus. Non-fatal: the build continues without it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DecodeSkipped {
    pub entry: String,
    pub reason: String,
}
