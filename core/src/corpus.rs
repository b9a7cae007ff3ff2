use crate::config::EngineConfig;
use crate::error::{DecodeSkipped, EngineError, Result};
use crate::index::{DocId, Document};
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;
use zip::result::ZipError;
use zip::ZipArchive;

/// Documents extracted from one archive, in archive order, plus the entries that were dropped.
#[derive(Debug, Default)]
pub struct LoadedCorpus {
    pub documents: Vec<Document>,
    pub skipped: Vec<DecodeSkipped>,
}

pub fn load_corpus<P: AsRef<Path>>(path: P, config: &EngineConfig) -> Result<LoadedCorpus> {
    let path = path.as_ref();
    let not_found = |source: ZipError| EngineError::CorpusNotFound { location: path.display().to_string(), source };
    let file = File::open(path).map_err(|e| not_found(ZipError::Io(e)))?;
    read_archive(file, config).map_err(not_found)
}

/// Same as [`load_corpus`] for an archive that is already open.
pub fn load_corpus_from_reader<R: Read + Seek>(reader: R, config: &EngineConfig) -> Result<LoadedCorpus> {
    read_archive(reader, config)
        .map_err(|source| EngineError::CorpusNotFound { location: "<archive handle>".to_string(), source })
}

fn read_archive<R: Read + Seek>(reader: R, config: &EngineConfig) -> std::result::Result<LoadedCorpus, ZipError> {
    let mut archive = ZipArchive::new(reader)?;
    let mut corpus = LoadedCorpus::default();

    // central directory order is the document id order
    for i in 0..archive.len() {
        // filter on the central directory name before touching the payload
        let name = match archive.name_for_index(i) {
            Some(name) => name.to_string(),
            None => continue,
        };
        if name.ends_with('/') || !config.is_text_entry(&name) {
            continue;
        }
        let mut entry = match archive.by_index(i) {
            Ok(entry) => entry,
            Err(e) => {
                skip(&mut corpus, name, e);
                continue;
            }
        };
        let mut buf = Vec::with_capacity(entry.size() as usize);
        match entry.read_to_end(&mut buf) {
            Ok(_) => {
                let id = corpus.documents.len() as DocId;
                corpus.documents.push(Document { id, content: decode_text(buf) });
            }
            Err(e) => skip(&mut corpus, name, e),
        }
    }
    Ok(corpus)
}

fn skip(corpus: &mut LoadedCorpus, entry: String, err: impl std::fmt::Display) {
    tracing::warn!(entry = %entry, error = %err, "skipping archive entry");
    corpus.skipped.push(DecodeSkipped { entry, reason: err.to_string() });
}

/// UTF-8, falling back to Latin-1 (each byte is the code point of the same value).
pub fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => e.into_bytes().into_iter().map(char::from).collect(),
    }
}
