use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Archive entries are documents only when their name ends in `.<ext>` for one of these.
    pub text_extensions: Vec<String>,
    /// Maximum number of hits returned per query.
    pub top_k: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { text_extensions: vec!["txt".to_string()], top_k: 10 }
    }
}

impl EngineConfig {
    pub fn is_text_entry(&self, name: &str) -> bool {
        self.text_extensions
            .iter()
            .any(|ext| name.ends_with(&format!(".{ext}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_txt_only() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.top_k, 10);
        assert!(cfg.is_text_entry("docs/a.txt"));
        assert!(cfg.is_text_entry(".txt"));
        assert!(!cfg.is_text_entry("a.TXT"));
        assert!(!cfg.is_text_entry("a.md"));
        assert!(!cfg.is_text_entry("txt"));
        assert!(!cfg.is_text_entry("notes/"));
    }
}
