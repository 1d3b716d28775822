use std::path::Path;

use serde::{Deserialize, Serialize};

use super::KeywordError;

const SAMPLE_BOOKMARKS: &str = include_str!("../../data/bookmarks.json");

/// A bookmarked url with its tag labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub url: String,
    pub tags: Vec<String>,
}
impl Record {
    pub fn new(url: impl Into<String>, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            url: url.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
    /// The tags joined with `separator`, i.e. the text the vectorizer sees.
    pub fn corpus_line(&self, separator: &str) -> String {
        self.tags.join(separator)
    }
}

/// The twenty Django bookmarks the notebook entry was written against.
pub fn sample_records() -> Result<Vec<Record>, KeywordError> {
    Ok(serde_json::from_str(SAMPLE_BOOKMARKS)?)
}

pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Record>, KeywordError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| KeywordError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let records: Vec<Record> = serde_json::from_str(&raw)?;
    log::debug!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_sample_records() {
        let records = sample_records().unwrap();
        assert_eq!(records.len(), 20);
        assert_eq!(records[0].url, "https://djangoexamples.com/modern-forms");
        assert!(records.iter().all(|r| r.tags.len() == 2));
    }

    #[test]
    fn test_corpus_line() {
        let record = Record::new("https://example.com", ["forms", "Frontend"]);
        assert_eq!(record.corpus_line(", "), "forms, Frontend");
    }

    #[test]
    fn test_load_records_from_file() {
        let path = std::env::temp_dir().join(format!("til_records_ok_{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"[{"url": "https://a.example", "tags": ["forms", "views"]}]"#,
        )
        .unwrap();
        let records = load_records(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(records, vec![Record::new("https://a.example", ["forms", "views"])]);
    }

    #[test]
    fn test_load_malformed_json() {
        let path = std::env::temp_dir().join(format!("til_records_bad_{}.json", std::process::id()));
        std::fs::write(&path, r#"[{"url": "https://a.example", "tags": "forms"}"#).unwrap();
        let err = load_records(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, KeywordError::Json(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_records("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, KeywordError::Io { .. }));
    }
}
