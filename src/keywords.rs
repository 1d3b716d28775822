//! Keyword search over bookmark tags with a binary term matrix.
//!
//! Every record's tags are joined into one corpus line, vectorized into a
//! sparse 0/1 matrix over the tag vocabulary, and scored against a query
//! vector by a single matrix-vector product.

pub mod record;
pub mod report;
pub mod scorer;
pub mod vectorizer;

use nalgebra_sparse::CsrMatrix;
use thiserror::Error;

pub use record::{Record, load_records, sample_records};
pub use report::{ScoreRow, ScoreTable};
pub use scorer::{MatchMode, ScoredRecord, rank, score};
pub use vectorizer::{
    QueryEncoding, TagVectorizer, VectorizerConfig, VectorizerConfigBuilder, Vocabulary,
    VocabularyOrder,
};

pub const DEFAULT_QUERY: &str = "caching, frontend";

#[derive(Debug, Error)]
pub enum KeywordError {
    #[error("failed to read records from {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed records: {0}")]
    Json(#[from] serde_json::Error),
    #[error("shape mismatch: matrix has {matrix_cols} columns, query has {query_len}")]
    ShapeMismatch { matrix_cols: usize, query_len: usize },
}

/// A fitted vectorizer together with the matrix of the records it was fitted on.
pub struct KeywordSearch {
    records: Vec<Record>,
    vectorizer: TagVectorizer,
    matrix: CsrMatrix<i32>,
    mode: MatchMode,
}
impl KeywordSearch {
    pub fn new(records: Vec<Record>, config: VectorizerConfig, mode: MatchMode) -> Self {
        let corpus = records
            .iter()
            .map(|record| record.corpus_line(config.separator()))
            .collect::<Vec<_>>();
        let mut vectorizer = TagVectorizer::new(config);
        let matrix = vectorizer.fit_transform(&corpus);
        log::info!(
            "indexed {} records over {} tags",
            records.len(),
            vectorizer.vocabulary().len()
        );
        Self {
            records,
            vectorizer,
            matrix,
            mode,
        }
    }
    pub fn records(&self) -> &[Record] {
        &self.records
    }
    pub fn vocabulary(&self) -> &Vocabulary {
        self.vectorizer.vocabulary()
    }
    pub fn matrix(&self) -> &CsrMatrix<i32> {
        &self.matrix
    }
    pub fn encode(&self, query: &str) -> QueryEncoding {
        self.vectorizer.encode_query(query)
    }
    pub fn ranked(&self, query: &str) -> Result<Vec<ScoredRecord>, KeywordError> {
        let encoding = self.encode(query);
        let scores = score(&self.matrix, &encoding, self.mode)?;
        Ok(rank(&self.records, &scores))
    }
    pub fn run(&self, query: &str) -> Result<ScoreTable, KeywordError> {
        let encoding = self.encode(query);
        let scores = score(&self.matrix, &encoding, self.mode)?;
        let ranked = rank(&self.records, &scores);
        Ok(ScoreTable::new(
            self.vocabulary().tokens(),
            &self.matrix,
            &ranked,
            encoding.unmatched,
        ))
    }
}
