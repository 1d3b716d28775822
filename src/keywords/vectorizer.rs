use std::collections::{HashMap, HashSet};

use nalgebra::DVector;
use nalgebra_sparse::{CooMatrix, CsrMatrix};
use serde::{Deserialize, Serialize};

use crate::utils::pipe::IteratorPipe;

pub const DEFAULT_SEPARATOR: &str = ", ";

/// Column order of the term matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VocabularyOrder {
    /// Columns follow the order in which tokens first appear in the corpus.
    #[default]
    FirstSeen,
    /// Columns are sorted by token, the way scikit-style vectorizers report features.
    Lexicographic,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorizerConfig {
    separator: String,
    case_fold: bool,
    order: VocabularyOrder,
}
impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            case_fold: false,
            order: VocabularyOrder::FirstSeen,
        }
    }
}
impl VectorizerConfig {
    pub fn separator(&self) -> &str {
        self.separator.as_str()
    }
    pub fn case_fold(&self) -> bool {
        self.case_fold
    }
    pub fn order(&self) -> VocabularyOrder {
        self.order
    }
}
pub struct VectorizerConfigBuilder {
    separator: Option<String>,
    case_fold: Option<bool>,
    order: Option<VocabularyOrder>,
}
impl VectorizerConfigBuilder {
    pub fn new() -> Self {
        Self {
            separator: None,
            case_fold: None,
            order: None,
        }
    }
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }
    pub fn case_fold(mut self, case_fold: bool) -> Self {
        self.case_fold = Some(case_fold);
        self
    }
    pub fn order(mut self, order: VocabularyOrder) -> Self {
        self.order = Some(order);
        self
    }
    pub fn build(self) -> VectorizerConfig {
        VectorizerConfig {
            separator: self
                .separator
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_SEPARATOR.to_string()),
            case_fold: self.case_fold.unwrap_or(false),
            order: self.order.unwrap_or_default(),
        }
    }
}
impl Default for VectorizerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits on the literal separator. No stemming, no trimming beyond dropping empty pieces.
pub fn tokenize(text: &str, separator: &str) -> Vec<String> {
    text.split(separator)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Deduplicated tokens of a fitted corpus, one per matrix column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    tokens: Vec<String>,
    index: HashMap<String, usize>,
}
impl Vocabulary {
    fn from_tokens<I>(tokens: I, order: VocabularyOrder) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut seen = HashSet::new();
        let mut ordered: Vec<String> = tokens
            .into_iter()
            .filter(|token| seen.insert(token.clone()))
            .collect();
        if order == VocabularyOrder::Lexicographic {
            ordered.sort();
        }
        let index = ordered
            .iter()
            .enumerate()
            .map(|(i, token)| (token.clone(), i))
            .collect();
        Self {
            tokens: ordered,
            index,
        }
    }
    pub fn len(&self) -> usize {
        self.tokens.len()
    }
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
    pub fn get(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

/// Binary query vector over a vocabulary, plus the tokens that had no column.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryEncoding {
    pub vector: DVector<i32>,
    pub unmatched: Vec<String>,
}
impl QueryEncoding {
    /// Number of distinct vocabulary tokens present in the query.
    pub fn matched_count(&self) -> u32 {
        self.vector.iter().filter(|&&v| v > 0).count() as u32
    }
}

/// Binary bag-of-tags vectorizer.
#[derive(Debug, Clone)]
pub struct TagVectorizer {
    config: VectorizerConfig,
    vocabulary: Vocabulary,
}
impl TagVectorizer {
    pub fn new(config: VectorizerConfig) -> Self {
        Self {
            config,
            vocabulary: Vocabulary::default(),
        }
    }
    pub fn config(&self) -> &VectorizerConfig {
        &self.config
    }
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
    fn analyze(&self, text: &str) -> Vec<String> {
        tokenize(text, self.config.separator())
            .into_iter()
            .pipe_if(self.config.case_fold(), |tokens| {
                tokens.map(|token| token.to_lowercase())
            })
            .collect()
    }
    pub fn fit<S: AsRef<str>>(&mut self, corpus: &[S]) -> &Vocabulary {
        let tokens = corpus
            .iter()
            .flat_map(|line| self.analyze(line.as_ref()))
            .collect::<Vec<_>>();
        self.vocabulary = Vocabulary::from_tokens(tokens, self.config.order());
        log::debug!(
            "fitted vocabulary of {} tokens over {} lines",
            self.vocabulary.len(),
            corpus.len()
        );
        &self.vocabulary
    }
    /// One row per line, one column per vocabulary token, 1 where the token occurs.
    /// Tokens outside the vocabulary are ignored.
    pub fn transform<S: AsRef<str>>(&self, corpus: &[S]) -> CsrMatrix<i32> {
        let mut matrix: CooMatrix<i32> = CooMatrix::zeros(corpus.len(), self.vocabulary.len());
        for (row, line) in corpus.iter().enumerate() {
            //COO -> CSR sums duplicate entries, so each column is pushed at most once per row
            let mut columns = self
                .analyze(line.as_ref())
                .iter()
                .filter_map(|token| self.vocabulary.get(token))
                .collect::<Vec<_>>();
            columns.sort_unstable();
            columns.dedup();
            for col in columns {
                matrix.push(row, col, 1);
            }
        }
        CsrMatrix::from(&matrix)
    }
    pub fn fit_transform<S: AsRef<str>>(&mut self, corpus: &[S]) -> CsrMatrix<i32> {
        self.fit(corpus);
        self.transform(corpus)
    }
    pub fn encode_query(&self, query: &str) -> QueryEncoding {
        let mut vector = DVector::zeros(self.vocabulary.len());
        let mut unmatched: Vec<String> = Vec::new();
        for token in self.analyze(query) {
            match self.vocabulary.get(&token) {
                Some(col) => vector[col] = 1,
                None if !unmatched.contains(&token) => unmatched.push(token),
                None => {}
            }
        }
        if !unmatched.is_empty() {
            log::warn!("query tokens not in vocabulary, ignored: {unmatched:?}");
        }
        QueryEncoding { vector, unmatched }
    }
}
