use nalgebra_sparse::CsrMatrix;
use serde::{Deserialize, Serialize};

use super::KeywordError;
use super::record::Record;
use super::vectorizer::QueryEncoding;
use crate::utils::pipe::IteratorPipe;

/// How raw overlap counts turn into the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchMode {
    /// Number of query tokens the record shares.
    #[default]
    Overlap,
    /// 1 if the record carries every matched query token, else 0.
    All,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredRecord {
    pub url: String,
    pub tags: Vec<String>,
    pub score: u32,
    /// Row of the record in the input order.
    pub position: usize,
}

/// `matrix · query`, one overlap count per matrix row.
pub fn score(
    matrix: &CsrMatrix<i32>,
    query: &QueryEncoding,
    mode: MatchMode,
) -> Result<Vec<u32>, KeywordError> {
    if matrix.ncols() != query.vector.len() {
        return Err(KeywordError::ShapeMismatch {
            matrix_cols: matrix.ncols(),
            query_len: query.vector.len(),
        });
    }
    //signed scalar: nalgebra-sparse's sparse x dense product needs `Neg`
    let overlap = matrix * &query.vector;
    let required = query.matched_count();
    Ok(overlap
        .iter()
        .map(|&s| u32::try_from(s).unwrap_or(0))
        .pipe_if(mode == MatchMode::All, |scores| {
            scores.map(move |s| u32::from(s >= required))
        })
        .collect())
}

/// Descending by score. `sort_by` is stable, so ties keep input order.
pub fn rank(records: &[Record], scores: &[u32]) -> Vec<ScoredRecord> {
    let mut ranked = records
        .iter()
        .zip(scores)
        .enumerate()
        .map(|(position, (record, &score))| ScoredRecord {
            url: record.url.clone(),
            tags: record.tags.clone(),
            score,
            position,
        })
        .collect::<Vec<_>>();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}
