use std::fmt;

use nalgebra_sparse::CsrMatrix;
use serde::Serialize;

use super::scorer::ScoredRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreRow {
    pub url: String,
    /// 0/1 per vocabulary column.
    pub indicators: Vec<u32>,
    pub score: u32,
}

/// Term-presence matrix joined with the scores, rows already ranked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreTable {
    pub columns: Vec<String>,
    pub rows: Vec<ScoreRow>,
    /// Query tokens that matched no column.
    pub unmatched: Vec<String>,
}
impl ScoreTable {
    pub fn new(
        columns: &[String],
        matrix: &CsrMatrix<i32>,
        ranked: &[ScoredRecord],
        unmatched: Vec<String>,
    ) -> Self {
        let rows = ranked
            .iter()
            .map(|scored| {
                let mut indicators = vec![0; columns.len()];
                let row = matrix.row(scored.position);
                for (&col, &value) in row.col_indices().iter().zip(row.values()) {
                    indicators[col] = u32::from(value > 0);
                }
                ScoreRow {
                    url: scored.url.clone(),
                    indicators,
                    score: scored.score,
                }
            })
            .collect();
        Self {
            columns: columns.to_vec(),
            rows,
            unmatched,
        }
    }
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
    pub fn top(&self) -> Option<&ScoreRow> {
        self.rows.first()
    }
}

impl fmt::Display for ScoreTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let url_width = self
            .rows
            .iter()
            .map(|row| row.url.chars().count())
            .chain(std::iter::once("url".len()))
            .max()
            .unwrap_or(0);
        let score_width = self
            .rows
            .iter()
            .map(|row| row.score.to_string().len())
            .chain(std::iter::once("score".len()))
            .max()
            .unwrap_or(0);

        write!(f, "{:<url_width$}", "url")?;
        for column in &self.columns {
            write!(f, "  {column}")?;
        }
        writeln!(f, "  {:>score_width$}", "score")?;

        for row in &self.rows {
            write!(f, "{:<url_width$}", row.url)?;
            for (column, value) in self.columns.iter().zip(&row.indicators) {
                let width = column.chars().count();
                write!(f, "  {value:>width$}")?;
            }
            writeln!(f, "  {:>score_width$}", row.score)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::keywords::record::Record;
    use crate::keywords::scorer::{MatchMode, rank, score};
    use crate::keywords::vectorizer::{TagVectorizer, VectorizerConfig};

    fn table() -> ScoreTable {
        let records = vec![
            Record::new("https://a.example", ["forms", "views"]),
            Record::new("https://bb.example", ["caching", "views"]),
        ];
        let lines = records.iter().map(|r| r.corpus_line(", ")).collect::<Vec<_>>();
        let mut vectorizer = TagVectorizer::new(VectorizerConfig::default());
        let matrix = vectorizer.fit_transform(&lines);
        let query = vectorizer.encode_query("caching");
        let scores = score(&matrix, &query, MatchMode::Overlap).unwrap();
        let ranked = rank(&records, &scores);
        ScoreTable::new(vectorizer.vocabulary().tokens(), &matrix, &ranked, query.unmatched)
    }

    #[test]
    fn test_rows_follow_rank() {
        let table = table();
        assert_eq!(table.columns, vec!["forms", "views", "caching"]);
        assert_eq!(table.top().unwrap().url, "https://bb.example");
        assert_eq!(table.rows[0].indicators, vec![0, 1, 1]);
        assert_eq!(table.rows[1].indicators, vec![1, 1, 0]);
    }

    #[test]
    fn test_display_layout() {
        let rendered = table().to_string();
        let lines = rendered.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "url                 forms  views  caching  score");
        assert_eq!(lines[1], "https://bb.example      0      1        1      1");
        assert_eq!(lines[2], "https://a.example       1      1        0      0");
    }

    #[test]
    fn test_json_output() {
        let value = serde_json::to_value(table()).unwrap();
        assert_eq!(value["columns"], serde_json::json!(["forms", "views", "caching"]));
        assert_eq!(value["rows"][0]["url"], "https://bb.example");
        assert_eq!(value["rows"][0]["indicators"], serde_json::json!([0, 1, 1]));
        assert_eq!(value["rows"][0]["score"], 1);
        assert_eq!(value["unmatched"], serde_json::json!([]));
    }

    #[test]
    fn test_display_aligns_non_ascii() {
        let records = vec![
            Record::new("https://café.example", ["données"]),
            Record::new("https://b.example", ["données"]),
        ];
        let lines = records.iter().map(|r| r.corpus_line(", ")).collect::<Vec<_>>();
        let mut vectorizer = TagVectorizer::new(VectorizerConfig::default());
        let matrix = vectorizer.fit_transform(&lines);
        let query = vectorizer.encode_query("données");
        let scores = score(&matrix, &query, MatchMode::Overlap).unwrap();
        let ranked = rank(&records, &scores);
        let rendered =
            ScoreTable::new(vectorizer.vocabulary().tokens(), &matrix, &ranked, query.unmatched)
                .to_string();
        let widths = rendered
            .lines()
            .map(|line| line.chars().count())
            .collect::<Vec<_>>();
        assert_eq!(widths.len(), 3);
        assert!(widths.iter().all(|&w| w == widths[0]));
    }
}
