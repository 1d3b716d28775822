use serde::{Deserialize, Serialize};

use super::ReorderError;

/// Form field under which the client posts the item indices.
pub const ORDER_FIELD: &str = "movie";

pub const SAMPLE_MOVIES: [&str; 10] = [
    "The Shawshank Redemption",
    "Inception",
    "The Godfather",
    "Pulp Fiction",
    "Forrest Gump",
    "The Matrix",
    "Parasite",
    "Back to the Future",
    "The Dark Knight",
    "Avatar",
];

/// Ordered titles. Every successful reorder is a permutation, so the length never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieList {
    items: Vec<String>,
}
impl MovieList {
    pub fn new(items: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }
    pub fn sample() -> Self {
        Self::new(SAMPLE_MOVIES)
    }
    pub fn items(&self) -> &[String] {
        &self.items
    }
    pub fn len(&self) -> usize {
        self.items.len()
    }
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    /// Replaces the order with `items[indices[0]], items[indices[1]], ...`.
    /// The list is untouched unless `indices` is a permutation of `0..len`.
    pub fn reorder(&mut self, indices: &[usize]) -> Result<(), ReorderError> {
        let len = self.items.len();
        if indices.len() != len {
            return Err(ReorderError::LengthMismatch {
                expected: len,
                got: indices.len(),
            });
        }
        let mut seen = vec![false; len];
        for &index in indices {
            if index >= len {
                return Err(ReorderError::OutOfRange { index, len });
            }
            if std::mem::replace(&mut seen[index], true) {
                return Err(ReorderError::Duplicate(index));
            }
        }
        self.items = indices.iter().map(|&i| self.items[i].clone()).collect();
        Ok(())
    }
}
impl Default for MovieList {
    fn default() -> Self {
        Self::sample()
    }
}

/// Values of every `movie` field in submission order, parsed as indices.
pub fn parse_indices<K, V>(pairs: &[(K, V)]) -> Result<Vec<usize>, ReorderError>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    pairs
        .iter()
        .filter(|(key, _)| key.as_ref() == ORDER_FIELD)
        .map(|(_, value)| {
            let value = value.as_ref();
            value
                .trim()
                .parse::<usize>()
                .map_err(|_| ReorderError::InvalidIndex(value.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_reorder_three_items() {
        let mut list = MovieList::new(["item0", "item1", "item2"]);
        list.reorder(&[2, 0, 1]).unwrap();
        assert_eq!(list.items(), &["item2", "item0", "item1"]);
    }

    #[test]
    fn test_identity_reorder() {
        let mut list = MovieList::sample();
        list.reorder(&(0..10).collect::<Vec<_>>()).unwrap();
        assert_eq!(list, MovieList::sample());
    }

    #[test]
    fn test_rejects_non_permutations() {
        let mut list = MovieList::new(["a", "b", "c"]);
        assert!(matches!(
            list.reorder(&[0, 1]),
            Err(ReorderError::LengthMismatch { expected: 3, got: 2 })
        ));
        assert!(matches!(
            list.reorder(&[0, 1, 3]),
            Err(ReorderError::OutOfRange { index: 3, len: 3 })
        ));
        assert!(matches!(
            list.reorder(&[0, 0, 1]),
            Err(ReorderError::Duplicate(0))
        ));
        assert_eq!(list.items(), &["a", "b", "c"]);
    }

    #[test]
    fn test_parse_indices() {
        let pairs = vec![
            ("movie", "2"),
            ("csrf", "token"),
            ("movie", "0"),
            ("movie", "1"),
        ];
        assert_eq!(parse_indices(&pairs).unwrap(), vec![2, 0, 1]);
        let bad = vec![("movie", "two")];
        assert!(matches!(
            parse_indices(&bad),
            Err(ReorderError::InvalidIndex(v)) if v == "two"
        ));
        assert!(parse_indices::<&str, &str>(&[]).unwrap().is_empty());
    }
}
