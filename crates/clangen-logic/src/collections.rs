//! Small collection helpers: map merging and lazy chunking.

use std::collections::HashMap;
use std::hash::Hash;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// `add_range` received no source mapping.
    #[error("source collection is missing")]
    MissingSource,
    /// `chunk` was asked for chunks of size zero.
    #[error("chunk size must be at least 1")]
    ZeroChunkSize,
}

/// Merge `source` into `target`. On key collisions the source value wins.
pub fn add_range<K, V, I>(target: &mut HashMap<K, V>, source: Option<I>) -> Result<(), CollectionError>
where
    K: Eq + Hash,
    I: IntoIterator<Item = (K, V)>,
{
    let source = source.ok_or(CollectionError::MissingSource)?;
    for (key, value) in source {
        target.insert(key, value);
    }
    Ok(())
}

/// Lazy iterator over consecutive chunks of at most `size` items.
///
/// Created by [`chunk`]. Once exhausted it stays exhausted.
#[derive(Debug)]
pub struct Chunks<I: Iterator> {
    inner: std::iter::Fuse<I>,
    size: usize,
}

impl<I: Iterator> Iterator for Chunks<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let batch: Vec<_> = self.inner.by_ref().take(self.size).collect();
        if batch.is_empty() {
            None
        } else {
            Some(batch)
        }
    }
}

/// Break `source` into chunks of at most `size` items, preserving order.
pub fn chunk<I>(source: I, size: usize) -> Result<Chunks<I::IntoIter>, CollectionError>
where
    I: IntoIterator,
{
    if size == 0 {
        return Err(CollectionError::ZeroChunkSize);
    }
    Ok(Chunks {
        inner: source.into_iter().fuse(),
        size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_range_overwrites_collisions() {
        let mut target = HashMap::from([("a", 1), ("b", 2)]);
        let source = HashMap::from([("b", 20), ("c", 30)]);
        add_range(&mut target, Some(source)).unwrap();

        assert_eq!(target.len(), 3);
        assert_eq!(target["a"], 1);
        assert_eq!(target["b"], 20);
        assert_eq!(target["c"], 30);
    }

    #[test]
    fn test_add_range_missing_source() {
        let mut target: HashMap<&str, i32> = HashMap::new();
        let result = add_range(&mut target, None::<HashMap<&str, i32>>);
        assert_eq!(result, Err(CollectionError::MissingSource));
        assert!(target.is_empty());
    }

    #[test]
    fn test_add_range_empty_source() {
        let mut target = HashMap::from([(1, "x")]);
        add_range(&mut target, Some(Vec::new())).unwrap();
        assert_eq!(target.len(), 1);
    }

    #[test]
    fn test_chunk_uneven() {
        let chunks: Vec<Vec<i32>> = chunk(vec![1, 2, 3, 4, 5], 2).unwrap().collect();
        assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
    }

    #[test]
    fn test_chunk_larger_than_input() {
        let chunks: Vec<Vec<i32>> = chunk(vec![1, 2], 10).unwrap().collect();
        assert_eq!(chunks, vec![vec![1, 2]]);
    }

    #[test]
    fn test_chunk_empty_input() {
        let mut chunks = chunk(Vec::<i32>::new(), 3).unwrap();
        assert!(chunks.next().is_none());
    }

    #[test]
    fn test_chunk_zero_size() {
        assert_eq!(chunk(vec![1], 0).err(), Some(CollectionError::ZeroChunkSize));
    }

    #[test]
    fn test_chunk_exhausted_stays_exhausted() {
        let mut chunks = chunk(1..=3, 3).unwrap();
        assert_eq!(chunks.next(), Some(vec![1, 2, 3]));
        assert_eq!(chunks.next(), None);
        assert_eq!(chunks.next(), None);
    }

    #[test]
    fn test_chunk_is_lazy() {
        // An infinite source only works if chunks are pulled on demand.
        let first: Vec<Vec<u32>> = chunk(0u32.., 4).unwrap().take(2).collect();
        assert_eq!(first, vec![vec![0, 1, 2, 3], vec![4, 5, 6, 7]]);
    }
}
