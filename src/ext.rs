use std::vec::Vec;

use crate::{base::EntryRef, comparator::Comparator, SkipList};

/// Range based helpers, built on [`range`](SkipList::range) and [`remove`](SkipList::remove).
impl<K, V, C, R> SkipList<K, V, C, R>
where
  C: Comparator<K>,
{
  /// Collects the entries whose keys lie in `[from, to]`.
  #[inline]
  pub fn get_range(&self, from: &K, to: &K) -> Vec<EntryRef<'_, K, V, C, R>> {
    self.range(from, to).collect()
  }

  /// Collects every entry with the given key, in insertion order.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skipindex::SkipList;
  ///
  /// let mut l = SkipList::new();
  /// l.add(2, "x");
  /// l.add(1, "a");
  /// l.add(1, "b");
  ///
  /// let values: Vec<_> = l.get_all(&1).into_iter().map(|ent| *ent.value()).collect();
  /// assert_eq!(values, ["a", "b"]);
  /// ```
  #[inline]
  pub fn get_all(&self, key: &K) -> Vec<EntryRef<'_, K, V, C, R>> {
    self.get_range(key, key)
  }

  /// Returns the number of entries with the given key.
  #[inline]
  pub fn count(&self, key: &K) -> usize {
    self.range(key, key).count()
  }

  /// Returns the number of entries whose keys lie in `[from, to]`.
  #[inline]
  pub fn count_range(&self, from: &K, to: &K) -> usize {
    self.range(from, to).count()
  }

  /// Removes the entries whose keys lie in `[from, to]`, returning them in order.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skipindex::SkipList;
  ///
  /// let mut l: SkipList<u32, ()> = (0..10).map(|k| (k, ())).collect();
  ///
  /// let removed: Vec<_> = l.remove_range(&3, &6).into_iter().map(|(k, _)| k).collect();
  /// assert_eq!(removed, [3, 4, 5, 6]);
  /// assert_eq!(l.len(), 6);
  /// ```
  pub fn remove_range(&mut self, from: &K, to: &K) -> Vec<(K, V)> {
    let ptrs: Vec<_> = self.range(from, to).map(|ent| ent.ptr()).collect();
    ptrs.into_iter().filter_map(|ptr| self.remove(ptr)).collect()
  }

  /// Removes every entry with the given key, returning them in insertion order.
  #[inline]
  pub fn remove_all(&mut self, key: &K) -> Vec<(K, V)> {
    self.remove_range(key, key)
  }
}
