use core::fmt;

use rand::{rngs::SmallRng, Rng};

use super::*;
use crate::{
  builder::{default_rng, Builder},
  error::Error,
};

impl<K, V> SkipList<K, V> {
  /// Creates a new skiplist ordering keys in ascending order.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skipindex::SkipList;
  ///
  /// let l = SkipList::<u64, String>::new();
  /// assert!(l.is_empty());
  /// assert_eq!(l.height(), 1);
  /// ```
  #[inline]
  pub fn new() -> Self {
    Self::with_comparator(Ascend)
  }
}

impl<K, V, C> SkipList<K, V, C> {
  /// Creates a new skiplist ordered by the given comparator.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skipindex::{Descend, SkipList};
  ///
  /// let mut l = SkipList::with_comparator(Descend);
  /// l.add(1, "a");
  /// l.add(2, "b");
  /// assert_eq!(*l.front().unwrap().key(), 2);
  /// ```
  #[inline]
  pub fn with_comparator(cmp: C) -> Self {
    let opts = Options::new();
    Self::construct(opts, cmp, default_rng(opts.seed()))
  }

  /// Creates a new skiplist with the given options and comparator.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skipindex::{Ascend, Options, SkipList};
  ///
  /// let l = SkipList::<u32, u32>::with_options(Options::new().with_max_level(8), Ascend).unwrap();
  /// assert_eq!(l.options().max_level(), 8);
  ///
  /// assert!(SkipList::<u32, u32>::with_options(Options::new().with_promote_ratio(1), Ascend).is_err());
  /// ```
  #[inline]
  pub fn with_options(opts: Options, cmp: C) -> Result<Self, Error> {
    Builder::with(opts, cmp).build()
  }
}

impl<K, V, C, R> SkipList<K, V, C, R> {
  /// Returns the number of entries in the skiplist.
  #[inline]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Returns `true` if the skiplist holds no entries.
  #[inline]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Returns the number of levels the sentinel currently spans.
  ///
  /// The height is `1` for an empty list and otherwise one above the level of the
  /// tallest node in the list.
  #[inline]
  pub fn height(&self) -> usize {
    self.head.len()
  }

  /// Returns the options of the skiplist.
  #[inline]
  pub const fn options(&self) -> &Options {
    &self.opts
  }

  /// Returns the comparator of the skiplist.
  #[inline]
  pub const fn comparator(&self) -> &C {
    &self.cmp
  }

  /// Removes every entry.
  ///
  /// Handles to the removed entries are invalidated.
  #[inline]
  pub fn clear(&mut self) {
    self.reset();
  }

  /// Returns the entry of the given handle, `None` if it was removed.
  #[inline]
  pub fn entry(&self, ptr: NodePtr) -> Option<EntryRef<'_, K, V, C, R>> {
    self.node(ptr).map(|node| EntryRef::new(self, ptr, node))
  }

  /// Returns the mutable entry of the given handle, `None` if it was removed.
  #[inline]
  pub fn entry_mut(&mut self, ptr: NodePtr) -> Option<EntryMut<'_, K, V, C, R>> {
    if self.node(ptr).is_none() {
      return None;
    }

    Some(EntryMut::new(self, ptr))
  }

  /// Removes the entry of the given handle, unlinking it at every level it occupies.
  ///
  /// Returns `None` if the entry was removed already.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skipindex::SkipList;
  ///
  /// let mut l = SkipList::new();
  /// let ptr = l.add(1, "a").ptr();
  /// assert_eq!(l.remove(ptr), Some((1, "a")));
  /// assert_eq!(l.remove(ptr), None);
  /// assert!(l.is_empty());
  /// ```
  #[inline]
  pub fn remove(&mut self, ptr: NodePtr) -> Option<(K, V)> {
    self.unlink(ptr)
  }

  /// Returns the first entry, `None` if the list is empty.
  #[inline]
  pub fn front(&self) -> Option<EntryRef<'_, K, V, C, R>> {
    self.next_of(NodePtr::HEAD).and_then(|ptr| self.entry(ptr))
  }

  /// Returns the last entry, `None` if the list is empty.
  #[inline]
  pub fn back(&self) -> Option<EntryRef<'_, K, V, C, R>> {
    self.prev_of(NodePtr::HEAD).and_then(|ptr| self.entry(ptr))
  }

  /// Returns the first entry mutably, `None` if the list is empty.
  #[inline]
  pub fn front_mut(&mut self) -> Option<EntryMut<'_, K, V, C, R>> {
    let ptr = self.next_of(NodePtr::HEAD)?;
    self.entry_mut(ptr)
  }

  /// Returns the last entry mutably, `None` if the list is empty.
  #[inline]
  pub fn back_mut(&mut self) -> Option<EntryMut<'_, K, V, C, R>> {
    let ptr = self.prev_of(NodePtr::HEAD)?;
    self.entry_mut(ptr)
  }

  /// Removes and returns the first entry.
  #[inline]
  pub fn pop_front(&mut self) -> Option<(K, V)> {
    let ptr = self.next_of(NodePtr::HEAD)?;
    self.unlink(ptr)
  }

  /// Removes and returns the last entry.
  #[inline]
  pub fn pop_back(&mut self) -> Option<(K, V)> {
    let ptr = self.prev_of(NodePtr::HEAD)?;
    self.unlink(ptr)
  }

  /// Returns an iterator over all the entries, in order.
  #[inline]
  pub fn iter(&self) -> Iter<'_, K, V, C, R> {
    Iter::new(self)
  }
}

impl<K, V, C, R> SkipList<K, V, C, R>
where
  C: Comparator<K>,
{
  /// Returns an entry with the given key.
  ///
  /// When several entries share the key, it is unspecified which one is returned,
  /// use [`get_first`](Self::get_first) or [`get_last`](Self::get_last) to pin it down.
  #[inline]
  pub fn get(&self, key: &K) -> Option<EntryRef<'_, K, V, C, R>> {
    self
      .search(key, true)
      .found
      .and_then(|ptr| self.entry(ptr))
  }

  /// Returns the first entry inserted with the given key.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skipindex::SkipList;
  ///
  /// let mut l = SkipList::new();
  /// l.add(1, "a");
  /// l.add(1, "b");
  /// assert_eq!(*l.get_first(&1).unwrap().value(), "a");
  /// assert_eq!(*l.get_last(&1).unwrap().value(), "b");
  /// ```
  #[inline]
  pub fn get_first(&self, key: &K) -> Option<EntryRef<'_, K, V, C, R>> {
    self
      .search(key, false)
      .found
      .and_then(|ptr| self.entry(ptr))
  }

  /// Returns the last entry inserted with the given key.
  #[inline]
  pub fn get_last(&self, key: &K) -> Option<EntryRef<'_, K, V, C, R>> {
    self
      .revsearch(key, false)
      .found
      .and_then(|ptr| self.entry(ptr))
  }

  /// Returns an entry with the given key mutably, see [`get`](Self::get).
  #[inline]
  pub fn get_mut(&mut self, key: &K) -> Option<EntryMut<'_, K, V, C, R>> {
    let ptr = self.search(key, true).found?;
    self.entry_mut(ptr)
  }

  /// Returns `true` if an entry with the given key exists.
  #[inline]
  pub fn contains_key(&self, key: &K) -> bool {
    self.search(key, true).found.is_some()
  }

  /// Returns an iterator over the entries whose keys lie in `[from, to]`, both ends included.
  ///
  /// The iterator is empty if `from` is ordered after `to`.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skipindex::SkipList;
  ///
  /// let l: SkipList<u32, ()> = [1, 3, 5, 7, 9].into_iter().map(|k| (k, ())).collect();
  ///
  /// let keys: Vec<_> = l.range(&4, &9).map(|ent| *ent.key()).collect();
  /// assert_eq!(keys, [5, 7, 9]);
  ///
  /// let keys: Vec<_> = l.range(&4, &9).rev().map(|ent| *ent.key()).collect();
  /// assert_eq!(keys, [9, 7, 5]);
  ///
  /// assert_eq!(l.range(&7, &3).count(), 0);
  /// ```
  #[inline]
  pub fn range(&self, from: &K, to: &K) -> Range<'_, K, V, C, R> {
    match self.bounds(from, to) {
      Some((lower, upper)) => Range::new(self, lower, upper),
      None => Range::empty(self),
    }
  }

  /// Visits the entries whose keys lie in `[from, to]` in order, until the visitor returns `false`.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skipindex::SkipList;
  ///
  /// let l: SkipList<u32, ()> = (0..10).map(|k| (k, ())).collect();
  ///
  /// let mut seen = Vec::new();
  /// l.range_each(&2, &8, |ent| {
  ///   seen.push(*ent.key());
  ///   seen.len() < 3
  /// });
  /// assert_eq!(seen, [2, 3, 4]);
  /// ```
  pub fn range_each<F>(&self, from: &K, to: &K, mut visit: F)
  where
    F: FnMut(EntryRef<'_, K, V, C, R>) -> bool,
  {
    for ent in self.range(from, to) {
      if !visit(ent) {
        return;
      }
    }
  }
}

impl<K, V, C, R> SkipList<K, V, C, R>
where
  C: Comparator<K>,
  R: Rng,
{
  /// Inserts a new entry, entries with an equal key are kept.
  ///
  /// The new entry is placed after every existing entry with an equal key, so duplicates
  /// keep their insertion order.
  ///
  /// ## Panics
  ///
  /// Panics if the list already holds `u32::MAX` node slots.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skipindex::SkipList;
  ///
  /// let mut l = SkipList::new();
  /// l.add("b", 1);
  /// l.add("a", 2);
  /// l.add("b", 3);
  ///
  /// let values: Vec<_> = l.iter().map(|ent| *ent.value()).collect();
  /// assert_eq!(values, [2, 1, 3]);
  /// ```
  pub fn add(&mut self, key: K, value: V) -> EntryMut<'_, K, V, C, R> {
    let path = self.revsearch(&key, false).path;
    let ptr = self.insert(key, value, &path);
    EntryMut::new(self, ptr)
  }

  /// Updates the value of an entry with an equal key, or inserts a new entry if none exists.
  ///
  /// The updated entry is not relinked. When several entries share the key, it is
  /// unspecified which one is updated.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skipindex::SkipList;
  ///
  /// let mut l = SkipList::new();
  /// let ptr = l.set(1, "a").ptr();
  /// assert_eq!(l.set(1, "b").ptr(), ptr);
  /// assert_eq!(l.len(), 1);
  /// assert_eq!(*l.get(&1).unwrap().value(), "b");
  /// ```
  pub fn set(&mut self, key: K, value: V) -> EntryMut<'_, K, V, C, R> {
    let FindResult { found, path } = self.revsearch(&key, true);
    let ptr = match found {
      Some(ptr) => {
        self.arena[ptr].value = value;
        ptr
      }
      None => self.insert(key, value, &path),
    };
    EntryMut::new(self, ptr)
  }
}

impl<K, V, C> Default for SkipList<K, V, C>
where
  C: Default,
{
  #[inline]
  fn default() -> Self {
    Self::with_comparator(C::default())
  }
}

impl<K, V, C, R> Extend<(K, V)> for SkipList<K, V, C, R>
where
  C: Comparator<K>,
  R: Rng,
{
  fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
    for (k, v) in iter {
      self.add(k, v);
    }
  }
}

impl<K, V, C> FromIterator<(K, V)> for SkipList<K, V, C, SmallRng>
where
  C: Comparator<K> + Default,
{
  fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
    let mut l = Self::default();
    l.extend(iter);
    l
  }
}

impl<K, V, C, R> fmt::Debug for SkipList<K, V, C, R>
where
  K: fmt::Debug,
  V: fmt::Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_map()
      .entries(self.iter().map(|ent| (ent.key(), ent.value())))
      .finish()
  }
}
