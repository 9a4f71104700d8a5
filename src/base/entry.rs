use core::{fmt, mem};

use super::SkipList;
use crate::node::{Node, NodePtr};

/// A shared reference to an entry of the [`SkipList`].
pub struct EntryRef<'a, K, V, C, R> {
  list: &'a SkipList<K, V, C, R>,
  ptr: NodePtr,
  node: &'a Node<K, V>,
}

impl<K, V, C, R> Clone for EntryRef<'_, K, V, C, R> {
  #[inline]
  fn clone(&self) -> Self {
    *self
  }
}

impl<K, V, C, R> Copy for EntryRef<'_, K, V, C, R> {}

impl<K, V, C, R> fmt::Debug for EntryRef<'_, K, V, C, R>
where
  K: fmt::Debug,
  V: fmt::Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("EntryRef")
      .field("key", self.key())
      .field("value", self.value())
      .field("level", &self.level())
      .finish()
  }
}

impl<'a, K, V, C, R> EntryRef<'a, K, V, C, R> {
  #[inline]
  pub(super) const fn new(list: &'a SkipList<K, V, C, R>, ptr: NodePtr, node: &'a Node<K, V>) -> Self {
    Self { list, ptr, node }
  }

  /// Returns the key of the entry.
  #[inline]
  pub const fn key(&self) -> &'a K {
    &self.node.key
  }

  /// Returns the value of the entry.
  #[inline]
  pub const fn value(&self) -> &'a V {
    &self.node.value
  }

  /// Returns the handle of the entry, which can be used to reach the entry again
  /// or to remove it.
  #[inline]
  pub const fn ptr(&self) -> NodePtr {
    self.ptr
  }

  /// Returns the highest level the entry participates in.
  #[inline]
  pub fn level(&self) -> usize {
    self.node.level()
  }

  /// Returns the next entry, `None` if this is the last one.
  #[inline]
  pub fn next(&self) -> Option<EntryRef<'a, K, V, C, R>> {
    let list = self.list;
    list.next_of(self.ptr).and_then(|ptr| list.entry(ptr))
  }

  /// Returns the previous entry, `None` if this is the first one.
  #[inline]
  pub fn prev(&self) -> Option<EntryRef<'a, K, V, C, R>> {
    let list = self.list;
    list.prev_of(self.ptr).and_then(|ptr| list.entry(ptr))
  }
}

/// An exclusive reference to an entry of the [`SkipList`].
///
/// The value can be read and written in place, and the entry can remove itself.
pub struct EntryMut<'a, K, V, C, R> {
  list: &'a mut SkipList<K, V, C, R>,
  ptr: NodePtr,
}

impl<K, V, C, R> fmt::Debug for EntryMut<'_, K, V, C, R>
where
  K: fmt::Debug,
  V: fmt::Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("EntryMut")
      .field("key", self.key())
      .field("value", self.value())
      .field("level", &self.level())
      .finish()
  }
}

impl<'a, K, V, C, R> EntryMut<'a, K, V, C, R> {
  /// `ptr` must point to a live node of `list`.
  #[inline]
  pub(super) fn new(list: &'a mut SkipList<K, V, C, R>, ptr: NodePtr) -> Self {
    Self { list, ptr }
  }

  #[inline]
  fn node(&self) -> &Node<K, V> {
    &self.list.arena[self.ptr]
  }

  /// Returns the key of the entry.
  #[inline]
  pub fn key(&self) -> &K {
    &self.node().key
  }

  /// Returns the value of the entry.
  #[inline]
  pub fn value(&self) -> &V {
    &self.node().value
  }

  /// Returns the value of the entry mutably.
  #[inline]
  pub fn value_mut(&mut self) -> &mut V {
    &mut self.list.arena[self.ptr].value
  }

  /// Converts the entry into a mutable reference to its value, bound to the list's borrow.
  #[inline]
  pub fn into_value_mut(self) -> &'a mut V {
    let ptr = self.ptr;
    let list = self.list;
    &mut list.arena[ptr].value
  }

  /// Replaces the value of the entry, returning the old one.
  #[inline]
  pub fn replace_value(&mut self, value: V) -> V {
    mem::replace(self.value_mut(), value)
  }

  /// Returns the handle of the entry.
  #[inline]
  pub const fn ptr(&self) -> NodePtr {
    self.ptr
  }

  /// Returns the highest level the entry participates in.
  #[inline]
  pub fn level(&self) -> usize {
    self.node().level()
  }

  /// Returns the next entry, `None` if this is the last one.
  #[inline]
  pub fn next(&self) -> Option<EntryRef<'_, K, V, C, R>> {
    self.reborrow().next()
  }

  /// Returns the previous entry, `None` if this is the first one.
  #[inline]
  pub fn prev(&self) -> Option<EntryRef<'_, K, V, C, R>> {
    self.reborrow().prev()
  }

  /// Reborrows the entry as a shared one.
  #[inline]
  pub fn reborrow(&self) -> EntryRef<'_, K, V, C, R> {
    EntryRef::new(self.list, self.ptr, &self.list.arena[self.ptr])
  }

  /// Converts the entry into a shared one.
  #[inline]
  pub fn into_ref(self) -> EntryRef<'a, K, V, C, R> {
    let list: &'a SkipList<K, V, C, R> = self.list;
    EntryRef::new(list, self.ptr, &list.arena[self.ptr])
  }

  /// Removes the entry from the list, unlinking it at every level, and returns its key and value.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skipindex::SkipList;
  ///
  /// let mut l = SkipList::new();
  /// l.add(1, 'a');
  /// l.add(2, 'b');
  ///
  /// let (k, v) = l.get_mut(&1).unwrap().remove();
  /// assert_eq!((k, v), (1, 'a'));
  /// assert_eq!(l.len(), 1);
  /// assert!(l.get(&1).is_none());
  /// ```
  #[inline]
  pub fn remove(self) -> (K, V) {
    self
      .list
      .unlink(self.ptr)
      .expect("entry must be alive while it is mutably borrowed")
  }
}
