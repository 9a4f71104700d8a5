use core::iter::FusedIterator;

use super::{EntryRef, SkipList};
use crate::node::NodePtr;

/// An iterator over the entries of the [`SkipList`] whose keys lie in an inclusive range.
///
/// Both ends of the range are located once, when the iterator is created, then the
/// iterator walks the base level between them from either end.
pub struct Range<'a, K, V, C, R> {
  list: &'a SkipList<K, V, C, R>,
  /// The next entry yielded from the front, `None` once the range is exhausted.
  front: Option<NodePtr>,
  back: NodePtr,
}

impl<K, V, C, R> Clone for Range<'_, K, V, C, R> {
  #[inline]
  fn clone(&self) -> Self {
    Self {
      list: self.list,
      front: self.front,
      back: self.back,
    }
  }
}

impl<'a, K, V, C, R> Range<'a, K, V, C, R> {
  #[inline]
  pub(super) const fn new(list: &'a SkipList<K, V, C, R>, lower: NodePtr, upper: NodePtr) -> Self {
    Self {
      list,
      front: Some(lower),
      back: upper,
    }
  }

  #[inline]
  pub(super) const fn empty(list: &'a SkipList<K, V, C, R>) -> Self {
    Self {
      list,
      front: None,
      back: NodePtr::HEAD,
    }
  }
}

impl<'a, K, V, C, R> Iterator for Range<'a, K, V, C, R> {
  type Item = EntryRef<'a, K, V, C, R>;

  fn next(&mut self) -> Option<Self::Item> {
    let curr = self.front?;
    self.front = if curr == self.back {
      None
    } else {
      self.list.next_of(curr)
    };
    self.list.entry(curr)
  }
}

impl<K, V, C, R> DoubleEndedIterator for Range<'_, K, V, C, R> {
  fn next_back(&mut self) -> Option<Self::Item> {
    let front = self.front?;
    let curr = self.back;
    if curr == front {
      self.front = None;
    } else {
      match self.list.prev_of(curr) {
        Some(prev) => self.back = prev,
        None => self.front = None,
      }
    }
    self.list.entry(curr)
  }
}

impl<K, V, C, R> FusedIterator for Range<'_, K, V, C, R> {}

/// An iterator over all the entries of the [`SkipList`], in order.
pub struct Iter<'a, K, V, C, R> {
  range: Range<'a, K, V, C, R>,
  remaining: usize,
}

impl<K, V, C, R> Clone for Iter<'_, K, V, C, R> {
  #[inline]
  fn clone(&self) -> Self {
    Self {
      range: self.range.clone(),
      remaining: self.remaining,
    }
  }
}

impl<'a, K, V, C, R> Iter<'a, K, V, C, R> {
  pub(super) fn new(list: &'a SkipList<K, V, C, R>) -> Self {
    let range = match (list.next_of(NodePtr::HEAD), list.prev_of(NodePtr::HEAD)) {
      (Some(first), Some(last)) => Range::new(list, first, last),
      _ => Range::empty(list),
    };

    Self {
      range,
      remaining: list.len(),
    }
  }
}

impl<'a, K, V, C, R> Iterator for Iter<'a, K, V, C, R> {
  type Item = EntryRef<'a, K, V, C, R>;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    let ent = self.range.next()?;
    self.remaining -= 1;
    Some(ent)
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<K, V, C, R> DoubleEndedIterator for Iter<'_, K, V, C, R> {
  #[inline]
  fn next_back(&mut self) -> Option<Self::Item> {
    let ent = self.range.next_back()?;
    self.remaining -= 1;
    Some(ent)
  }
}

impl<K, V, C, R> ExactSizeIterator for Iter<'_, K, V, C, R> {}

impl<K, V, C, R> FusedIterator for Iter<'_, K, V, C, R> {}

impl<'a, K, V, C, R> IntoIterator for &'a SkipList<K, V, C, R> {
  type Item = EntryRef<'a, K, V, C, R>;
  type IntoIter = Iter<'a, K, V, C, R>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
