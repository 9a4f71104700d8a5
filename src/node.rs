use std::vec::Vec;

/// A handle to a node of a [`SkipList`](crate::SkipList).
///
/// The handle stays valid until the node is removed. Handles of removed nodes are
/// never resolved again, even after the slot of the node is reused by a later insertion,
/// and a handle is only ever resolved by the list which issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodePtr {
  /// Identifies the arena the handle was issued by, `0` is left to the sentinel.
  pub(crate) tag: u32,
  pub(crate) offset: u32,
  pub(crate) generation: u32,
}

impl NodePtr {
  /// The sentinel node, it anchors every level of the list.
  pub(crate) const HEAD: Self = Self {
    tag: 0,
    offset: u32::MAX,
    generation: 0,
  };

  #[inline]
  pub(crate) const fn new(tag: u32, offset: u32, generation: u32) -> Self {
    Self {
      tag,
      offset,
      generation,
    }
  }

  #[inline]
  pub(crate) const fn is_head(&self) -> bool {
    self.offset == u32::MAX
  }
}

/// The pair of links a node holds at one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Link {
  pub(crate) next: NodePtr,
  pub(crate) prev: NodePtr,
}

impl Link {
  /// The link of an empty level, the sentinel points to itself.
  pub(crate) const EMPTY: Self = Self::new(NodePtr::HEAD, NodePtr::HEAD);

  #[inline]
  pub(crate) const fn new(next: NodePtr, prev: NodePtr) -> Self {
    Self { next, prev }
  }
}

#[derive(Debug)]
pub(crate) struct Node<K, V> {
  pub(crate) key: K,
  pub(crate) value: V,
  /// `tower[i]` holds the neighbours at level `i`, a node drawn at level `L` has `L + 1` links.
  pub(crate) tower: Vec<Link>,
}

impl<K, V> Node<K, V> {
  #[inline]
  pub(crate) fn new(key: K, value: V, tower: Vec<Link>) -> Self {
    Self { key, value, tower }
  }

  /// The highest level the node participates in.
  #[inline]
  pub(crate) fn level(&self) -> usize {
    self.tower.len() - 1
  }
}
