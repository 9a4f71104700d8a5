use core::ops::{Index, IndexMut};
use std::vec::Vec;

use rand::{rngs::SmallRng, Rng};

use crate::{
  arena::Arena,
  comparator::{Ascend, Comparator},
  node::{Link, Node, NodePtr},
  options::Options,
  random_level, MAX_LEVEL,
};

mod api;

mod entry;
pub use entry::{EntryMut, EntryRef};

mod iterator;
pub use iterator::{Iter, Range};


/// One node per level, the splice points found by a search.
///
/// A forward search records, at each level, the first node whose key is not less than
/// the target. A backward search records the last node whose key is not greater than
/// the target, which is exactly the predecessor a new node is spliced after.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Path {
  nodes: [NodePtr; MAX_LEVEL + 1],
}

impl Path {
  #[inline]
  const fn new() -> Self {
    Self {
      nodes: [NodePtr::HEAD; MAX_LEVEL + 1],
    }
  }

  /// Points every level in `0..=level` to `ptr`.
  #[inline]
  fn fill(&mut self, level: usize, ptr: NodePtr) {
    self.nodes[..=level].fill(ptr);
  }
}

impl Index<usize> for Path {
  type Output = NodePtr;

  #[inline]
  fn index(&self, level: usize) -> &Self::Output {
    &self.nodes[level]
  }
}

impl IndexMut<usize> for Path {
  #[inline]
  fn index_mut(&mut self, level: usize) -> &mut Self::Output {
    &mut self.nodes[level]
  }
}

pub(crate) struct FindResult {
  /// The matched node, if any.
  pub(crate) found: Option<NodePtr>,
  pub(crate) path: Path,
}

/// An ordered, multi-level linked index which keeps duplicate keys.
///
/// Every node is linked, at each level it participates in, to its neighbours in both
/// directions. The sentinel node closes each level into a ring, so walking forward
/// from the sentinel visits the entries in ascending order and walking backward visits
/// them in descending order. Entries with equal keys keep their insertion order.
///
/// The skiplist has no internal synchronization: share it between threads behind a lock.
pub struct SkipList<K, V, C = Ascend, R = SmallRng> {
  arena: Arena<K, V>,
  /// The links of the sentinel, its length is the height of the list.
  head: Vec<Link>,
  len: usize,
  opts: Options,
  rng: R,
  cmp: C,
}

impl<K, V, C, R> SkipList<K, V, C, R> {
  #[inline]
  pub(crate) fn construct(opts: Options, cmp: C, rng: R) -> Self {
    Self {
      arena: Arena::with_capacity(opts.capacity()),
      head: std::vec![Link::EMPTY],
      len: 0,
      opts,
      rng,
      cmp,
    }
  }

  #[inline]
  fn link(&self, ptr: NodePtr, level: usize) -> &Link {
    if ptr.is_head() {
      &self.head[level]
    } else {
      &self.arena[ptr].tower[level]
    }
  }

  #[inline]
  fn link_mut(&mut self, ptr: NodePtr, level: usize) -> &mut Link {
    if ptr.is_head() {
      &mut self.head[level]
    } else {
      &mut self.arena[ptr].tower[level]
    }
  }

  #[inline]
  fn key_of(&self, ptr: NodePtr) -> &K {
    &self.arena[ptr].key
  }

  /// Returns the level 0 successor of `ptr`, `None` at the end of the list.
  #[inline]
  pub(crate) fn next_of(&self, ptr: NodePtr) -> Option<NodePtr> {
    let next = self.link(ptr, 0).next;
    (!next.is_head()).then_some(next)
  }

  /// Returns the level 0 predecessor of `ptr`, `None` at the start of the list.
  #[inline]
  pub(crate) fn prev_of(&self, ptr: NodePtr) -> Option<NodePtr> {
    let prev = self.link(ptr, 0).prev;
    (!prev.is_head()).then_some(prev)
  }

  #[inline]
  pub(crate) fn node(&self, ptr: NodePtr) -> Option<&Node<K, V>> {
    self.arena.get(ptr)
  }

  /// Returns the first node of level `level`, `None` if the level is empty or does not exist.
  #[inline]
  pub(crate) fn first_at(&self, level: usize) -> Option<NodePtr> {
    let first = self.head.get(level)?.next;
    (!first.is_head()).then_some(first)
  }

  /// Returns the successor of `ptr` at `level`, `None` when the ring closes.
  #[inline]
  pub(crate) fn next_at(&self, ptr: NodePtr, level: usize) -> Option<NodePtr> {
    let next = self.link(ptr, level).next;
    (!next.is_head()).then_some(next)
  }

  /// Returns the raw links of `ptr` (the sentinel included) at `level`.
  #[inline]
  pub(crate) fn links_at(&self, ptr: NodePtr, level: usize) -> Option<Link> {
    if ptr.is_head() {
      self.head.get(level).copied()
    } else {
      self.arena.get(ptr)?.tower.get(level).copied()
    }
  }

  /// Unlinks the node at every level it participates in and hands back its entry.
  ///
  /// Returns `None` if the node was removed already.
  pub(crate) fn unlink(&mut self, ptr: NodePtr) -> Option<(K, V)> {
    let node = self.arena.dealloc(ptr)?;
    for (level, link) in node.tower.iter().enumerate() {
      self.link_mut(link.next, level).prev = link.prev;
      self.link_mut(link.prev, level).next = link.next;
    }
    self.len -= 1;
    self.shrink();

    Some((node.key, node.value))
  }

  /// Drops the empty levels on top of the sentinel, the base level always stays.
  ///
  /// A level is never more populated than the one below it, so only the top of the
  /// stack needs to be looked at.
  fn shrink(&mut self) {
    #[cfg(feature = "tracing")]
    let height = self.head.len();

    while self.head.len() > 1 && matches!(self.head.last(), Some(link) if link.next.is_head()) {
      self.head.pop();
    }

    #[cfg(feature = "tracing")]
    if self.head.len() != height {
      tracing::trace!(from = height, to = self.head.len(), "skiplist height shrunk");
    }
  }

  /// Drops every node and resets the sentinel to a single empty level.
  pub(crate) fn reset(&mut self) {
    self.arena.clear();
    self.head.clear();
    self.head.push(Link::EMPTY);
    self.len = 0;
  }
}

impl<K, V, C, R> SkipList<K, V, C, R>
where
  C: Comparator<K>,
{
  /// Descends from the top level to level 0 walking forward.
  ///
  /// With `fast` set, an equal key at any level is returned right away, which may be any
  /// of the nodes sharing the key. Otherwise equality is only accepted at level 0, so the
  /// match is the leftmost node with the key.
  pub(crate) fn search(&self, key: &K, fast: bool) -> FindResult {
    let mut level = self.head.len() - 1;
    let mut path = Path::new();
    let mut curr = self.head[level].next;

    loop {
      if !curr.is_head() {
        let curr_key = self.key_of(curr);
        if (fast || level == 0) && self.cmp.equal(key, curr_key) {
          path.fill(level, curr);
          return FindResult {
            found: Some(curr),
            path,
          };
        }

        // curr.key < key, keep moving right.
        if self.cmp.less(curr_key, key) {
          curr = self.link(curr, level).next;
          continue;
        }
      }

      path[level] = curr;
      if level == 0 {
        break;
      }

      // step back to the last node before key and go one level down.
      curr = self.link(curr, level).prev;
      level -= 1;
      curr = self.link(curr, level).next;
    }

    FindResult { found: None, path }
  }

  /// The mirror of [`search`](Self::search): descends walking backward from the sentinel,
  /// a non fast match is the rightmost node with the key.
  pub(crate) fn revsearch(&self, key: &K, fast: bool) -> FindResult {
    let mut level = self.head.len() - 1;
    let mut path = Path::new();
    let mut curr = self.head[level].prev;

    loop {
      if !curr.is_head() {
        let curr_key = self.key_of(curr);
        if (fast || level == 0) && self.cmp.equal(key, curr_key) {
          path.fill(level, curr);
          return FindResult {
            found: Some(curr),
            path,
          };
        }

        // key < curr.key, keep moving left.
        if self.cmp.less(key, curr_key) {
          curr = self.link(curr, level).prev;
          continue;
        }
      }

      path[level] = curr;
      if level == 0 {
        break;
      }

      curr = self.link(curr, level).next;
      level -= 1;
      curr = self.link(curr, level).prev;
    }

    FindResult { found: None, path }
  }

  /// Locates the inclusive boundaries of `[from, to]`: the leftmost node not less than
  /// `from` and the rightmost node not greater than `to`.
  ///
  /// Returns `None` if no key lies in the range, which covers `from > to` as well.
  pub(crate) fn bounds(&self, from: &K, to: &K) -> Option<(NodePtr, NodePtr)> {
    let lower = self.search(from, false);
    let lower = lower.found.unwrap_or(lower.path[0]);
    if lower.is_head() {
      return None;
    }

    let upper = self.revsearch(to, false);
    let upper = upper.found.unwrap_or(upper.path[0]);
    if upper.is_head() {
      return None;
    }

    if !self.cmp.less_or_equal(self.key_of(lower), self.key_of(upper)) {
      return None;
    }

    Some((lower, upper))
  }
}

impl<K, V, C, R> SkipList<K, V, C, R>
where
  R: Rng,
{
  /// Splices a new node after `path[level]` at every level it draws.
  ///
  /// `path` must come from [`revsearch`](Self::revsearch). Levels above the current
  /// height get the new node as their sole occupant.
  pub(crate) fn insert(&mut self, key: K, value: V, path: &Path) -> NodePtr {
    let level = random_level(
      &mut self.rng,
      self.opts.promote_ratio(),
      self.opts.max_level(),
    );
    let height = self.head.len();

    let mut tower = Vec::with_capacity(level + 1);
    for lv in 0..=level {
      if lv < height {
        let prev = path[lv];
        tower.push(Link::new(self.link(prev, lv).next, prev));
      } else {
        tower.push(Link::EMPTY);
      }
    }

    let ptr = self.arena.alloc(Node::new(key, value, tower));
    for lv in 0..=level {
      if lv < height {
        let Link { next, prev } = self.arena[ptr].tower[lv];
        self.link_mut(prev, lv).next = ptr;
        self.link_mut(next, lv).prev = ptr;
      } else {
        self.head.push(Link::new(ptr, ptr));
      }
    }
    self.len += 1;

    #[cfg(feature = "tracing")]
    if self.head.len() != height {
      tracing::trace!(from = height, to = self.head.len(), "skiplist height grew");
    }

    ptr
  }
}
