use core::{
  ops::{Index, IndexMut},
  sync::atomic::{AtomicU32, Ordering},
};
use std::vec::Vec;

use crate::node::{Node, NodePtr};

#[derive(Debug)]
struct Slot<K, V> {
  generation: u32,
  node: Option<Node<K, V>>,
}

impl<K, V> Slot<K, V> {
  #[inline]
  fn matches(&self, tag: u32, ptr: NodePtr) -> bool {
    ptr.tag == tag && self.generation == ptr.generation
  }

  /// Empties the slot and bumps its generation.
  ///
  /// Returns `false` once the generation is exhausted, the slot must then never be reused.
  #[inline]
  fn vacate(&mut self) -> bool {
    match self.generation.checked_add(1) {
      Some(generation) => {
        self.generation = generation;
        true
      }
      None => false,
    }
  }

  #[inline]
  const fn is_retired(&self) -> bool {
    self.node.is_none() && self.generation == u32::MAX
  }
}

/// Tags handed out to arenas, `0` belongs to the sentinel.
static NEXT_TAG: AtomicU32 = AtomicU32::new(1);

#[inline]
fn next_tag() -> u32 {
  loop {
    let tag = NEXT_TAG.fetch_add(1, Ordering::Relaxed);
    if tag != 0 {
      return tag;
    }
  }
}

/// Owns every node of a skiplist.
///
/// Removed nodes leave a vacant slot behind, the slot goes to the freelist and
/// its generation is bumped so that outstanding [`NodePtr`]s to the removed node
/// can no longer be resolved. Every arena carries its own tag, so pointers issued
/// by another arena never resolve either.
#[derive(Debug)]
pub(crate) struct Arena<K, V> {
  tag: u32,
  slots: Vec<Slot<K, V>>,
  freelist: Vec<u32>,
}

impl<K, V> Arena<K, V> {
  #[inline]
  pub(crate) fn with_capacity(capacity: usize) -> Self {
    Self {
      tag: next_tag(),
      slots: Vec::with_capacity(capacity),
      freelist: Vec::new(),
    }
  }

  /// Returns the number of slots, occupied or not.
  #[cfg(test)]
  #[inline]
  pub(crate) fn capacity(&self) -> usize {
    self.slots.len()
  }

  pub(crate) fn alloc(&mut self, node: Node<K, V>) -> NodePtr {
    match self.freelist.pop() {
      Some(offset) => {
        let slot = &mut self.slots[offset as usize];
        debug_assert!(slot.node.is_none(), "freelist slot is still occupied");
        slot.node = Some(node);
        NodePtr::new(self.tag, offset, slot.generation)
      }
      None => {
        let offset = self.slots.len();
        // the last offset is reserved by the sentinel
        assert!(offset < u32::MAX as usize, "skiplist node arena is full");
        self.slots.push(Slot {
          generation: 0,
          node: Some(node),
        });
        NodePtr::new(self.tag, offset as u32, 0)
      }
    }
  }

  /// Takes the node out of the arena, returns `None` if the pointer is stale or foreign.
  pub(crate) fn dealloc(&mut self, ptr: NodePtr) -> Option<Node<K, V>> {
    let tag = self.tag;
    let slot = self.slots.get_mut(ptr.offset as usize)?;
    if !slot.matches(tag, ptr) {
      return None;
    }

    let node = slot.node.take()?;
    if slot.vacate() {
      self.freelist.push(ptr.offset);
    }
    Some(node)
  }

  #[inline]
  pub(crate) fn get(&self, ptr: NodePtr) -> Option<&Node<K, V>> {
    self
      .slots
      .get(ptr.offset as usize)
      .filter(|slot| slot.matches(self.tag, ptr))
      .and_then(|slot| slot.node.as_ref())
  }

  #[inline]
  pub(crate) fn get_mut(&mut self, ptr: NodePtr) -> Option<&mut Node<K, V>> {
    let tag = self.tag;
    self
      .slots
      .get_mut(ptr.offset as usize)
      .filter(|slot| slot.matches(tag, ptr))
      .and_then(|slot| slot.node.as_mut())
  }

  /// Drops every node. Generations survive so that old pointers stay unresolvable.
  pub(crate) fn clear(&mut self) {
    self.freelist.clear();
    for (offset, slot) in self.slots.iter_mut().enumerate() {
      let reusable = match slot.node.take() {
        Some(_) => slot.vacate(),
        None => !slot.is_retired(),
      };
      if reusable {
        self.freelist.push(offset as u32);
      }
    }
    // hand out low offsets first
    self.freelist.reverse();
  }
}

impl<K, V> Index<NodePtr> for Arena<K, V> {
  type Output = Node<K, V>;

  #[inline]
  fn index(&self, ptr: NodePtr) -> &Self::Output {
    self.get(ptr).expect("dangling node pointer")
  }
}

impl<K, V> IndexMut<NodePtr> for Arena<K, V> {
  #[inline]
  fn index_mut(&mut self, ptr: NodePtr) -> &mut Self::Output {
    self.get_mut(ptr).expect("dangling node pointer")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn node(key: u32) -> Node<u32, ()> {
    Node::new(key, (), std::vec![crate::node::Link::EMPTY])
  }

  #[test]
  fn test_stale_pointer() {
    let mut arena = Arena::with_capacity(4);
    let a = arena.alloc(node(1));
    assert_eq!(arena[a].key, 1);
    assert_eq!(arena.dealloc(a).map(|n| n.key), Some(1));
    assert!(arena.get(a).is_none());
    assert!(arena.dealloc(a).is_none());

    // the slot is reused, but the old pointer still does not resolve
    let b = arena.alloc(node(2));
    assert_eq!(a.offset, b.offset);
    assert_ne!(a, b);
    assert!(arena.get(a).is_none());
    assert_eq!(arena[b].key, 2);
    assert_eq!(arena.capacity(), 1);
  }

  #[test]
  fn test_clear() {
    let mut arena = Arena::with_capacity(0);
    let a = arena.alloc(node(1));
    let b = arena.alloc(node(2));
    arena.clear();
    assert!(arena.get(a).is_none());
    assert!(arena.get(b).is_none());

    let c = arena.alloc(node(3));
    assert_eq!(c.offset, 0);
    assert_eq!(arena.capacity(), 2);
  }

  #[test]
  fn test_foreign_pointer() {
    let mut a = Arena::with_capacity(1);
    let mut b = Arena::with_capacity(1);
    let pa = a.alloc(node(1));
    let pb = b.alloc(node(2));
    assert_eq!((pa.offset, pa.generation), (pb.offset, pb.generation));
    assert_ne!(pa, pb);

    assert!(b.get(pa).is_none());
    assert!(b.get_mut(pa).is_none());
    assert!(b.dealloc(pa).is_none());
    assert_eq!(b[pb].key, 2);
    assert_eq!(a[pa].key, 1);
  }

  #[test]
  fn test_exhausted_slot_is_retired() {
    let mut arena = Arena::with_capacity(2);
    let a = arena.alloc(node(1));
    arena.dealloc(a).unwrap();
    arena.slots[0].generation = u32::MAX;

    let b = arena.alloc(node(2));
    assert_eq!((b.offset, b.generation), (0, u32::MAX));
    arena.dealloc(b).unwrap();
    assert!(arena.get(b).is_none());

    // the slot can not bump its generation any more, so it is never handed out again
    let c = arena.alloc(node(3));
    assert_eq!(c.offset, 1);
    assert!(arena.get(b).is_none());
    assert_eq!(arena[c].key, 3);

    arena.clear();
    let d = arena.alloc(node(4));
    assert_eq!(d.offset, 1);
    let e = arena.alloc(node(5));
    assert_eq!(e.offset, 2);
    assert!(arena.get(b).is_none());
  }
}
