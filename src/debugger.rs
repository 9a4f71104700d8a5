use core::fmt;
use std::vec::Vec;

use crate::{comparator::Comparator, error::Error, node::NodePtr, SkipList};

/// Exposes the per level layout of a [`SkipList`] for diagnostics.
///
/// ## Example
///
/// ```rust
/// use skipindex::{Builder, SkipList};
///
/// let mut l: SkipList<u32, ()> = Builder::new().with_seed(Some(3)).build().unwrap();
/// l.extend((0..100).map(|k| (k, ())));
///
/// let dbg = l.debugger();
/// assert_eq!(dbg.levels(), l.height());
/// assert_eq!(dbg.keys().len(), 100);
/// assert!(dbg.verify().is_ok());
/// ```
pub struct Debugger<'a, K, V, C, R> {
  list: &'a SkipList<K, V, C, R>,
}

impl<K, V, C, R> SkipList<K, V, C, R> {
  /// Returns a [`Debugger`] for the skiplist.
  #[inline]
  pub fn debugger(&self) -> Debugger<'_, K, V, C, R> {
    Debugger::new(self)
  }
}

impl<'a, K, V, C, R> Debugger<'a, K, V, C, R> {
  /// Creates a debugger for the given skiplist.
  #[inline]
  pub const fn new(list: &'a SkipList<K, V, C, R>) -> Self {
    Self { list }
  }

  /// Returns the number of levels the skiplist currently spans.
  #[inline]
  pub fn levels(&self) -> usize {
    self.list.height()
  }

  /// Returns the keys of the base level, in order.
  #[inline]
  pub fn keys(&self) -> Vec<&'a K> {
    self.level_keys(0)
  }

  /// Returns the keys linked at `level`, in order. Empty if the level does not exist.
  pub fn level_keys(&self, level: usize) -> Vec<&'a K> {
    let list = self.list;
    let mut keys = Vec::new();
    let mut curr = list.first_at(level);
    while let Some(ptr) = curr {
      if let Some(node) = list.node(ptr) {
        keys.push(&node.key);
      }
      curr = list.next_at(ptr, level);
    }
    keys
  }
}

impl<K, V, C, R> Debugger<'_, K, V, C, R>
where
  C: Comparator<K>,
{
  /// Walks every level and checks the structure of the skiplist:
  ///
  /// - at every level, the successor of a node points back to it;
  /// - the base level is in order and holds exactly `len` nodes;
  /// - no level is more populated than the one below it;
  /// - the top level is not empty unless it is the base level.
  pub fn verify(&self) -> Result<(), Error> {
    let list = self.list;
    let mut below = usize::MAX;

    for level in 0..list.height() {
      let mut count = 0;
      let mut curr = NodePtr::HEAD;
      loop {
        let link = list
          .links_at(curr, level)
          .ok_or(Error::Corrupted {
            level,
            reason: "linked node does not span the level",
          })?;
        let next = link.next;
        let back = list.links_at(next, level).map(|link| link.prev);
        if back != Some(curr) {
          return Err(Error::Corrupted {
            level,
            reason: "successor does not link back",
          });
        }

        if next.is_head() {
          break;
        }

        if level == 0 && !curr.is_head() {
          if let (Some(prev), Some(node)) = (list.node(curr), list.node(next)) {
            if list.comparator().less(&node.key, &prev.key) {
              return Err(Error::Corrupted {
                level,
                reason: "keys out of order",
              });
            }
          }
        }

        count += 1;
        if count > list.len() {
          return Err(Error::Corrupted {
            level,
            reason: "level holds more nodes than the list",
          });
        }
        curr = next;
      }

      if level == 0 && count != list.len() {
        return Err(Error::Corrupted {
          level,
          reason: "base level length mismatch",
        });
      }

      if count > below {
        return Err(Error::Corrupted {
          level,
          reason: "level more populated than the one below",
        });
      }

      if level > 0 && level + 1 == list.height() && count == 0 {
        return Err(Error::Corrupted {
          level,
          reason: "empty top level",
        });
      }

      below = count;
    }

    Ok(())
  }
}

impl<K, V, C, R> fmt::Display for Debugger<'_, K, V, C, R>
where
  K: fmt::Display,
{
  /// Renders one line per level, the top level first.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for level in (0..self.levels()).rev() {
      write!(f, "L{level}:")?;
      for key in self.level_keys(level) {
        write!(f, " {key}")?;
      }
      writeln!(f)?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use crate::{Builder, SkipList};
  use std::string::ToString;

  #[test]
  fn test_render() {
    let mut l: SkipList<u32, ()> = Builder::new()
      .with_max_level(0)
      .with_seed(Some(1))
      .build()
      .unwrap();
    l.extend([(2, ()), (1, ()), (3, ())]);

    assert_eq!(l.debugger().to_string(), "L0: 1 2 3\n");
  }

  #[test]
  fn test_level_keys_out_of_range() {
    let l = SkipList::<u32, ()>::new();
    assert!(l.debugger().level_keys(5).is_empty());
    assert!(l.debugger().keys().is_empty());
    assert!(l.debugger().verify().is_ok());
  }
}
