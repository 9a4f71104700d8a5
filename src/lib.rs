//! An ordered, multi-level linked index based on skiplist.
//!
//! [`SkipList`] keeps every inserted entry, including entries sharing the same key,
//! in a single ordered chain that can be walked in both directions. Lookups,
//! insertions and removals run in logarithmic expected time, and inclusive
//! range scans are answered by two searches followed by a walk along the base level.
//!
//! ```rust
//! use skipindex::SkipList;
//!
//! let mut l = SkipList::<u32, &str>::new();
//! l.add(3, "c");
//! l.add(1, "a");
//! l.add(3, "d");
//!
//! assert_eq!(l.len(), 3);
//! assert_eq!(*l.get_first(&3).unwrap().value(), "c");
//! assert_eq!(*l.get_last(&3).unwrap().value(), "d");
//!
//! let keys: Vec<_> = l.range(&0, &5).map(|ent| *ent.key()).collect();
//! assert_eq!(keys, [1, 3, 3]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(docsrs, allow(unused_attributes))]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc as std;

#[cfg(feature = "std")]
extern crate std;

mod arena;
mod node;

mod base;
pub use base::{EntryMut, EntryRef, Iter, Range, SkipList};

mod builder;
pub use builder::Builder;

/// Comparators used to order the keys in the skiplist.
pub mod comparator;
pub use comparator::{Ascend, Comparator, Descend};

mod debugger;
pub use debugger::Debugger;

mod error;
pub use error::Error;

mod ext;

mod options;
pub use options::Options;

pub use node::NodePtr;

pub use rand;

/// The hard cap of the level a node can be assigned, the sentinel can hold
/// `MAX_LEVEL + 1` levels at most.
pub const MAX_LEVEL: usize = 32;

/// The default promotion ratio, a node is promoted to the next level with probability `1 / 4`.
pub const DEFAULT_PROMOTE_RATIO: u32 = 4;

/// Draws a level from the geometric distribution: starting at level 0, a node is
/// promoted with probability `1 / ratio` until it reaches `max_level`.
#[inline]
fn random_level<R: rand::Rng>(rng: &mut R, ratio: u32, max_level: usize) -> usize {
  let mut lv = 0;
  while lv < max_level && rng.random_ratio(1, ratio) {
    lv += 1;
  }
  lv
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::{rngs::SmallRng, SeedableRng};

  #[test]
  fn test_random_level_capped() {
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..10_000 {
      assert!(random_level(&mut rng, 2, 3) <= 3);
    }
    assert_eq!(random_level(&mut rng, 2, 0), 0);
  }

  #[test]
  fn test_random_level_distribution() {
    let mut rng = SmallRng::seed_from_u64(42);
    const N: usize = 100_000;
    let zeros = (0..N)
      .filter(|_| random_level(&mut rng, DEFAULT_PROMOTE_RATIO, MAX_LEVEL) == 0)
      .count();

    // three quarters of the draws stay at level 0
    let ratio = zeros as f64 / N as f64;
    assert!((0.73..0.77).contains(&ratio), "ratio: {ratio}");
  }

  #[test]
  fn test_random_level_seeded() {
    let mut a = SmallRng::seed_from_u64(1234);
    let mut b = SmallRng::seed_from_u64(1234);
    for _ in 0..1000 {
      assert_eq!(
        random_level(&mut a, DEFAULT_PROMOTE_RATIO, MAX_LEVEL),
        random_level(&mut b, DEFAULT_PROMOTE_RATIO, MAX_LEVEL)
      );
    }
  }
}
