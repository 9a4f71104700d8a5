use core::cmp;

/// Comparator defines the order of the keys in the skiplist.
///
/// Implementors must provide a strict weak order: `less` is irreflexive and transitive,
/// and two keys for which neither `less(a, b)` nor `less(b, a)` holds must be `equal`.
/// The skiplist relies on this consistency and never validates it, an inconsistent
/// comparator yields an unspecified (but memory safe) traversal order.
pub trait Comparator<K: ?Sized> {
  /// Returns `true` if `a` is ordered strictly before `b`.
  fn less(&self, a: &K, b: &K) -> bool;

  /// Returns `true` if `a` and `b` are equal.
  fn equal(&self, a: &K, b: &K) -> bool;

  /// Returns `true` if `a` is ordered before `b` or equal to it.
  #[inline]
  fn less_or_equal(&self, a: &K, b: &K) -> bool {
    self.equal(a, b) || self.less(a, b)
  }
}

impl<K: ?Sized, C: Comparator<K> + ?Sized> Comparator<K> for &C {
  #[inline]
  fn less(&self, a: &K, b: &K) -> bool {
    (**self).less(a, b)
  }

  #[inline]
  fn equal(&self, a: &K, b: &K) -> bool {
    (**self).equal(a, b)
  }
}

/// Ascend orders keys by their own [`Ord`] implementation, in ascending order.
///
/// Works for all the integer types, strings and any other totally ordered key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Ascend;

impl<K: ?Sized + Ord> Comparator<K> for Ascend {
  #[inline]
  fn less(&self, a: &K, b: &K) -> bool {
    a.cmp(b) == cmp::Ordering::Less
  }

  #[inline]
  fn equal(&self, a: &K, b: &K) -> bool {
    a.cmp(b) == cmp::Ordering::Equal
  }
}

/// Descend orders keys by their own [`Ord`] implementation, in descending order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Descend;

impl<K: ?Sized + Ord> Comparator<K> for Descend {
  #[inline]
  fn less(&self, a: &K, b: &K) -> bool {
    b.cmp(a) == cmp::Ordering::Less
  }

  #[inline]
  fn equal(&self, a: &K, b: &K) -> bool {
    a.cmp(b) == cmp::Ordering::Equal
  }
}

mod sealed {
  pub trait Float: Copy {
    fn total(self, other: Self) -> core::cmp::Ordering;
  }

  impl Float for f32 {
    #[inline]
    fn total(self, other: Self) -> core::cmp::Ordering {
      self.total_cmp(&other)
    }
  }

  impl Float for f64 {
    #[inline]
    fn total(self, other: Self) -> core::cmp::Ordering {
      self.total_cmp(&other)
    }
  }
}

/// FloatAscend orders `f32` and `f64` keys in ascending IEEE 754 total order.
///
/// `-0.0` is ordered before `+0.0` and `NaN`s are ordered after every other
/// positive value, so even `NaN` keys keep the skiplist consistent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FloatAscend;

impl<F: sealed::Float> Comparator<F> for FloatAscend {
  #[inline]
  fn less(&self, a: &F, b: &F) -> bool {
    a.total(*b) == cmp::Ordering::Less
  }

  #[inline]
  fn equal(&self, a: &F, b: &F) -> bool {
    a.total(*b) == cmp::Ordering::Equal
  }
}

/// FloatDescend orders `f32` and `f64` keys in descending IEEE 754 total order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FloatDescend;

impl<F: sealed::Float> Comparator<F> for FloatDescend {
  #[inline]
  fn less(&self, a: &F, b: &F) -> bool {
    b.total(*a) == cmp::Ordering::Less
  }

  #[inline]
  fn equal(&self, a: &F, b: &F) -> bool {
    a.total(*b) == cmp::Ordering::Equal
  }
}

/// A comparator built from a pair of closures.
///
/// ```rust
/// use skipindex::{comparator::FnComparator, SkipList};
///
/// let cmp = FnComparator::new(
///   |a: &String, b: &String| a.len() < b.len(),
///   |a: &String, b: &String| a.len() == b.len(),
/// );
/// let mut l = SkipList::with_comparator(cmp);
/// l.add("ccc".to_string(), 3);
/// l.add("a".to_string(), 1);
/// l.add("b".to_string(), 2);
///
/// assert_eq!(l.front().unwrap().key(), "a");
/// assert_eq!(l.count(&"z".to_string()), 2);
///
/// // equality falls back to `PartialEq`
/// let mut l = SkipList::with_comparator(FnComparator::by_less(|a: &i64, b: &i64| a > b));
/// l.add(1, "one");
/// l.add(2, "two");
/// assert_eq!(*l.front().unwrap().key(), 2);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FnComparator<L, E> {
  less: L,
  equal: E,
}

impl<L, E> FnComparator<L, E> {
  /// Creates a comparator from a less-than and an equal-to function.
  #[inline]
  pub const fn new(less: L, equal: E) -> Self {
    Self { less, equal }
  }
}

impl<L> FnComparator<L, ()> {
  /// Creates a comparator from a less-than function, equality falls back to [`PartialEq`].
  #[inline]
  #[allow(clippy::type_complexity)]
  pub fn by_less<K>(less: L) -> FnComparator<L, fn(&K, &K) -> bool>
  where
    K: ?Sized + PartialEq,
    L: Fn(&K, &K) -> bool,
  {
    FnComparator {
      less,
      equal: <K as PartialEq>::eq,
    }
  }
}

impl<K, L, E> Comparator<K> for FnComparator<L, E>
where
  K: ?Sized,
  L: Fn(&K, &K) -> bool,
  E: Fn(&K, &K) -> bool,
{
  #[inline]
  fn less(&self, a: &K, b: &K) -> bool {
    (self.less)(a, b)
  }

  #[inline]
  fn equal(&self, a: &K, b: &K) -> bool {
    (self.equal)(a, b)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_ascend_descend() {
    assert!(Ascend.less(&1, &2));
    assert!(!Ascend.less(&2, &2));
    assert!(Ascend.equal("a", "a"));
    assert!(Descend.less(&2i64, &1i64));
    assert!(!Descend.less(&1i64, &2i64));
    assert!(Descend.less_or_equal(&"b", &"b"));
  }

  #[test]
  fn test_float() {
    assert!(FloatAscend.less(&-0.0f64, &0.0));
    assert!(FloatAscend.less(&1.0f64, &f64::NAN));
    assert!(FloatAscend.equal(&f64::NAN, &f64::NAN));
    assert!(FloatDescend.less(&2.5f32, &1.5f32));
    assert!(!FloatDescend.equal(&2.5f32, &1.5f32));
  }

  #[test]
  fn test_fn_comparator() {
    let cmp = FnComparator::by_less(|a: &i32, b: &i32| a.abs() < b.abs());
    assert!(cmp.less(&1, &-2));
    assert!(!cmp.equal(&1, &-1));

    let cmp = FnComparator::new(
      |a: &i32, b: &i32| a.abs() < b.abs(),
      |a: &i32, b: &i32| a.abs() == b.abs(),
    );
    assert!(cmp.equal(&1, &-1));
  }
}
