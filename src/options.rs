use crate::{error::Error, DEFAULT_PROMOTE_RATIO, MAX_LEVEL};

/// Options for [`SkipList`](crate::SkipList).
#[viewit::viewit(vis_all = "pub(super)", getters(skip), setters(skip))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Options {
  max_level: usize,
  promote_ratio: u32,
  capacity: usize,
  seed: Option<u64>,
}

impl Default for Options {
  #[inline]
  fn default() -> Options {
    Options::new()
  }
}

impl Options {
  /// Creates a new set of options with the default values.
  #[inline]
  pub const fn new() -> Self {
    Self {
      max_level: MAX_LEVEL,
      promote_ratio: DEFAULT_PROMOTE_RATIO,
      capacity: 0,
      seed: None,
    }
  }

  /// Sets the highest level a node can be assigned.
  ///
  /// A node drawn at level `L` participates in levels `0..=L`, so `0` turns the
  /// skiplist into a plain doubly linked list. The value must not exceed [`MAX_LEVEL`].
  ///
  /// Default is [`MAX_LEVEL`].
  ///
  /// ## Example
  ///
  /// ```
  /// use skipindex::Options;
  ///
  /// let opts = Options::new().with_max_level(12);
  /// assert_eq!(opts.max_level(), 12);
  /// ```
  #[inline]
  pub const fn with_max_level(mut self, max_level: usize) -> Self {
    self.max_level = max_level;
    self
  }

  /// Sets the promotion ratio `P`, a node is promoted to the next level with probability `1 / P`.
  ///
  /// Larger ratios give shorter towers and fewer links per node, at the price of
  /// longer walks on each level. The value must be at least `2`.
  ///
  /// Default is [`DEFAULT_PROMOTE_RATIO`].
  ///
  /// ## Example
  ///
  /// ```
  /// use skipindex::Options;
  ///
  /// let opts = Options::new().with_promote_ratio(2);
  /// assert_eq!(opts.promote_ratio(), 2);
  /// ```
  #[inline]
  pub const fn with_promote_ratio(mut self, ratio: u32) -> Self {
    self.promote_ratio = ratio;
    self
  }

  /// Sets how many nodes the skiplist reserves room for up front.
  ///
  /// Default is `0`.
  #[inline]
  pub const fn with_capacity(mut self, capacity: usize) -> Self {
    self.capacity = capacity;
    self
  }

  /// Sets the seed of the level generator, the same seed and the same sequence of
  /// insertions always produce the same shape.
  ///
  /// Default is `None`, which seeds the generator from the operating system
  /// (or from a fixed seed without the `std` feature).
  ///
  /// ## Example
  ///
  /// ```
  /// use skipindex::Options;
  ///
  /// let opts = Options::new().with_seed(Some(42));
  /// assert_eq!(opts.seed(), Some(42));
  /// ```
  #[inline]
  pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
    self.seed = seed;
    self
  }

  /// Returns the highest level a node can be assigned.
  #[inline]
  pub const fn max_level(&self) -> usize {
    self.max_level
  }

  /// Returns the promotion ratio.
  #[inline]
  pub const fn promote_ratio(&self) -> u32 {
    self.promote_ratio
  }

  /// Returns the number of nodes reserved up front.
  #[inline]
  pub const fn capacity(&self) -> usize {
    self.capacity
  }

  /// Returns the seed of the level generator.
  #[inline]
  pub const fn seed(&self) -> Option<u64> {
    self.seed
  }

  /// Checks the options can drive a skiplist.
  pub(crate) fn validate(&self) -> Result<(), Error> {
    if self.max_level > MAX_LEVEL {
      return Err(Error::InvalidMaxLevel(self.max_level));
    }

    if self.promote_ratio < 2 {
      return Err(Error::InvalidPromoteRatio(self.promote_ratio));
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_validate() {
    assert!(Options::new().validate().is_ok());
    assert_eq!(
      Options::new().with_max_level(MAX_LEVEL + 1).validate(),
      Err(Error::InvalidMaxLevel(MAX_LEVEL + 1))
    );
    assert_eq!(
      Options::new().with_promote_ratio(1).validate(),
      Err(Error::InvalidPromoteRatio(1))
    );
    assert!(Options::new()
      .with_max_level(0)
      .with_promote_ratio(2)
      .validate()
      .is_ok());
  }
}
