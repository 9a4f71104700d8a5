use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{comparator::Ascend, error::Error, options::Options, SkipList};

/// The seed used when neither a seed nor an OS random source is available.
#[cfg(not(feature = "std"))]
const FALLBACK_SEED: u64 = 0x5eed_1e7e_15ca_1ab5;

/// Returns the level generator used by the default constructors.
pub(crate) fn default_rng(seed: Option<u64>) -> SmallRng {
  match seed {
    Some(seed) => SmallRng::seed_from_u64(seed),
    #[cfg(feature = "std")]
    None => SmallRng::from_os_rng(),
    #[cfg(not(feature = "std"))]
    None => SmallRng::seed_from_u64(FALLBACK_SEED),
  }
}

/// The builder to build [`SkipList`].
///
/// ## Example
///
/// ```rust
/// use skipindex::{Builder, Descend, SkipList};
///
/// let mut l: SkipList<u32, &str, Descend> = Builder::new()
///   .with_comparator(Descend)
///   .with_promote_ratio(2)
///   .with_seed(Some(7))
///   .build()
///   .unwrap();
///
/// l.add(1, "a");
/// l.add(2, "b");
/// assert_eq!(*l.front().unwrap().key(), 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Builder<C = Ascend> {
  opts: Options,
  cmp: C,
}

impl Default for Builder {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl Builder {
  /// Creates a new `Builder` with default values.
  #[inline]
  pub const fn new() -> Self {
    Self {
      opts: Options::new(),
      cmp: Ascend,
    }
  }
}

impl<C> Builder<C> {
  #[inline]
  pub(crate) const fn with(opts: Options, cmp: C) -> Self {
    Self { opts, cmp }
  }

  /// Returns a new builder with the new [`Comparator`](crate::Comparator).
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skipindex::{comparator::FloatAscend, Builder};
  ///
  /// let builder = Builder::new().with_comparator(FloatAscend);
  /// ```
  #[inline]
  pub fn with_comparator<NC>(self, cmp: NC) -> Builder<NC> {
    Builder {
      cmp,
      opts: self.opts,
    }
  }

  /// Returns a new builder with the new [`Options`].
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skipindex::{Builder, Options};
  ///
  /// let builder = Builder::new().with_options(Options::new().with_capacity(1024));
  /// ```
  #[inline]
  pub fn with_options(mut self, opts: Options) -> Self {
    self.opts = opts;
    self
  }

  /// Sets the highest level a node can be assigned, see [`Options::with_max_level`].
  #[inline]
  pub fn with_max_level(mut self, max_level: usize) -> Self {
    self.opts = self.opts.with_max_level(max_level);
    self
  }

  /// Sets the promotion ratio, see [`Options::with_promote_ratio`].
  #[inline]
  pub fn with_promote_ratio(mut self, ratio: u32) -> Self {
    self.opts = self.opts.with_promote_ratio(ratio);
    self
  }

  /// Sets how many nodes are reserved up front, see [`Options::with_capacity`].
  #[inline]
  pub fn with_capacity(mut self, capacity: usize) -> Self {
    self.opts = self.opts.with_capacity(capacity);
    self
  }

  /// Sets the seed of the level generator, see [`Options::with_seed`].
  #[inline]
  pub fn with_seed(mut self, seed: Option<u64>) -> Self {
    self.opts = self.opts.with_seed(seed);
    self
  }

  /// Returns the options of the builder.
  #[inline]
  pub const fn options(&self) -> &Options {
    &self.opts
  }

  /// Returns the comparator of the builder.
  #[inline]
  pub const fn comparator(&self) -> &C {
    &self.cmp
  }

  /// Builds the skiplist, drawing levels from a [`SmallRng`] seeded by [`Options::seed`].
  pub fn build<K, V>(self) -> Result<SkipList<K, V, C>, Error> {
    let rng = default_rng(self.opts.seed());
    self.build_with_rng(rng)
  }

  /// Builds the skiplist, drawing levels from the given random generator.
  ///
  /// The seed in the options is ignored.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skipindex::{rand::{rngs::StdRng, SeedableRng}, Builder, SkipList};
  ///
  /// let l: SkipList<u32, u32, _, StdRng> = Builder::new()
  ///   .build_with_rng(StdRng::seed_from_u64(1))
  ///   .unwrap();
  /// assert!(l.is_empty());
  /// ```
  pub fn build_with_rng<K, V, R: Rng>(self, rng: R) -> Result<SkipList<K, V, C, R>, Error> {
    if let Err(e) = self.opts.validate() {
      #[cfg(feature = "tracing")]
      tracing::debug!(err = %e, options = ?self.opts, "rejected skiplist options");
      return Err(e);
    }

    Ok(SkipList::construct(self.opts, self.cmp, rng))
  }
}
