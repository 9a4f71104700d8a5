/// Error type for the skipindex crate.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// Indicates that the configured maximum level exceeds [`MAX_LEVEL`](crate::MAX_LEVEL).
  #[error("max level {0} exceeds the hard cap 32")]
  InvalidMaxLevel(usize),

  /// Indicates that the promotion ratio is too small to draw a level from,
  /// the ratio must be at least `2`.
  #[error("promote ratio {0} is invalid, must be at least 2")]
  InvalidPromoteRatio(u32),

  /// Indicates that the structural verification found a broken link or ordering.
  #[error("skiplist corrupted at level {level}: {reason}")]
  Corrupted {
    /// The level the corruption was found at.
    level: usize,
    /// What is broken.
    reason: &'static str,
  },
}
