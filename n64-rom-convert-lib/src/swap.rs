use std::fmt;

/// The byte reordering steps used to move between layouts
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Swap {
  /// Exchanges every two adjacent bytes
  Pair,
  /// Reverses every 4-byte group
  DoubleWord,
}

impl Swap {
  /// Applies this swap over the whole buffer
  pub fn apply(&self, buf: &mut [u8]) {
    match self {
      Self::Pair => pair_swap(buf),
      Self::DoubleWord => double_word_swap(buf),
    }
  }
}

impl fmt::Display for Swap {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Pair => f.write_str("pair swap"),
      Self::DoubleWord => f.write_str("doubleword swap"),
    }
  }
}

/// Swaps values in a 2-byte boundary, a trailing odd byte is left as is
pub fn pair_swap(buf: &mut [u8]) {
  for pair in buf.chunks_exact_mut(2) {
    pair.swap(0, 1);
  }
}

/// Swaps values in a 4-byte boundary, a trailing partial group is left as is
pub fn double_word_swap(buf: &mut [u8]) {
  for quad in buf.chunks_exact_mut(4) {
    quad.swap(0, 3);
    quad.swap(1, 2);
  }
}
