use log::debug;

use crate::{detect, FormatError, Layout, Swap};

/// Gets the swaps that take a ROM from `source` to `target`, in the order they apply
///
/// # Examples
///
/// ```
/// use n64_rom_convert_lib::{swap_sequence, Layout, Swap};
///
/// assert_eq!(swap_sequence(Layout::Swapped, Layout::DoubleSwapped), &[Swap::Pair]);
/// assert!(swap_sequence(Layout::Native, Layout::Native).is_empty());
/// ```
pub fn swap_sequence(source: Layout, target: Layout) -> &'static [Swap] {
  use Layout::*;
  use Swap::*;
  match (source, target) {
    (Native, Native) | (DoubleSwapped, DoubleSwapped) | (Swapped, Swapped) => &[],
    (Native, DoubleSwapped) | (DoubleSwapped, Native) => &[DoubleWord],
    (Native, Swapped) => &[DoubleWord, Pair],
    (DoubleSwapped, Swapped) | (Swapped, DoubleSwapped) => &[Pair],
    (Swapped, Native) => &[Pair, DoubleWord],
  }
}

/// Converts a ROM already known to be in `source` layout into `target` layout, in place
pub fn convert(buf: &mut [u8], source: Layout, target: Layout) {
  for swap in swap_sequence(source, target) {
    debug!("Applying {swap} ({source} -> {target})");
    swap.apply(buf);
  }
}

/// Detects the layout of the ROM and converts it into `target`, in place
///
/// Returns the detected source [Layout]. Nothing is modified if detection fails.
///
/// # Examples
///
/// ```
/// use n64_rom_convert_lib::{convert_rom, Layout};
///
/// let mut rom = [0x80, 0x37, 0x12, 0x40];
/// let source = convert_rom(&mut rom, Layout::Native).unwrap();
///
/// assert_eq!(source, Layout::DoubleSwapped);
/// assert_eq!(rom, [0x40, 0x12, 0x37, 0x80]);
/// ```
pub fn convert_rom(buf: &mut [u8], target: Layout) -> Result<Layout, FormatError> {
  let source = detect(buf)?;
  convert(buf, source, target);
  Ok(source)
}

#[cfg(test)]
mod tests {
  use super::{convert, convert_rom};
  use crate::{FormatError, Layout};

  fn sample(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 7 + 3) as u8).collect()
  }

  #[test]
  fn same_layout_is_identity() {
    for layout in Layout::ALL {
      let mut bytes = sample(32);
      convert(&mut bytes, layout, layout);
      assert_eq!(bytes, sample(32));
    }
  }

  #[test]
  fn conversions_round_trip() {
    for len in [0, 4, 8, 36, 1024] {
      for a in Layout::ALL {
        for b in Layout::ALL {
          let mut bytes = sample(len);
          convert(&mut bytes, a, b);
          convert(&mut bytes, b, a);
          assert_eq!(bytes, sample(len), "{a} -> {b} -> {a} over {len} bytes");
        }
      }
    }
  }

  #[test]
  fn conversions_round_trip_on_partial_groups() {
    for len in [1, 2, 3, 5, 6, 7] {
      for a in Layout::ALL {
        for b in Layout::ALL {
          let mut bytes = sample(len);
          convert(&mut bytes, a, b);
          convert(&mut bytes, b, a);
          assert_eq!(bytes, sample(len));
        }
      }
    }
  }

  #[test]
  fn magic_follows_conversion() {
    for source in Layout::ALL {
      for target in Layout::ALL {
        let mut bytes = source.magic().to_be_bytes();
        convert(&mut bytes, source, target);
        assert_eq!(u32::from_be_bytes(bytes), target.magic(), "{source} -> {target}");
      }
    }
  }

  #[test]
  fn z64_to_n64() {
    let mut rom = [0x80, 0x37, 0x12, 0x40];
    assert_eq!(convert_rom(&mut rom, Layout::Native), Ok(Layout::DoubleSwapped));
    assert_eq!(rom, [0x40, 0x12, 0x37, 0x80]);
  }

  #[test]
  fn v64_to_z64() {
    let mut rom = [0x37, 0x80, 0x40, 0x12, 0xAA, 0xBB, 0xCC, 0xDD];
    assert_eq!(convert_rom(&mut rom, Layout::DoubleSwapped), Ok(Layout::Swapped));
    assert_eq!(rom, [0x80, 0x37, 0x12, 0x40, 0xBB, 0xAA, 0xDD, 0xCC]);
  }

  #[test]
  fn v64_to_n64() {
    let mut rom = [0x37, 0x80, 0x40, 0x12, 0xAA, 0xBB, 0xCC, 0xDD];
    assert_eq!(convert_rom(&mut rom, Layout::Native), Ok(Layout::Swapped));
    assert_eq!(rom, [0x40, 0x12, 0x37, 0x80, 0xCC, 0xDD, 0xAA, 0xBB]);
  }

  #[test]
  fn invalid_rom_is_left_untouched() {
    let mut rom = [0x00, 0x01, 0x02, 0x03, 0x04, 0x05];
    assert_eq!(
      convert_rom(&mut rom, Layout::Swapped),
      Err(FormatError::UnknownMagic(0x00010203))
    );
    assert_eq!(rom, [0x00, 0x01, 0x02, 0x03, 0x04, 0x05]);
  }
}
