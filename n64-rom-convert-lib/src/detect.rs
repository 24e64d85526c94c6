use log::debug;

use crate::{Error, FormatError, Layout};

/// The size of the magic header at the start of every ROM
pub const MAGIC_SIZE: usize = 4;

/// Reads the magic header of a ROM as a big-endian value
pub fn read_magic(buf: &[u8]) -> Result<u32, FormatError> {
  match buf.get(..MAGIC_SIZE) {
    Some(&[a, b, c, d]) => Ok(u32::from_be_bytes([a, b, c, d])),
    _ => Err(FormatError::TooShort(buf.len())),
  }
}

/// Detects the [Layout] of a ROM from its magic header
///
/// # Examples
///
/// ```
/// use n64_rom_convert_lib::{detect, FormatError, Layout};
///
/// assert_eq!(detect(&[0x80, 0x37, 0x12, 0x40]), Ok(Layout::DoubleSwapped));
/// assert_eq!(detect(&[]), Err(FormatError::TooShort(0)));
/// ```
pub fn detect(buf: &[u8]) -> Result<Layout, FormatError> {
  let magic = read_magic(buf)?;
  let layout = Layout::from_magic(magic).ok_or(FormatError::UnknownMagic(magic))?;
  debug!("Detected {layout} layout (magic {magic:#010X})");
  Ok(layout)
}

/// Makes sure the source and target format labels are not the same
///
/// Only the labels are compared, the file contents are never looked at.
pub fn validate_distinct(source_label: &str, target_label: &str) -> Result<(), Error> {
  if source_label == target_label {
    Err(Error::SameFormat(source_label.to_owned()))
  } else {
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::{detect, read_magic, validate_distinct};
  use crate::{Error, FormatError, Layout};

  #[test]
  fn verify_detect() {
    assert_eq!(detect(&[0x40, 0x12, 0x37, 0x80]), Ok(Layout::Native));
    assert_eq!(detect(&[0x80, 0x37, 0x12, 0x40]), Ok(Layout::DoubleSwapped));
    assert_eq!(detect(&[0x37, 0x80, 0x40, 0x12]), Ok(Layout::Swapped));
  }

  #[test]
  fn detect_ignores_data_after_header() {
    let rom = [0x37, 0x80, 0x40, 0x12, 0xDE, 0xAD, 0xBE, 0xEF];
    assert_eq!(detect(&rom), Ok(Layout::Swapped));
  }

  #[test]
  fn detect_rejects_invalid_roms() {
    assert_eq!(detect(&[]), Err(FormatError::TooShort(0)));
    assert_eq!(detect(&[0x80, 0x37, 0x12]), Err(FormatError::TooShort(3)));
    assert_eq!(
      detect(&[0x00, 0x00, 0x00, 0x00]),
      Err(FormatError::UnknownMagic(0))
    );
    assert_eq!(
      detect(&[0x12, 0x40, 0x80, 0x37]),
      Err(FormatError::UnknownMagic(0x12408037))
    );
  }

  #[test]
  fn verify_read_magic() {
    assert_eq!(read_magic(&[1, 2, 3, 4, 5]), Ok(0x01020304));
    assert_eq!(read_magic(&[1]), Err(FormatError::TooShort(1)));
  }

  #[test]
  fn verify_validate_distinct() {
    assert!(validate_distinct("z64", "n64").is_ok());
    assert!(validate_distinct("v64", "z64").is_ok());
    assert!(matches!(
      validate_distinct("z64", "z64"),
      Err(Error::SameFormat(label)) if label == "z64"
    ));
  }
}
