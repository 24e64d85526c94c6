use std::{fmt, str::FromStr};

use crate::Error;

/// The byte orders a N64 ROM dump can be stored in
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Layout {
  /// Big-endian native dump (`.n64`)
  Native,
  /// Byte-pair swapped dump (`.v64`)
  Swapped,
  /// Doubleword swapped dump (`.z64`)
  DoubleSwapped,
}

impl Layout {
  /// All the known layouts
  pub const ALL: [Layout; 3] = [Layout::Native, Layout::Swapped, Layout::DoubleSwapped];

  /// Gets the magic header value that identifies this [Layout]
  ///
  /// # Examples
  ///
  /// ```
  /// use n64_rom_convert_lib::Layout;
  ///
  /// assert_eq!(Layout::DoubleSwapped.magic(), 0x80371240);
  /// ```
  pub fn magic(&self) -> u32 {
    match self {
      Self::Native => 0x40123780,
      Self::Swapped => 0x37804012,
      Self::DoubleSwapped => 0x80371240,
    }
  }

  /// Gets the format label of this [Layout], which is also its file extension
  pub fn label(&self) -> &'static str {
    match self {
      Self::Native => "n64",
      Self::Swapped => "v64",
      Self::DoubleSwapped => "z64",
    }
  }

  /// Finds the [Layout] identified by the given magic header value
  pub fn from_magic(magic: u32) -> Option<Self> {
    Self::ALL.into_iter().find(|l| l.magic() == magic)
  }

  /// Finds the [Layout] with the given format label
  ///
  /// # Examples
  ///
  /// ```
  /// use n64_rom_convert_lib::Layout;
  ///
  /// assert_eq!(Layout::from_label("v64"), Some(Layout::Swapped));
  /// assert_eq!(Layout::from_label("rom"), None);
  /// ```
  pub fn from_label(label: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|l| l.label() == label)
  }
}

impl FromStr for Layout {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::from_label(s).ok_or_else(|| Error::UnknownExtension(s.to_owned()))
  }
}

impl fmt::Display for Layout {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}
