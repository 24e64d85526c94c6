//! # N64 ROM Converter Lib
//!
//! `n64-rom-convert-lib` is the library portion of `n64_rom_convert`. It detects the byte order
//! of a N64 ROM dump from its magic header and rewrites it into any of the other byte orders.

#![deny(missing_docs)]

mod convert;
mod detect;
mod layout;
mod swap;

use std::{
  error, fmt, fs, io,
  path::{Path, PathBuf},
};

use log::{info, warn};

pub use convert::{convert, convert_rom, swap_sequence};
pub use detect::{detect, read_magic, validate_distinct, MAGIC_SIZE};
pub use layout::Layout;
pub use swap::{double_word_swap, pair_swap, Swap};

/// The reasons a buffer is not recognized as a ROM
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
  /// The buffer is too small to hold a magic header
  TooShort(usize),
  /// The magic header does not belong to any known [Layout]
  UnknownMagic(u32),
}

impl fmt::Display for FormatError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::TooShort(0) => f.write_str("invalid ROM: file is empty"),
      Self::TooShort(len) => f.write_fmt(format_args!(
        "invalid ROM: {len} byte(s) is too short for a header"
      )),
      Self::UnknownMagic(magic) => {
        f.write_fmt(format_args!("invalid ROM: unknown header {magic:#010X}"))
      }
    }
  }
}

impl error::Error for FormatError {}

/// Provides the path to which the error originated from
#[derive(Debug)]
pub struct PathError(PathBuf, io::Error);

impl fmt::Display for PathError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let PathError(path, err) = self;
    match err.kind() {
      io::ErrorKind::NotFound => f.write_fmt(format_args!("file {} not found", path.display())),
      io::ErrorKind::PermissionDenied => {
        f.write_fmt(format_args!("could not access {}", path.display()))
      }
      io::ErrorKind::WriteZero => f.write_fmt(format_args!(
        "could not write all data into {}",
        path.display()
      )),
      _ => f.write_fmt(format_args!("{err} ({})", path.display())),
    }
  }
}

impl error::Error for PathError {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    Some(&self.1)
  }
}

/// Defines the errors that stop a conversion
#[derive(Debug)]
pub enum Error {
  /// The input is not a ROM in any known layout
  InvalidFormat(FormatError),
  /// The input and output have the same format label
  SameFormat(String),
  /// The format label is not one of `n64`, `v64` or `z64`
  UnknownExtension(String),
  /// Reading or writing a file failed
  Io(PathError),
}

impl From<FormatError> for Error {
  fn from(error: FormatError) -> Self {
    Self::InvalidFormat(error)
  }
}

impl From<PathError> for Error {
  fn from(error: PathError) -> Self {
    Self::Io(error)
  }
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::InvalidFormat(err) => f.write_fmt(format_args!("{err}")),
      Self::SameFormat(label) => f.write_fmt(format_args!(
        "input and output are both {label}, nothing to convert"
      )),
      Self::UnknownExtension(label) => f.write_fmt(format_args!(
        "unknown format \"{label}\", expected one of: n64, v64, z64"
      )),
      Self::Io(err) => f.write_fmt(format_args!("{err}")),
    }
  }
}

impl error::Error for Error {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match self {
      Self::InvalidFormat(err) => Some(err),
      Self::Io(err) => Some(err),
      _ => None,
    }
  }
}

/// Gets the format label of a path: its last three characters
///
/// # Examples
///
/// ```
/// use n64_rom_convert_lib::format_label;
///
/// assert_eq!(format_label("roms/Game.z64"), "z64");
/// assert_eq!(format_label("ab"), "ab");
/// ```
pub fn format_label<P>(path: &P) -> String
where
  P: AsRef<Path> + ?Sized,
{
  let path = path.as_ref().to_string_lossy();
  let skip = path.chars().count().saturating_sub(3);
  path.chars().skip(skip).collect()
}

/// Converts the ROM at `input` into the `target` layout, and writes it to `output`
///
/// The input is read whole before anything is written, and nothing is written if it is not a
/// valid ROM. Returns the [Layout] detected in the input.
pub fn convert_file<I, O>(input: &I, output: &O, target: Layout) -> Result<Layout, Error>
where
  I: AsRef<Path> + ?Sized,
  O: AsRef<Path> + ?Sized,
{
  let input = input.as_ref();
  let output = output.as_ref();

  let mut rom = fs::read(input).map_err(|e| PathError(input.into(), e))?;
  if rom.len() % MAGIC_SIZE != 0 {
    warn!(
      "{} is {} bytes long, the trailing {} byte(s) will not be fully swapped",
      input.display(),
      rom.len(),
      rom.len() % MAGIC_SIZE
    );
  }

  let source = convert_rom(&mut rom, target)?;

  fs::write(output, &rom).map_err(|e| PathError(output.into(), e))?;
  info!("Wrote {} ({} bytes)", output.display(), rom.len());
  Ok(source)
}
