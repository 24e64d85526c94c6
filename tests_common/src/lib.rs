use assert_cmd::{assert::Assert, Command};
use assert_fs::{fixture::ChildPath, prelude::*, TempDir};
use std::error::Error;
use std::path::Path;

pub type TestResult<T> = Result<T, Box<dyn Error>>;

pub const EXE_NAME: &str = "n64_rom_convert";

/// The byte orders a test ROM can be built in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RomKind {
  N64,
  V64,
  Z64,
}

impl RomKind {
  pub const ALL: [RomKind; 3] = [RomKind::N64, RomKind::V64, RomKind::Z64];

  pub fn extension(&self) -> &str {
    match self {
      RomKind::N64 => "n64",
      RomKind::V64 => "v64",
      RomKind::Z64 => "z64",
    }
  }

  /// Lays out the given doubleword-swapped (z64) data in this byte order
  pub fn from_z64(&self, z64: &[u8]) -> Vec<u8> {
    match self {
      RomKind::Z64 => z64.to_vec(),
      RomKind::V64 => z64
        .chunks(2)
        .flat_map(|c| c.iter().rev().copied())
        .collect(),
      RomKind::N64 => z64
        .chunks(4)
        .flat_map(|c| c.iter().rev().copied())
        .collect(),
    }
  }
}

/// Builds the same ROM contents in every byte order
pub fn sample_z64(size: usize) -> Vec<u8> {
  let mut rom = vec![0x80, 0x37, 0x12, 0x40];
  rom.extend((4..size).map(|i| (i * 31 % 251) as u8));
  rom
}

pub struct DataPrepare {
  tmp: TempDir,
}

impl DataPrepare {
  pub fn new() -> TestResult<Self> {
    let tmp = TempDir::new()?;
    tmp.child("out").create_dir_all()?;
    Ok(Self { tmp })
  }

  pub fn out_dir(&self) -> ChildPath {
    self.tmp.child("out")
  }

  /// Writes a ROM named `name` holding `data`
  pub fn write_raw(&self, name: &str, data: &[u8]) -> TestResult<ChildPath> {
    let child = self.tmp.child(name);
    child.write_binary(data)?;
    Ok(child)
  }

  /// Writes the sample ROM in the given byte order, with a matching extension
  pub fn write_rom(&self, kind: RomKind, size: usize) -> TestResult<ChildPath> {
    self.write_raw(
      &format!("Game.{}", kind.extension()),
      &kind.from_z64(&sample_z64(size)),
    )
  }

  pub fn output(&self, kind: RomKind) -> ChildPath {
    self.out_dir().child(format!("Game.{}", kind.extension()))
  }
}

pub fn run<I, O>(input: I, output: O) -> TestResult<Assert>
where
  I: AsRef<Path>,
  O: AsRef<Path>,
{
  let mut cmd = Command::cargo_bin(EXE_NAME)?;
  cmd
    .arg("-i")
    .arg(input.as_ref())
    .arg("-o")
    .arg(output.as_ref())
    .args(["-v", "debug"]);

  Ok(cmd.assert())
}
