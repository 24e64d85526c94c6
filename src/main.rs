use clap::{error::ErrorKind, CommandFactory, FromArgMatches, Parser};
use log::{error, info, LevelFilter};
use n64_rom_convert_lib::{convert_file, format_label, validate_distinct, Error, Layout};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Copy, Clone, Debug, PartialEq, clap::ValueEnum, Default)]
enum Verbosity {
  Quiet,
  #[default]
  Normal,
  Debug,
}

impl From<Verbosity> for LevelFilter {
  fn from(value: Verbosity) -> Self {
    match value {
      Verbosity::Quiet => LevelFilter::Error,
      Verbosity::Normal => LevelFilter::Info,
      Verbosity::Debug => LevelFilter::Debug,
    }
  }
}

/// A simple converter between the n64, v64 and z64 byte orders of N64 ROM dumps.
#[derive(Parser, Debug, Default)]
#[command(version)]
struct N64RomConvert {
  /// Sets the output verbosity
  #[arg(short, long, default_value = "normal")]
  verbosity: Verbosity,

  /// The input ROM, its byte order is detected from its header
  #[arg(short, long, value_name = "INPUT")]
  input: PathBuf,

  /// The output ROM, must have one of these extensions: n64, v64, z64
  #[arg(short, long, value_name = "OUTPUT")]
  output: PathBuf,
}

impl N64RomConvert {
  /// Parses the arguments, requiring `-i` to come before `-o`
  fn parse_ordered<I, T>(itr: I) -> Result<Self, clap::Error>
  where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
  {
    let mut cmd = Self::command();
    let matches = cmd.try_get_matches_from_mut(itr)?;
    if matches.index_of("input") > matches.index_of("output") {
      return Err(cmd.error(
        ErrorKind::ArgumentConflict,
        "-i <INPUT> must be given before -o <OUTPUT>",
      ));
    }
    Self::from_arg_matches(&matches).map_err(|e| e.format(&mut cmd))
  }
}

/// Exit status for every failure (-1 as an unsigned byte)
const FAILURE: u8 = 255;

fn init_logger(verbosity: Verbosity) {
  let config = ConfigBuilder::new()
    .set_time_level(LevelFilter::Off)
    .set_target_level(LevelFilter::Off)
    .set_thread_level(LevelFilter::Off)
    .build();
  if let Err(err) = TermLogger::init(
    verbosity.into(),
    config,
    TerminalMode::Mixed,
    ColorChoice::Auto,
  ) {
    eprintln!("Warning: could not set up logging: {err}");
  }
}

fn run(args: &N64RomConvert) -> Result<(), Error> {
  let source_label = format_label(&args.input);
  let target_label = format_label(&args.output);

  let target: Layout = target_label.parse()?;
  validate_distinct(&source_label, &target_label)?;

  info!("Converting from {source_label} to {target_label}");
  let source = convert_file(&args.input, &args.output, target)?;
  if source.label() != source_label {
    info!(
      "{} is actually a {source} ROM, its header was used instead of its name",
      args.input.display()
    );
  }

  Ok(())
}

fn main() -> ExitCode {
  let args = match N64RomConvert::parse_ordered(std::env::args_os()) {
    Ok(args) => args,
    Err(err) => {
      let _ = err.print();
      return if err.use_stderr() {
        ExitCode::from(FAILURE)
      } else {
        ExitCode::SUCCESS
      };
    }
  };

  init_logger(args.verbosity);

  match run(&args) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err @ Error::UnknownExtension(_)) => {
      error!("{err}");
      eprintln!("{}", N64RomConvert::command().render_usage());
      ExitCode::from(FAILURE)
    }
    Err(err) => {
      error!("Could not convert {}: {err}", args.input.display());
      ExitCode::from(FAILURE)
    }
  }
}
