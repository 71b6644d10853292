//! File digest tool: memory-maps a file and prints its 128-bit fingerprint.
//!
//! Usage:
//!   pihash-digest <FILE>

use std::env;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use memmap2::Mmap;
use pihash_cli::hex128;

/// CLI arguments.
#[derive(Debug, Default)]
struct Args {
  /// File to digest.
  path: Option<PathBuf>,

  /// Show help.
  help: bool,
}

fn parse_args() -> Result<Args, String> {
  let mut args = Args::default();

  for arg in env::args().skip(1) {
    match arg.as_str() {
      "--help" | "-h" => args.help = true,
      other if other.starts_with('-') => return Err(format!("Unknown argument: {other}")),
      other => {
        if args.path.is_some() {
          return Err("expected exactly one input file".to_string());
        }
        args.path = Some(PathBuf::from(other));
      }
    }
  }

  Ok(args)
}

fn print_help() {
  eprintln!(
    "\
pihash-digest: print the 128-bit pihash fingerprint of a file

USAGE:
    pihash-digest <FILE>

The digest is 32 lowercase hex digits, most-significant word first. An empty
file produces no digest; the tool notes it on stderr and exits zero.

OPTIONS:
    -h, --help    Show this help message
"
  );
}

fn run(path: &Path) -> Result<()> {
  let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
  let len = file
    .metadata()
    .with_context(|| format!("cannot stat {}", path.display()))?
    .len();
  if len == 0 {
    eprintln!("{}: empty file, nothing to digest", path.display());
    return Ok(());
  }

  // SAFETY: the mapping is read-only and dropped before the file handle;
  // concurrent truncation of the input is outside this tool's contract.
  let map = unsafe { Mmap::map(&file).with_context(|| format!("cannot map {}", path.display()))? };

  println!("{}", hex128(pihash::hash128(&map)));
  Ok(())
}

fn main() -> ExitCode {
  let args = match parse_args() {
    Ok(args) => args,
    Err(msg) => {
      eprintln!("Error: {msg}");
      eprintln!("Run with --help for usage information.");
      return ExitCode::FAILURE;
    }
  };

  if args.help {
    print_help();
    return ExitCode::SUCCESS;
  }

  let Some(path) = args.path else {
    eprintln!("Error: input file required");
    eprintln!("Run with --help for usage information.");
    return ExitCode::FAILURE;
  };

  match run(&path) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("Error: {err:#}");
      ExitCode::FAILURE
    }
  }
}
