//! Word-list collision scanner: hashes every line of a file and reports any
//! pair of distinct words that share a 64- or 128-bit fingerprint.
//!
//! Usage:
//!   pihash-dict <FILE>
//!
//! Exits non-zero if any collision is found.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use pihash_cli::{find_collisions, hex128, strip_line_ending};

/// CLI arguments.
#[derive(Debug, Default)]
struct Args {
  /// Word list, one word per line.
  path: Option<PathBuf>,

  /// Print the word count and every word's hashes, not just collisions.
  verbose: bool,

  /// Show help.
  help: bool,
}

fn parse_args() -> Result<Args, String> {
  let mut args = Args::default();

  for arg in env::args().skip(1) {
    match arg.as_str() {
      "--verbose" | "-v" => args.verbose = true,
      "--help" | "-h" => args.help = true,
      other if other.starts_with('-') => return Err(format!("Unknown argument: {other}")),
      other => {
        if args.path.is_some() {
          return Err("expected exactly one word list".to_string());
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
pihash-dict: scan a word list for pihash collisions

USAGE:
    pihash-dict [OPTIONS] <FILE>

Reads one word per line, drops blank lines and duplicates, then checks every
pair of words for a shared 64- or 128-bit fingerprint. Any collision is
printed and the tool exits non-zero.

OPTIONS:
    -v, --verbose    Print the word count and every word's hashes
    -h, --help       Show this help message
"
  );
}

fn run(path: &Path, verbose: bool) -> Result<bool> {
  let bytes = fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;

  let mut words: Vec<&[u8]> = bytes
    .split(|&b| b == b'\n')
    .map(strip_line_ending)
    .filter(|w| !w.is_empty())
    .collect();
  let lines = words.len();
  words.sort_unstable();
  words.dedup();

  if verbose {
    println!("scanned {} words ({} duplicate lines dropped)", words.len(), lines - words.len());
    for word in &words {
      println!(
        "{:016x} {} {}",
        pihash::hash64(word),
        hex128(pihash::hash128(word)),
        String::from_utf8_lossy(word)
      );
    }
  }

  let h64 = find_collisions(&words, pihash::hash64);
  for (a, b, value) in &h64 {
    println!(
      "hash64 collision {:016x}: {} / {}",
      value,
      String::from_utf8_lossy(a),
      String::from_utf8_lossy(b)
    );
  }

  let h128 = find_collisions(&words, pihash::hash128);
  for (a, b, value) in &h128 {
    println!(
      "hash128 collision {}: {} / {}",
      hex128(*value),
      String::from_utf8_lossy(a),
      String::from_utf8_lossy(b)
    );
  }

  println!("hash64 collisions:  {}/{}", h64.len(), words.len());
  println!("hash128 collisions: {}/{}", h128.len(), words.len());

  Ok(h64.is_empty() && h128.is_empty())
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
    eprintln!("Error: word list required");
    eprintln!("Run with --help for usage information.");
    return ExitCode::FAILURE;
  };

  match run(&path, args.verbose) {
    Ok(true) => ExitCode::SUCCESS,
    Ok(false) => ExitCode::FAILURE,
    Err(err) => {
      eprintln!("Error: {err:#}");
      ExitCode::FAILURE
    }
  }
}
