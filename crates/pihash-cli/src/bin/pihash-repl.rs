//! Interactive hashing shell: reads lines from stdin and prints the 32-, 64-,
//! and 128-bit fingerprints of each.
//!
//! Usage:
//!   pihash-repl

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use pihash_cli::{hex128, strip_line_ending};

fn run() -> io::Result<()> {
  let stdin = io::stdin();
  let mut input = stdin.lock();
  let mut stdout = io::stdout();
  let mut line = Vec::new();

  loop {
    stdout.write_all(b">> ")?;
    stdout.flush()?;

    line.clear();
    if input.read_until(b'\n', &mut line)? == 0 {
      break;
    }
    let data = strip_line_ending(&line);

    println!("hash32:  {:08x}", pihash::hash32(data));
    println!("hash64:  {:016x}", pihash::hash64(data));
    println!("hash128: {}", hex128(pihash::hash128(data)));
  }

  Ok(())
}

fn main() -> ExitCode {
  // Reject stray arguments early; the shell takes everything from stdin.
  if std::env::args().len() > 1 {
    eprintln!("Error: pihash-repl takes no arguments; pipe or type lines on stdin");
    return ExitCode::FAILURE;
  }

  match run() {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("Error: {err}");
      ExitCode::FAILURE
    }
  }
}
