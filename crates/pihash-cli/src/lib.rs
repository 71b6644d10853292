//! Shared plumbing for the pihash command-line tools.
//!
//! The binaries in `src/bin/` stay thin: everything that formats output,
//! normalizes input lines, or scans for collisions lives here where it can be
//! unit tested.

/// Formats a 128-bit fingerprint as 32 lowercase hex digits, most-significant
/// word first. This is the digest format `pihash-digest` prints.
#[must_use]
pub fn hex128(hash: [u32; 4]) -> String {
  let [a, b, c, d] = hash;
  format!("{a:08x}{b:08x}{c:08x}{d:08x}")
}

/// Formats a 256-bit fingerprint as 64 lowercase hex digits, most-significant
/// word first.
#[must_use]
pub fn hex256(hash: [u64; 4]) -> String {
  let [a, b, c, d] = hash;
  format!("{a:016x}{b:016x}{c:016x}{d:016x}")
}

/// Strips one trailing line ending (`\n` or `\r\n`) from `line`, leaving all
/// other bytes untouched. Interior carriage returns are data, not framing.
#[must_use]
pub fn strip_line_ending(line: &[u8]) -> &[u8] {
  let line = line.strip_suffix(b"\n").unwrap_or(line);
  line.strip_suffix(b"\r").unwrap_or(line)
}

/// Hashes every word with `hash` and returns every unordered pair of words
/// that landed on the same value, together with that value. A k-way tie
/// expands to all `k * (k - 1) / 2` pairs.
///
/// The scan sorts a keyed copy and expands each run of equal keys, so the
/// expected no-collision case is `O(n log n)` rather than the quadratic
/// all-pairs comparison. Duplicate words in the input collide with
/// themselves; deduplicate first if that is not wanted.
pub fn find_collisions<'a, T: Ord + Copy>(
  words: &[&'a [u8]],
  hash: impl Fn(&[u8]) -> T,
) -> Vec<(&'a [u8], &'a [u8], T)> {
  let mut keyed: Vec<(T, &'a [u8])> = words.iter().map(|&word| (hash(word), word)).collect();
  keyed.sort_unstable();

  let mut found = Vec::new();
  for run in keyed.chunk_by(|a, b| a.0 == b.0) {
    for (index, &(key, first)) in run.iter().enumerate() {
      for &(_, second) in &run[index + 1..] {
        found.push((first, second, key));
      }
    }
  }
  found
}
