//! String fingerprints for translation ids.
//!
//! A fingerprint is a signed 64-bit digest of a string. Ids are written with
//! the sign bit cleared so they are always non-negative.
//!
//! This module provides:
//! - `Fingerprinter`: maps a string to a 64-bit fingerprint
//! - `mask()`: clears the sign bit
//! - `write_strings_file()`: writes the old/new strings file
//! - `message_id_text()` / `message_id()`: ids for messages with placeholders

mod message;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::{debug, info};

use crate::consts::FINGERPRINT_MASK;

pub use message::{message_id, message_id_text};

#[derive(Debug, Error)]
pub enum FingerprintError {
  #[error("failed to write {}: {source}", path.display())]
  Write { path: PathBuf, source: std::io::Error },
}

/// Produces a deterministic 64-bit fingerprint of a string.
pub trait Fingerprinter {
  fn fingerprint(&self, text: &str) -> i64;
}

/// Fingerprints a string as the first 8 bytes of its SHA-256 digest, read
/// big-endian.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Fingerprinter;

impl Fingerprinter for Sha256Fingerprinter {
  fn fingerprint(&self, text: &str) -> i64 {
    let digest = Sha256::digest(text.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    i64::from_be_bytes(prefix)
  }
}

/// Clear the sign bit of a fingerprint.
pub fn mask(fingerprint: i64) -> i64 {
  fingerprint & FINGERPRINT_MASK
}

/// One `"<id> - <text>\r\n"` line of the strings file.
pub fn format_line(fingerprinter: &impl Fingerprinter, text: &str) -> String {
  format!("{} - {}\r\n", mask(fingerprinter.fingerprint(text)), text)
}

/// Write the fingerprints of `new` then `old` to `path`, replacing any
/// previous contents.
pub fn write_strings_file(
  path: &Path,
  fingerprinter: &impl Fingerprinter,
  old: &str,
  new: &str,
) -> Result<(), FingerprintError> {
  let write_err = |source| FingerprintError::Write {
    path: path.to_path_buf(),
    source,
  };

  let file = File::create(path).map_err(write_err)?;
  let mut writer = BufWriter::new(file);

  for text in [new, old] {
    let line = format_line(fingerprinter, text);
    debug!(line = %line.trim_end(), "writing fingerprint");
    writer.write_all(line.as_bytes()).map_err(write_err)?;
  }
  writer.flush().map_err(write_err)?;

  info!(path = %path.display(), "wrote strings file");
  Ok(())
}
