//! Implementation of the `rbot fingerprint` and `rbot message-id` commands.

use std::path::Path;

use anyhow::{Context, Result};

use resultbot_lib::fingerprint::{Sha256Fingerprinter, message_id, write_strings_file};

use crate::output::print_success;

/// Write the strings file for `old` and `new` to `output`.
pub fn cmd_fingerprint(old: &str, new: &str, output: &Path) -> Result<()> {
  write_strings_file(output, &Sha256Fingerprinter, old, new).context("Failed to write strings file")?;
  print_success(&format!("Wrote fingerprints to {}", output.display()));
  Ok(())
}

pub fn cmd_message_id(message: &str) {
  println!("{}", message_id(&Sha256Fingerprinter, message));
}
