use std::sync::LazyLock;

use regex::Regex;

use super::{Fingerprinter, mask};

static PLACEHOLDER: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r#"(?s)<ph\s+name="([^"]*)"\s*>.*?</ph>"#).expect("placeholder pattern is valid"));

/// Text an id is computed from: each `<ph name="NAME">...</ph>` placeholder
/// becomes `NAME`. Everything else, line breaks included, is kept.
pub fn message_id_text(message: &str) -> String {
  PLACEHOLDER.replace_all(message, "$1").into_owned()
}

/// Masked fingerprint of [`message_id_text`].
pub fn message_id(fingerprinter: &impl Fingerprinter, message: &str) -> i64 {
  mask(fingerprinter.fingerprint(&message_id_text(message)))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::fingerprint::Sha256Fingerprinter;

  #[test]
  fn placeholders_replaced_by_name() {
    let message = r#"I'll buy a <ph name="WAVELENGTH">%d<ex>200</ex></ph> nm laser at <ph name="STORE_NAME">%s<ex>the grocery store</ex></ph>."#;
    assert_eq!(message_id_text(message), "I'll buy a WAVELENGTH nm laser at STORE_NAME.");
  }

  #[test]
  fn line_breaks_kept() {
    let message = "She gathered\nwood, charcoal, and\na sledge hammer.";
    assert_eq!(message_id_text(message), message);
  }

  #[test]
  fn placeholder_content_may_span_lines() {
    assert_eq!(message_id_text("a <ph name=\"X\">1\n2</ph> b"), "a X b");
  }

  #[test]
  fn message_id_matches_fingerprint_of_id_text() {
    let fp = Sha256Fingerprinter;
    let message = r#"Hello <ph name="USER">%s</ph>"#;
    assert_eq!(message_id(&fp, message), mask(fp.fingerprint("Hello USER")));
  }
}
