//! Layout-test results parsing.
//!
//! A results payload is JSON, optionally wrapped in an `ADD_RESULTS(...);`
//! envelope. Test entries live in a trie under `tests`: nested objects keyed by
//! path component, where any object carrying an `actual` key is a test.

mod example;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::consts::{RESULTS_JSONP_PREFIX, RESULTS_JSONP_SUFFIX};

pub use example::EXAMPLE_FULL_RESULTS;

/// Errors that can occur while obtaining or parsing results.
#[derive(Debug, Error)]
pub enum ResultsError {
  #[error("results payload is empty")]
  EmptyPayload,

  #[error("failed to parse results payload: {0}")]
  Parse(#[from] serde_json::Error),

  #[error("invalid entry for test {name}: {source}")]
  InvalidEntry { name: String, source: serde_json::Error },

  #[error("fetch failed for {url}: {message}")]
  FetchFailed { url: String, message: String },
}

/// Outcome of a single layout test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutTestResult {
  name: String,
  expected: Vec<String>,
  actual: Vec<String>,
  is_unexpected: bool,
  has_stderr: bool,
}

impl LayoutTestResult {
  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn expected_results(&self) -> &[String] {
    &self.expected
  }

  /// Results of every attempt, in run order (retries come last).
  pub fn actual_results(&self) -> &[String] {
    &self.actual
  }

  pub fn did_pass(&self) -> bool {
    self.actual.iter().any(|r| r == "PASS")
  }

  pub fn did_run_as_expected(&self) -> bool {
    !self.is_unexpected
  }

  pub fn last_retried_result(&self) -> Option<&str> {
    self.actual.last().map(String::as_str)
  }

  pub fn has_stderr(&self) -> bool {
    self.has_stderr
  }
}

#[derive(Deserialize)]
struct RawTestEntry {
  #[serde(default)]
  expected: String,
  actual: String,
  #[serde(default)]
  is_unexpected: bool,
  #[serde(default)]
  has_stderr: bool,
}

#[derive(Deserialize)]
struct RawResults {
  #[serde(default)]
  tests: Map<String, Value>,
  #[serde(default)]
  interrupted: bool,
  builder_name: Option<String>,
  chromium_revision: Option<String>,
  num_regressions: Option<u64>,
  num_passes: Option<u64>,
  num_flaky: Option<u64>,
  skipped: Option<u64>,
  fixable: Option<u64>,
  version: Option<u64>,
  layout_tests_dir: Option<String>,
}

/// Parsed results of one layout-test run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutTestResults {
  tests: Vec<LayoutTestResult>,
  interrupted: bool,
  builder_name: Option<String>,
  chromium_revision: Option<String>,
  num_regressions: Option<u64>,
  num_passes: Option<u64>,
  num_flaky: Option<u64>,
  skipped: Option<u64>,
  fixable: Option<u64>,
  version: Option<u64>,
  layout_tests_dir: Option<String>,
}

impl LayoutTestResults {
  /// Parse a results payload, with or without the JSONP envelope.
  pub fn from_payload(payload: &str) -> Result<Self, ResultsError> {
    let content = strip_json_wrapper(payload);
    if content.is_empty() {
      return Err(ResultsError::EmptyPayload);
    }

    let value: Value = serde_json::from_str(content)?;
    if value.as_object().is_some_and(Map::is_empty) {
      return Err(ResultsError::EmptyPayload);
    }

    let raw: RawResults = serde_json::from_value(value)?;
    let mut tests = Vec::new();
    flatten_tests(&raw.tests, "", &mut tests)?;
    tests.sort_by(|a, b| a.name.cmp(&b.name));

    debug!(tests = tests.len(), builder = ?raw.builder_name, "parsed layout test results");

    Ok(Self {
      tests,
      interrupted: raw.interrupted,
      builder_name: raw.builder_name,
      chromium_revision: raw.chromium_revision,
      num_regressions: raw.num_regressions,
      num_passes: raw.num_passes,
      num_flaky: raw.num_flaky,
      skipped: raw.skipped,
      fixable: raw.fixable,
      version: raw.version,
      layout_tests_dir: raw.layout_tests_dir,
    })
  }

  /// The canned example results.
  pub fn example() -> Result<Self, ResultsError> {
    Self::from_payload(EXAMPLE_FULL_RESULTS)
  }

  /// All tests, sorted by name.
  pub fn tests(&self) -> &[LayoutTestResult] {
    &self.tests
  }

  pub fn result_for_test(&self, name: &str) -> Option<&LayoutTestResult> {
    self
      .tests
      .binary_search_by(|t| t.name.as_str().cmp(name))
      .ok()
      .map(|idx| &self.tests[idx])
  }

  pub fn didnt_run_as_expected_results(&self) -> Vec<&LayoutTestResult> {
    self.tests.iter().filter(|t| !t.did_run_as_expected()).collect()
  }

  pub fn run_was_interrupted(&self) -> bool {
    self.interrupted
  }

  pub fn builder_name(&self) -> Option<&str> {
    self.builder_name.as_deref()
  }

  /// Revision the run was built at, when it is a plain number.
  pub fn chromium_revision(&self) -> Option<u64> {
    self.chromium_revision.as_deref().and_then(|r| r.trim().parse().ok())
  }

  pub fn num_regressions(&self) -> Option<u64> {
    self.num_regressions
  }

  pub fn num_passes(&self) -> Option<u64> {
    self.num_passes
  }

  pub fn num_flaky(&self) -> Option<u64> {
    self.num_flaky
  }

  pub fn skipped(&self) -> Option<u64> {
    self.skipped
  }

  pub fn fixable(&self) -> Option<u64> {
    self.fixable
  }

  pub fn version(&self) -> Option<u64> {
    self.version
  }

  pub fn layout_tests_dir(&self) -> Option<&str> {
    self.layout_tests_dir.as_deref()
  }
}

/// Remove the `ADD_RESULTS(...);` envelope if present.
fn strip_json_wrapper(payload: &str) -> &str {
  let trimmed = payload.trim();
  match trimmed
    .strip_prefix(RESULTS_JSONP_PREFIX)
    .and_then(|rest| rest.strip_suffix(RESULTS_JSONP_SUFFIX))
  {
    Some(inner) => inner.trim(),
    None => trimmed,
  }
}

fn flatten_tests(
  node: &Map<String, Value>,
  prefix: &str,
  out: &mut Vec<LayoutTestResult>,
) -> Result<(), ResultsError> {
  for (key, value) in node {
    let Value::Object(child) = value else {
      continue;
    };

    let name = if prefix.is_empty() {
      key.clone()
    } else {
      format!("{}/{}", prefix, key)
    };

    if child.contains_key("actual") {
      let entry: RawTestEntry = serde_json::from_value(value.clone()).map_err(|e| ResultsError::InvalidEntry {
        name: name.clone(),
        source: e,
      })?;
      out.push(LayoutTestResult {
        name,
        expected: split_tokens(&entry.expected),
        actual: split_tokens(&entry.actual),
        is_unexpected: entry.is_unexpected,
        has_stderr: entry.has_stderr,
      });
    } else {
      flatten_tests(child, &name, out)?;
    }
  }
  Ok(())
}

fn split_tokens(s: &str) -> Vec<String> {
  s.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn example_parses() {
    let results = LayoutTestResults::example().unwrap();
    assert_eq!(results.tests().len(), 6);
    assert_eq!(results.builder_name(), Some("mock_builder_name"));
    assert_eq!(results.chromium_revision(), Some(1234));
    assert_eq!(results.num_regressions(), Some(15));
    assert_eq!(results.skipped(), Some(450));
    assert!(!results.run_was_interrupted());
  }

  #[test]
  fn trie_names_joined_with_slash() {
    let results = LayoutTestResults::example().unwrap();
    let names: Vec<_> = results.tests().iter().map(|t| t.name()).collect();
    assert!(names.contains(&"fast/dom/prototype-taco.html"));
    assert!(names.contains(&"svg/dynamic-updates/SVGFEDropShadowElement-dom-stdDeviation-attr.html"));

    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
  }

  #[test]
  fn result_queries() {
    let results = LayoutTestResults::example().unwrap();

    let taco = results.result_for_test("fast/dom/prototype-taco.html").unwrap();
    assert!(taco.did_pass());
    assert!(!taco.did_run_as_expected());
    assert_eq!(taco.last_retried_result(), Some("TEXT"));

    let chocolate = results.result_for_test("fast/dom/prototype-chocolate.html").unwrap();
    assert!(!chocolate.did_pass());
    assert!(chocolate.did_run_as_expected());
    assert_eq!(chocolate.expected_results(), ["FAIL"]);

    let svg = results
      .result_for_test("svg/dynamic-updates/SVGFEDropShadowElement-dom-stdDeviation-attr.html")
      .unwrap();
    assert!(svg.has_stderr());

    assert!(results.result_for_test("fast/dom/missing.html").is_none());
  }

  #[test]
  fn didnt_run_as_expected_excludes_expected_failures() {
    let results = LayoutTestResults::example().unwrap();
    let unexpected = results.didnt_run_as_expected_results();
    assert_eq!(unexpected.len(), 5);
    assert!(unexpected.iter().all(|t| t.name() != "fast/dom/prototype-chocolate.html"));
  }

  #[test]
  fn unwrapped_json_accepted() {
    let results = LayoutTestResults::from_payload(r#"{"tests": {"a.html": {"expected": "PASS", "actual": "PASS"}}, "interrupted": true}"#).unwrap();
    assert_eq!(results.tests().len(), 1);
    assert!(results.run_was_interrupted());
    assert!(results.builder_name().is_none());
  }

  #[test]
  fn non_numeric_revision_is_none() {
    let results = LayoutTestResults::from_payload(r#"{"chromium_revision": "abc123"}"#).unwrap();
    assert_eq!(results.chromium_revision(), None);
    assert!(results.tests().is_empty());
  }

  #[test]
  fn empty_payloads_rejected() {
    assert!(matches!(LayoutTestResults::from_payload(""), Err(ResultsError::EmptyPayload)));
    assert!(matches!(LayoutTestResults::from_payload("  \n"), Err(ResultsError::EmptyPayload)));
    assert!(matches!(LayoutTestResults::from_payload("ADD_RESULTS();"), Err(ResultsError::EmptyPayload)));
    assert!(matches!(LayoutTestResults::from_payload("{}"), Err(ResultsError::EmptyPayload)));
  }

  #[test]
  fn invalid_json_rejected() {
    assert!(matches!(
      LayoutTestResults::from_payload("ADD_RESULTS({not json});"),
      Err(ResultsError::Parse(_))
    ));
  }

  #[test]
  fn malformed_entry_reports_test_name() {
    let err = LayoutTestResults::from_payload(r#"{"tests": {"dir": {"t.html": {"actual": 5}}}}"#).unwrap_err();
    match err {
      ResultsError::InvalidEntry { name, .. } => assert_eq!(name, "dir/t.html"),
      other => panic!("unexpected error: {}", other),
    }
  }
}
