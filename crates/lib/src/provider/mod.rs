//! Sources of layout-test results.
//!
//! Builders never fetch results themselves; they hand a URL to a
//! [`ResultsProvider`]. [`MockResultsProvider`] answers every URL with the
//! canned example payload, [`HttpResultsProvider`] downloads the URL.

mod http;
mod mock;

pub use http::HttpResultsProvider;
pub use mock::MockResultsProvider;

use crate::results::{LayoutTestResults, ResultsError};

/// Fetches and parses the results found at a URL.
pub trait ResultsProvider {
  fn fetch_results(&self, url: &str) -> Result<LayoutTestResults, ResultsError>;
}
