use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::config::Config;
use crate::results::{LayoutTestResults, ResultsError};

use super::ResultsProvider;

/// Downloads results over HTTP and parses the body.
#[derive(Debug, Clone)]
pub struct HttpResultsProvider {
  client: Client,
}

impl HttpResultsProvider {
  pub fn new(timeout: Duration) -> Result<Self, ResultsError> {
    let client = Client::builder()
      .timeout(timeout)
      .build()
      .map_err(|e| ResultsError::FetchFailed {
        url: String::new(),
        message: format!("failed to build HTTP client: {}", e),
      })?;
    Ok(Self { client })
  }

  pub fn from_config(config: &Config) -> Result<Self, ResultsError> {
    Self::new(config.http_timeout)
  }
}

impl ResultsProvider for HttpResultsProvider {
  fn fetch_results(&self, url: &str) -> Result<LayoutTestResults, ResultsError> {
    info!(url = %url, "fetching results");

    let fetch_failed = |message: String| ResultsError::FetchFailed {
      url: url.to_string(),
      message,
    };

    let response = self.client.get(url).send().map_err(|e| fetch_failed(e.to_string()))?;

    if !response.status().is_success() {
      return Err(fetch_failed(format!("HTTP {}", response.status())));
    }

    let body = response.text().map_err(|e| fetch_failed(e.to_string()))?;
    debug!(url = %url, size = body.len(), "results downloaded");

    LayoutTestResults::from_payload(&body)
  }
}
