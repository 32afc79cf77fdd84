//! Builder directory.
//!
//! [`BuildBot`] hands out [`Builder`] handles by name. Lookups never fail:
//! the directory has no backing store, so every name resolves. Builders and
//! builds are cheap borrowed views that derive their URLs on demand.

mod build;
mod builder;

pub use build::Build;
pub use builder::Builder;

use crate::config::Config;
use crate::consts::DEFAULT_BASE_URL;
use crate::provider::{MockResultsProvider, ResultsProvider};

pub struct BuildBot {
  base_url: String,
  provider: Box<dyn ResultsProvider>,
}

impl Default for BuildBot {
  fn default() -> Self {
    Self::new()
  }
}

impl BuildBot {
  /// Directory rooted at the example host, serving canned results.
  pub fn new() -> Self {
    Self {
      base_url: DEFAULT_BASE_URL.to_string(),
      provider: Box::new(MockResultsProvider),
    }
  }

  pub fn from_config(config: &Config) -> Self {
    Self::new().with_base_url(&config.base_url)
  }

  pub fn with_base_url(mut self, base_url: &str) -> Self {
    self.base_url = base_url.trim_end_matches('/').to_string();
    self
  }

  pub fn with_provider(mut self, provider: impl ResultsProvider + 'static) -> Self {
    self.provider = Box::new(provider);
    self
  }

  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  pub fn builder_with_name(&self, name: &str) -> Builder<'_> {
    Builder::new(self, name)
  }

  pub(crate) fn provider(&self) -> &dyn ResultsProvider {
    self.provider.as_ref()
  }
}
