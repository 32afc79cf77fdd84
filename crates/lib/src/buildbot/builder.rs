use tracing::debug;

use crate::results::{LayoutTestResults, ResultsError};

use super::{Build, BuildBot};

/// A named producer of numbered builds.
pub struct Builder<'a> {
  name: String,
  bot: &'a BuildBot,
}

impl<'a> Builder<'a> {
  pub(super) fn new(bot: &'a BuildBot, name: &str) -> Self {
    Self {
      name: name.to_string(),
      bot,
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  /// Handle for build `number` of this builder. Any number is accepted.
  pub fn build(&self, number: i64) -> Build<'_> {
    Build::new(self, number)
  }

  pub fn results_url(&self) -> String {
    format!("{}/builders/{}/results", self.bot.base_url(), self.name)
  }

  pub fn latest_results_url(&self) -> String {
    format!(
      "{}/f/builders/{}/results/layout-test-results",
      self.bot.base_url(),
      self.name
    )
  }

  pub fn latest_results(&self) -> Result<LayoutTestResults, ResultsError> {
    self.fetch_results(&self.latest_results_url())
  }

  pub fn fetch_results(&self, url: &str) -> Result<LayoutTestResults, ResultsError> {
    debug!(builder = %self.name, url = %url, "fetching builder results");
    self.bot.provider().fetch_results(url)
  }
}
