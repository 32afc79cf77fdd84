//! Runtime configuration resolved from the environment.
//!
//! Every setting has a default, so a bare environment yields a working
//! configuration that points at the example results host.

use std::time::Duration;

use tracing::warn;

use crate::consts::{BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECS, HTTP_TIMEOUT_ENV};

/// Settings shared by the builder directory and the HTTP provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  /// Base URL builder results URLs are formed from, without a trailing `/`.
  pub base_url: String,
  /// Timeout applied to each HTTP results request.
  pub http_timeout: Duration,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      base_url: DEFAULT_BASE_URL.to_string(),
      http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
    }
  }
}

impl Config {
  /// Resolve configuration from `RESULTBOT_*` environment variables.
  ///
  /// Unset or empty variables keep their defaults. A timeout that is not a
  /// whole number of seconds is ignored with a warning.
  pub fn from_env() -> Self {
    let mut config = Self::default();

    if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
      let trimmed = base_url.trim().trim_end_matches('/');
      if !trimmed.is_empty() {
        config.base_url = trimmed.to_string();
      }
    }

    if let Ok(raw) = std::env::var(HTTP_TIMEOUT_ENV) {
      match raw.trim().parse::<u64>() {
        Ok(secs) => config.http_timeout = Duration::from_secs(secs),
        Err(_) => warn!(var = HTTP_TIMEOUT_ENV, value = %raw, "ignoring invalid timeout"),
      }
    }

    config
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_without_env() {
    temp_env::with_vars_unset([BASE_URL_ENV, HTTP_TIMEOUT_ENV], || {
      assert_eq!(Config::from_env(), Config::default());
    });
  }

  #[test]
  fn base_url_trailing_slash_trimmed() {
    temp_env::with_var(BASE_URL_ENV, Some("https://ci.example.org/"), || {
      assert_eq!(Config::from_env().base_url, "https://ci.example.org");
    });
  }

  #[test]
  fn empty_base_url_keeps_default() {
    temp_env::with_var(BASE_URL_ENV, Some("  "), || {
      assert_eq!(Config::from_env().base_url, DEFAULT_BASE_URL);
    });
  }

  #[test]
  fn timeout_parsed() {
    temp_env::with_var(HTTP_TIMEOUT_ENV, Some("5"), || {
      assert_eq!(Config::from_env().http_timeout, Duration::from_secs(5));
    });
  }

  #[test]
  fn invalid_timeout_falls_back() {
    temp_env::with_var(HTTP_TIMEOUT_ENV, Some("soon"), || {
      assert_eq!(
        Config::from_env().http_timeout,
        Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS)
      );
    });
  }
}
