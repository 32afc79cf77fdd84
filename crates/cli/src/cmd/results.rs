//! Implementation of the `rbot results` command.
//!
//! Fetches a builder's layout-test results and prints a summary followed by
//! the tests that did not run as expected.

use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Stream};
use tracing::debug;

use resultbot_lib::buildbot::BuildBot;
use resultbot_lib::config::Config;
use resultbot_lib::provider::HttpResultsProvider;
use resultbot_lib::results::LayoutTestResults;

use crate::output::{OutputFormat, print_info, print_json, print_stat, print_success, print_warning, symbols};

pub fn cmd_results(name: &str, url: Option<&str>, http: bool, format: OutputFormat, verbose: bool) -> Result<()> {
  let config = Config::from_env();
  let mut bot = BuildBot::from_config(&config);
  if http {
    let provider = HttpResultsProvider::from_config(&config).context("Failed to set up HTTP provider")?;
    bot = bot.with_provider(provider);
  }

  let builder = bot.builder_with_name(name);
  let url = url.map(str::to_string).unwrap_or_else(|| builder.latest_results_url());
  debug!(builder = %name, url = %url, http, "resolved results url");
  let results = builder
    .fetch_results(&url)
    .with_context(|| format!("Failed to fetch results for builder '{}'", name))?;

  if format.is_json() {
    let json_output = serde_json::json!({
      "builder": name,
      "url": url,
      "results": results,
    });
    return print_json(&json_output);
  }

  print_summary(name, &url, &results);
  print_unexpected(&results, verbose);
  Ok(())
}

fn print_summary(name: &str, url: &str, results: &LayoutTestResults) {
  print_success(&format!("Results for {}", name));
  print_stat("URL", url);
  if let Some(reported) = results.builder_name() {
    print_stat("Reported builder", reported);
  }
  if let Some(revision) = results.chromium_revision() {
    print_stat("Revision", &revision.to_string());
  }
  print_stat("Tests", &results.tests().len().to_string());
  if let Some(count) = results.num_regressions() {
    print_stat("Regressions", &count.to_string());
  }
  if let Some(count) = results.num_passes() {
    print_stat("Passes", &count.to_string());
  }
  if let Some(count) = results.num_flaky() {
    print_stat("Flaky", &count.to_string());
  }
  if let Some(count) = results.skipped() {
    print_stat("Skipped", &count.to_string());
  }
  if results.run_was_interrupted() {
    print_warning("Run was interrupted");
  }
}

fn print_unexpected(results: &LayoutTestResults, verbose: bool) {
  let unexpected = results.didnt_run_as_expected_results();
  println!();
  if unexpected.is_empty() {
    print_info("All tests ran as expected.");
    return;
  }

  println!("Unexpected results ({}):", unexpected.len());
  for test in unexpected {
    let symbol = if test.did_pass() {
      symbols::TILDE.if_supports_color(Stream::Stdout, |s| s.yellow()).to_string()
    } else {
      symbols::ERROR.if_supports_color(Stream::Stdout, |s| s.red()).to_string()
    };
    println!(
      "  {} {} (expected {}, actual {})",
      symbol,
      test.name(),
      test.expected_results().join(" "),
      test.actual_results().join(" ")
    );
    if verbose && test.has_stderr() {
      println!("      {}", "has stderr output".if_supports_color(Stream::Stdout, |s| s.dimmed()));
    }
  }
}
