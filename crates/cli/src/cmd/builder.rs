//! Implementation of the `rbot builder` command.

use anyhow::Result;

use resultbot_lib::buildbot::BuildBot;
use resultbot_lib::config::Config;

use crate::output::{OutputFormat, print_json, print_stat, print_success};

/// Print the results URLs of builder `name`, and of build `build` when given.
pub fn cmd_builder(name: &str, build: Option<i64>, format: OutputFormat) -> Result<()> {
  let bot = BuildBot::from_config(&Config::from_env());
  let builder = bot.builder_with_name(name);
  let build = build.map(|number| builder.build(number));

  if format.is_json() {
    let mut json_output = serde_json::json!({
      "name": builder.name(),
      "results_url": builder.results_url(),
      "latest_results_url": builder.latest_results_url(),
    });
    if let Some(build) = &build {
      json_output["build"] = serde_json::json!({
        "number": build.number(),
        "results_url": build.results_url(),
      });
    }
    print_json(&json_output)?;
  } else {
    print_success(&format!("Builder: {}", builder.name()));
    print_stat("Results", &builder.results_url());
    print_stat("Latest results", &builder.latest_results_url());
    if let Some(build) = &build {
      print_stat(&format!("Build {}", build.number()), &build.results_url());
    }
  }

  Ok(())
}
