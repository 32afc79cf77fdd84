mod cmd;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use resultbot_lib::consts::{DEFAULT_NEW_STRING, DEFAULT_OLD_STRING, DEFAULT_STRINGS_FILE};

use crate::cmd::{cmd_builder, cmd_fingerprint, cmd_info, cmd_message_id, cmd_results};
use crate::output::OutputFormat;

/// rbot - Layout-test results lookup and translation fingerprints
#[derive(Parser)]
#[command(name = "rbot")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Show the results URLs of a builder
  Builder {
    /// Builder name
    name: String,

    /// Also show the results URL of this build number
    #[arg(short, long, allow_negative_numbers = true)]
    build: Option<i64>,

    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,
  },

  /// Fetch and summarize a builder's latest layout-test results
  Results {
    /// Builder name
    name: String,

    /// Fetch this URL instead of the builder's latest results URL
    #[arg(long)]
    url: Option<String>,

    /// Fetch over HTTP instead of serving the canned example results
    #[arg(long)]
    http: bool,

    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,
  },

  /// Write fingerprints of an old and a new string to a file
  Fingerprint {
    #[arg(long, default_value = DEFAULT_OLD_STRING)]
    old: String,

    #[arg(long, default_value = DEFAULT_NEW_STRING)]
    new: String,

    /// Output file (overwritten)
    #[arg(short, long, default_value = DEFAULT_STRINGS_FILE)]
    output: PathBuf,
  },

  /// Print the translation id of a message
  MessageId {
    /// Message text, placeholders included
    message: String,
  },

  /// Show resolved configuration
  Info,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  match cli.command {
    Commands::Builder { name, build, format } => cmd_builder(&name, build, format),
    Commands::Results {
      name,
      url,
      http,
      format,
    } => cmd_results(&name, url.as_deref(), http, format, cli.verbose),
    Commands::Fingerprint { old, new, output } => cmd_fingerprint(&old, &new, &output),
    Commands::MessageId { message } => {
      cmd_message_id(&message);
      Ok(())
    }
    Commands::Info => {
      cmd_info();
      Ok(())
    }
  }
}
