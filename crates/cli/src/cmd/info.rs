use resultbot_lib::config::Config;
use resultbot_lib::consts::APP_NAME;

use crate::output::print_stat;

pub fn cmd_info() {
  let config = Config::from_env();
  println!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));
  print_stat("Base URL", &config.base_url);
  print_stat("HTTP timeout", &format!("{}s", config.http_timeout.as_secs()));
}
