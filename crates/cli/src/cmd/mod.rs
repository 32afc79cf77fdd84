mod builder;
mod fingerprint;
mod info;
mod results;

pub use builder::cmd_builder;
pub use fingerprint::{cmd_fingerprint, cmd_message_id};
pub use info::cmd_info;
pub use results::cmd_results;
