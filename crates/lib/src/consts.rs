pub const APP_NAME: &str = "resultbot";

/// Base URL used for builder results when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://example.com";

/// Environment variable overriding [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "RESULTBOT_BASE_URL";

/// Environment variable setting the HTTP provider timeout, in seconds.
pub const HTTP_TIMEOUT_ENV: &str = "RESULTBOT_HTTP_TIMEOUT_SECS";

pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Clears the sign bit of a 64-bit fingerprint.
pub const FINGERPRINT_MASK: i64 = 0x7fff_ffff_ffff_ffff;

pub const DEFAULT_STRINGS_FILE: &str = "strings.txt";
pub const DEFAULT_OLD_STRING: &str = "old string";
pub const DEFAULT_NEW_STRING: &str = "new string";

/// Prefix of the JSONP envelope around full results payloads.
pub const RESULTS_JSONP_PREFIX: &str = "ADD_RESULTS(";
pub const RESULTS_JSONP_SUFFIX: &str = ");";
