/// Name of the keyfreq log inside the user's home directory
pub const DEFAULT_INPUT_FILENAME: &str = ".emacs.keyfreq";

/// Environment variable holding the home directory
pub const HOME_ENV: &str = "HOME";

/// Environment variable holding the env_logger filter directives
pub const LOG_FILTER_ENV: &str = "KEYFREQ_LOG";

/// Filter used when `KEYFREQ_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Environment variable overriding the number of decimals printed for percentages
pub const PERCENT_PRECISION_ENV: &str = "KEYFREQ_PERCENT_PRECISION";

/// Decimals printed for percentages, matching a plain `%f`
pub const DEFAULT_PERCENT_PRECISION: usize = 6;

/// Upper bound accepted from `KEYFREQ_PERCENT_PRECISION`
pub const MAX_PERCENT_PRECISION: usize = 17;

/// Valid values of `-mode`
pub const OUTPUT_MODE_NAMES: [&str; 3] = ["all", "modes", "functions"];

/// Valid values of `-format`
pub const REPORT_FORMAT_NAMES: [&str; 2] = ["csv", "json"];

/// Long flags that are also accepted with a single leading dash
pub const SINGLE_DASH_LONG_FLAGS: [&str; 3] = ["mode", "format", "input"];
