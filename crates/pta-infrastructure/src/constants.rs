//! Infrastructure layer constants

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "PTA";

/// Default configuration file name looked up in the working directory
pub const DEFAULT_CONFIG_FILENAME: &str = "pta.toml";

/// Environment variable consulted for log filtering directives
pub const LOG_FILTER_ENV: &str = "PTA_LOG";

/// Default log level when none is configured
pub const DEFAULT_LOG_LEVEL: &str = "info";
