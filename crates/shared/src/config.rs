//! Configuration for host binaries built on the catalog.
//!
//! The catalog itself reads no configuration; this covers the knobs a host
//! needs to present lookups (log filtering and output format).

use serde::Deserialize;

/// Host configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LookupConfig {
    /// `tracing` filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// How lookup results are rendered.
    #[serde(default)]
    pub output: OutputFormat,
}

/// Output format for lookup results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per record.
    #[default]
    Text,
    /// JSON documents.
    Json,
}

fn default_log_filter() -> String {
    "coinage=info".to_string()
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            output: OutputFormat::default(),
        }
    }
}

impl LookupConfig {
    /// Loads configuration from config files and the environment.
    ///
    /// Sources, later ones overriding earlier ones:
    /// - `config/default.toml` (optional)
    /// - `config/{RUN_MODE}.toml` (optional, `RUN_MODE` defaults to "development")
    /// - `COINAGE__*` environment variables (e.g. `COINAGE__OUTPUT=json`)
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or a value is invalid.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("COINAGE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
