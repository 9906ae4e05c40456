//! Application configuration management.
//!
//! Configuration is loaded from a YAML file with environment variable overrides. The configuration
//! file path defaults to `config.yaml` but can be specified via `-f` flag or `GZRELAY_CONFIG`
//! environment variable. Variables prefixed with `GZRELAY_` override YAML values; nested values
//! use double underscores, e.g. `GZRELAY_STORE__API_KEY=pat123` sets `store.api_key`.
//!
//! The store credentials (`store.api_key`, `store.base_id`, `store.table_name`) are deliberately
//! optional at load time: their absence is reported per-request in the webhook validation
//! response, alongside missing body fields, rather than preventing startup. This keeps the
//! liveness probe available even on a misconfigured deployment.

use clap::Parser;
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Simple CLI args - just for specifying config file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file
    #[arg(short = 'f', long, env = "GZRELAY_CONFIG", default_value = "config.yaml")]
    pub config: String,

    /// Validate configuration and exit without starting the server.
    /// Useful for CI/CD pipelines to catch config errors before deployment.
    #[arg(long)]
    pub validate: bool,
}

/// Main application configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// HTTP server host to bind to (e.g., "0.0.0.0" for all interfaces)
    pub host: String,
    /// HTTP server port to bind to
    pub port: u16,
    /// Timeout applied to every outbound HTTP call (fetch, upload, record update)
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,
    /// Tabular record store (Airtable-style REST API) settings
    pub store: StoreConfig,
    /// Anonymous file-host upload settings
    pub upload: UploadConfig,
}

/// Tabular record store configuration.
///
/// Credentials are optional so that a missing value surfaces in the webhook
/// validation response instead of failing startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Base URL of the record store REST API
    pub api_url: Url,
    /// Bearer token for the store API
    /// Set via `GZRELAY_STORE__API_KEY` rather than the YAML file.
    pub api_key: Option<String>,
    /// Base identifier the target table lives in
    pub base_id: Option<String>,
    /// Name of the table containing the records to update
    pub table_name: Option<String>,
    /// Attachment-typed field that receives the compressed file link
    pub attachment_field: String,
}

/// Anonymous file-host upload configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct UploadConfig {
    /// Multipart upload endpoint of the file host
    pub endpoint: Url,
    /// Expiry hint sent with each upload ("1d" = 1 day or 1 download)
    pub expires: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            request_timeout: Duration::from_secs(30),
            store: StoreConfig::default(),
            upload: UploadConfig::default(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            api_url: Url::parse("https://api.airtable.com/v0").expect("valid default store URL"),
            api_key: None,
            base_id: None,
            table_name: None,
            attachment_field: "G-Zipped File".to_string(),
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse("https://api.file.io/v2/files").expect("valid default upload URL"),
            expires: "1d".to_string(),
        }
    }
}

impl Config {
    pub fn load(args: &Args) -> Result<Self, figment::Error> {
        Self::figment(args).extract()
    }

    fn figment(args: &Args) -> Figment {
        Figment::new()
            .merge(Yaml::file(&args.config))
            // GZRELAY_CONFIG names the file path, not a config key
            .merge(Env::prefixed("GZRELAY_").split("__").ignore(&["config"]))
    }

    /// Address for the HTTP server to bind to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
