//! Configuration model loaded from external sources.

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Where the pages get their catalog data from.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// The remote catalog API at `api_base_url`.
    #[default]
    Http,
    /// The local fixture dataset only.
    Fixtures,
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
    pub api_base_url: String,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub source: SourceKind,
    /// JSON dataset replacing the built-in fixtures.
    #[serde(default)]
    pub fixtures_path: Option<String>,
    /// Serve movie details from the fixtures when the API lookup fails.
    #[serde(default)]
    pub fixture_fallback: bool,
    /// Show a notice on pages whose data could not be loaded.
    #[serde(default)]
    pub show_load_errors: bool,
}

fn default_assets_dir() -> String {
    "./assets".to_string()
}

impl ServerConfig {
    /// Loads `default.yaml` and the optional `{app_env}.yaml` from `dir`,
    /// then applies `APP_`-prefixed environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be parsed or required keys are missing.
    pub fn load_from(dir: &Path, app_env: &str) -> Result<Self, ConfigError> {
        Self::load_with_env(dir, app_env, Environment::with_prefix("APP"))
    }

    fn load_with_env(dir: &Path, app_env: &str, env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(dir.join("default.yaml")))
            .add_source(File::from(dir.join(format!("{app_env}.yaml"))).required(false))
            .add_source(env)
            .build()?
            .try_deserialize()
    }
}
