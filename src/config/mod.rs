pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_bind_address, validate_optional_path, validate_origin, validate_path, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "*";
pub const DEFAULT_BASE_DIR: &str = ".";

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "fitness-catalog")]
#[command(about = "Read-only exercise catalog HTTP service")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Socket address to listen on
    #[arg(long)]
    pub bind: Option<String>,

    /// CORS origin to allow, or "*"
    #[arg(long)]
    pub allowed_origin: Option<String>,

    /// Directory that relative seed and version paths resolve against
    #[arg(long)]
    pub base_dir: Option<String>,

    /// JSON seed file; the built-in exercise list is used when omitted
    #[arg(long)]
    pub seed_path: Option<String>,

    /// JSON version file; build metadata is used when omitted
    #[arg(long)]
    pub version_path: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

/// Effective settings after merging the TOML file with command line flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub bind: String,
    pub allowed_origin: String,
    pub base_dir: String,
    pub seed_path: Option<String>,
    pub version_path: Option<String>,
    pub verbose: bool,
    pub json_logs: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
            base_dir: DEFAULT_BASE_DIR.to_string(),
            seed_path: None,
            version_path: None,
            verbose: false,
            json_logs: false,
        }
    }
}

impl ServiceConfig {
    /// 讀取 `--config` 指定的檔案，再套用命令列覆蓋
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        Ok(Self::merge(file, cli))
    }

    pub fn merge(file: TomlConfig, cli: &CliConfig) -> Self {
        let defaults = Self::default();
        Self {
            bind: cli
                .bind
                .clone()
                .or(file.server.bind)
                .unwrap_or(defaults.bind),
            allowed_origin: cli
                .allowed_origin
                .clone()
                .or(file.server.allowed_origin)
                .unwrap_or(defaults.allowed_origin),
            base_dir: cli
                .base_dir
                .clone()
                .or(file.data.base_dir)
                .unwrap_or(defaults.base_dir),
            seed_path: cli.seed_path.clone().or(file.data.seed_path),
            version_path: cli.version_path.clone().or(file.data.version_path),
            verbose: cli.verbose || file.logging.verbose.unwrap_or(false),
            json_logs: cli.json_logs || file.logging.json.unwrap_or(false),
        }
    }
}

impl ConfigProvider for ServiceConfig {
    fn bind_address(&self) -> &str {
        &self.bind
    }

    fn allowed_origin(&self) -> &str {
        &self.allowed_origin
    }

    fn seed_path(&self) -> Option<&str> {
        self.seed_path.as_deref()
    }

    fn version_path(&self) -> Option<&str> {
        self.version_path.as_deref()
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        validate_bind_address("server.bind", self.bind_address())?;
        validate_origin("server.allowed_origin", self.allowed_origin())?;
        validate_path("data.base_dir", &self.base_dir)?;
        validate_optional_path("data.seed_path", self.seed_path.as_deref())?;
        validate_optional_path("data.version_path", self.version_path.as_deref())?;
        Ok(())
    }
}
