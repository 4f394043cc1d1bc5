use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Seed data error ({path}): {message}")]
    SeedError { path: String, message: String },

    #[error("Version metadata error ({path}): {message}")]
    VersionError { path: String, message: String },

    #[error("Catalog query failed: {message}")]
    QueryError { message: String },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Data,
    Storage,
    Network,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CatalogError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::ConfigError { .. }
            | CatalogError::ConfigValidationError { .. }
            | CatalogError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            CatalogError::SeedError { .. } | CatalogError::VersionError { .. } => {
                ErrorCategory::Data
            }
            CatalogError::IoError(_) | CatalogError::QueryError { .. } => ErrorCategory::Storage,
            CatalogError::ServerError { .. } => ErrorCategory::Network,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CatalogError::QueryError { .. } => ErrorSeverity::Medium,
            CatalogError::ConfigError { .. }
            | CatalogError::ConfigValidationError { .. }
            | CatalogError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            CatalogError::IoError(_)
            | CatalogError::SeedError { .. }
            | CatalogError::VersionError { .. }
            | CatalogError::ServerError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the command line flags and the TOML configuration file"
            }
            ErrorCategory::Data => {
                "Make sure the seed and version files exist and contain valid JSON"
            }
            ErrorCategory::Storage => "Check file permissions and available disk space",
            ErrorCategory::Network => "Make sure the bind address is free and reachable",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::SeedError { path, .. } => {
                format!("Could not load the exercise seed data from {}", path)
            }
            CatalogError::VersionError { path, .. } => {
                format!("Could not load version information from {}", path)
            }
            other => other.to_string(),
        }
    }

    /// 對應到程序結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}
