use crate::utils::error::{CatalogError, Result};
use std::net::SocketAddr;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// CORS 來源：`*` 或絕對 http(s) URL
pub fn validate_origin(field_name: &str, origin: &str) -> Result<()> {
    if origin == "*" {
        return Ok(());
    }

    if origin.is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: origin.to_string(),
            reason: "Origin cannot be empty".to_string(),
        });
    }

    match Url::parse(origin) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CatalogError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: origin.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: origin.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_bind_address(field_name: &str, addr: &str) -> Result<SocketAddr> {
    addr.parse::<SocketAddr>()
        .map_err(|e| CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: addr.to_string(),
            reason: format!("Invalid socket address: {}", e),
        })
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_optional_path(field_name: &str, path: Option<&str>) -> Result<()> {
    match path {
        Some(path) => validate_path(field_name, path),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_origin() {
        assert!(validate_origin("allowed_origin", "*").is_ok());
        assert!(validate_origin("allowed_origin", "http://ff.jarare.red").is_ok());
        assert!(validate_origin("allowed_origin", "https://example.com").is_ok());
        assert!(validate_origin("allowed_origin", "").is_err());
        assert!(validate_origin("allowed_origin", "not-a-url").is_err());
        assert!(validate_origin("allowed_origin", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_bind_address() {
        assert!(validate_bind_address("bind", "0.0.0.0:8080").is_ok());
        assert!(validate_bind_address("bind", "127.0.0.1:0").is_ok());
        assert!(validate_bind_address("bind", "localhost").is_err());
        assert!(validate_bind_address("bind", "").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("seed_path", "./data/exercises.json").is_ok());
        assert!(validate_path("seed_path", "").is_err());
        assert!(validate_path("seed_path", "bad\0path").is_err());
        assert!(validate_optional_path("seed_path", None).is_ok());
    }
}
