use crate::domain::model::ApiInfo;
use crate::domain::ports::Storage;
use crate::utils::error::{CatalogError, Result};

/// 版本檔為 `ApiInfo` 陣列，取第一筆
pub fn parse_api_info(data: &[u8], path: &str) -> Result<ApiInfo> {
    let infos: Vec<ApiInfo> =
        serde_json::from_slice(data).map_err(|e| CatalogError::VersionError {
            path: path.to_string(),
            message: format!("failed to parse version data: {}", e),
        })?;

    infos
        .into_iter()
        .next()
        .ok_or_else(|| CatalogError::VersionError {
            path: path.to_string(),
            message: "version file is empty or contains no API info objects".to_string(),
        })
}

pub async fn load_api_info<S: Storage>(storage: &S, path: Option<&str>) -> Result<ApiInfo> {
    let Some(path) = path else {
        let info = ApiInfo::from_build();
        tracing::info!(
            "No version file configured, using build info: {} ({})",
            info.version,
            info.build_type
        );
        return Ok(info);
    };

    tracing::info!("Loading version info from: {}", path);
    let data = storage
        .read_file(path)
        .await
        .map_err(|e| CatalogError::VersionError {
            path: path.to_string(),
            message: format!("failed to read version file: {}", e),
        })?;

    let info = parse_api_info(&data, path)?;
    tracing::info!(
        "Loaded version: {} (buildType: {})",
        info.version,
        info.build_type
    );
    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::LocalStorage;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_takes_first_entry() {
        let data = br#"[{"version": "1.4.0", "buildType": "release"}, {"version": "0.0.1", "buildType": "debug"}]"#;
        let info = parse_api_info(data, "version.json").unwrap();
        assert_eq!(info.version, "1.4.0");
        assert_eq!(info.build_type, "release");
    }

    #[test]
    fn test_empty_array_is_error() {
        let err = parse_api_info(b"[]", "version.json").unwrap_err();
        assert!(matches!(err, CatalogError::VersionError { .. }));
    }

    #[test]
    fn test_object_instead_of_array_is_error() {
        let data = br#"{"version": "1.4.0", "buildType": "release"}"#;
        assert!(parse_api_info(data, "version.json").is_err());
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(br#"[{"version": "2.0.0", "buildType": "staging"}]"#)
            .unwrap();

        let path = temp_file.path().to_str().unwrap().to_string();
        let info = load_api_info(&LocalStorage::default(), Some(path.as_str()))
            .await
            .unwrap();
        assert_eq!(info.version, "2.0.0");
        assert_eq!(info.build_type, "staging");
    }

    #[tokio::test]
    async fn test_missing_file_is_version_error() {
        let err = load_api_info(&LocalStorage::default(), Some("/definitely/not/here.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::VersionError { .. }));
    }

    #[tokio::test]
    async fn test_no_path_uses_build_info() {
        let info = load_api_info(&LocalStorage::default(), None).await.unwrap();
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
    }
}
