// Application layer: wires adapters into the state the HTTP server runs on.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;

use crate::adapters::seed::load_seed;
use crate::adapters::version::load_api_info;
use crate::adapters::InMemoryCatalog;
use crate::domain::ports::{ConfigProvider, Storage};
use crate::server::{self, AppState};
use crate::utils::error::Result;
use crate::utils::validation::validate_bind_address;

/// Loads seed and version data and builds the catalog once.
pub async fn bootstrap<C, S>(config: &C, storage: &S) -> Result<AppState>
where
    C: ConfigProvider,
    S: Storage,
{
    let api_info = load_api_info(storage, config.version_path()).await?;
    let seed = load_seed(storage, config.seed_path()).await?;
    let catalog = InMemoryCatalog::from_seed(seed);

    if catalog.is_empty() {
        tracing::warn!("Catalog is empty, every query will return no exercises");
    }

    Ok(AppState::new(Arc::new(catalog), api_info))
}

/// Builds the full router, CORS origin taken from `config`.
pub async fn build_router<C, S>(config: &C, storage: &S) -> Result<Router>
where
    C: ConfigProvider,
    S: Storage,
{
    let state = bootstrap(config, storage).await?;
    server::router(state, config.allowed_origin())
}

pub fn listen_addr<C: ConfigProvider>(config: &C) -> Result<SocketAddr> {
    validate_bind_address("server.bind", config.bind_address())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::LocalStorage;
    use crate::config::ServiceConfig;
    use crate::utils::error::CatalogError;
    use std::io::Write;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_bootstrap_with_defaults() {
        let state = bootstrap(&ServiceConfig::default(), &LocalStorage::default())
            .await
            .unwrap();

        assert_eq!(state.catalog.all_exercises().await.unwrap().len(), 70);
        assert_eq!(state.api_info.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_bootstrap_reads_files_relative_to_base_dir() {
        let dir = TempDir::new().unwrap();
        let mut seed = std::fs::File::create(dir.path().join("seed.json")).unwrap();
        seed.write_all(br#"[{"name": "Plank", "equipment": ["None"], "muscles": ["Abs"]}]"#)
            .unwrap();
        let mut version = std::fs::File::create(dir.path().join("version.json")).unwrap();
        version
            .write_all(br#"[{"version": "3.1.0", "buildType": "release"}]"#)
            .unwrap();

        let config = ServiceConfig {
            seed_path: Some("seed.json".to_string()),
            version_path: Some("version.json".to_string()),
            ..Default::default()
        };
        let state = bootstrap(&config, &LocalStorage::new(dir.path()))
            .await
            .unwrap();

        let exercises = state.catalog.all_exercises().await.unwrap();
        assert_eq!(exercises.len(), 1);
        assert_eq!(exercises[0].name, "Plank");
        assert_eq!(state.api_info.version, "3.1.0");
    }

    #[test]
    fn test_listen_addr_reads_bind_address() {
        let config = ServiceConfig {
            bind: "127.0.0.1:9123".to_string(),
            ..Default::default()
        };
        assert_eq!(listen_addr(&config).unwrap().port(), 9123);

        let config = ServiceConfig {
            bind: "nowhere".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            listen_addr(&config),
            Err(CatalogError::InvalidConfigValueError { .. })
        ));
    }

    #[tokio::test]
    async fn test_build_router_rejects_unusable_origin() {
        let config = ServiceConfig {
            allowed_origin: "http://bad\norigin".to_string(),
            ..Default::default()
        };
        let result = build_router(&config, &LocalStorage::default()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_bootstrap_fails_on_empty_version_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("version.json"), "[]").unwrap();

        let config = ServiceConfig {
            version_path: Some("version.json".to_string()),
            ..Default::default()
        };
        let result = bootstrap(&config, &LocalStorage::new(dir.path())).await;
        assert!(matches!(result, Err(CatalogError::VersionError { .. })));
    }
}
