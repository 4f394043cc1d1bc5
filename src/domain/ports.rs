use crate::domain::model::Exercise;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only file access for seed and version data.
pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

/// Read side of the exercise store. Equipment and muscle joins are
/// resolved by the implementation; callers never write through it.
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn all_exercises(&self) -> Result<Vec<Exercise>>;

    /// Deduplicated, sorted ascending.
    async fn distinct_equipment_names(&self) -> Result<Vec<String>>;

    /// Deduplicated, sorted ascending.
    async fn distinct_muscle_names(&self) -> Result<Vec<String>>;

    async fn distinct_exercise_names(&self) -> Result<Vec<String>>;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_address(&self) -> &str;
    fn allowed_origin(&self) -> &str;
    fn seed_path(&self) -> Option<&str>;
    fn version_path(&self) -> Option<&str>;
}
