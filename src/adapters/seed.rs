use crate::domain::model::SeedExercise;
use crate::domain::ports::Storage;
use crate::domain::vocabulary::{is_valid_equipment, is_valid_muscle_group};
use crate::utils::error::{CatalogError, Result};

/// 內建的標準動作清單
pub const EMBEDDED_SEED: &str = include_str!("../../data/exercises.json");
pub const EMBEDDED_SEED_ORIGIN: &str = "<embedded>";

pub fn parse_seed(data: &[u8], origin: &str) -> Result<Vec<SeedExercise>> {
    serde_json::from_slice(data).map_err(|e| CatalogError::SeedError {
        path: origin.to_string(),
        message: format!("failed to parse seed JSON: {}", e),
    })
}

pub fn embedded_seed() -> Result<Vec<SeedExercise>> {
    parse_seed(EMBEDDED_SEED.as_bytes(), EMBEDDED_SEED_ORIGIN)
}

/// Loads the seed from `path`, or the embedded list when no path is given.
pub async fn load_seed<S: Storage>(storage: &S, path: Option<&str>) -> Result<Vec<SeedExercise>> {
    let Some(path) = path else {
        tracing::info!("No seed path configured, using embedded exercise list");
        return embedded_seed();
    };

    tracing::info!("Loading exercises from: {}", path);
    let data = storage
        .read_file(path)
        .await
        .map_err(|e| CatalogError::SeedError {
            path: path.to_string(),
            message: format!("failed to read seed file: {}", e),
        })?;

    parse_seed(&data, path)
}

/// Drops equipment and muscle tags outside the vocabulary, warning for each.
/// Returns `None` for an exercise without a usable name.
pub fn validate_seed_exercise(seed: SeedExercise) -> Option<SeedExercise> {
    if seed.name.trim().is_empty() {
        tracing::warn!("Skipping seed exercise with an empty name");
        return None;
    }

    let SeedExercise {
        name,
        equipment,
        muscles,
    } = seed;

    let equipment: Vec<String> = equipment
        .into_iter()
        .filter(|item| {
            let valid = is_valid_equipment(item);
            if !valid {
                tracing::warn!("Invalid equipment '{}' for exercise '{}'. Skipping", item, name);
            }
            valid
        })
        .collect();

    let muscles: Vec<String> = muscles
        .into_iter()
        .filter(|item| {
            let valid = is_valid_muscle_group(item);
            if !valid {
                tracing::warn!("Invalid muscle group '{}' for exercise '{}'. Skipping", item, name);
            }
            valid
        })
        .collect();

    Some(SeedExercise {
        name,
        equipment,
        muscles,
    })
}
