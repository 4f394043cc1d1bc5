use crate::adapters::seed::validate_seed_exercise;
use crate::domain::model::{Exercise, SeedExercise};
use crate::domain::ports::Catalog;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::Arc;
use uuid::Uuid;

/// Catalog backed by an immutable snapshot built once at startup.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    exercises: Arc<Vec<Exercise>>,
}

impl InMemoryCatalog {
    /// Validates the seed against the vocabulary and allocates a fresh id
    /// for every exercise. Seed order is kept.
    pub fn from_seed(seed: Vec<SeedExercise>) -> Self {
        let total = seed.len();
        let exercises: Vec<Exercise> = seed
            .into_iter()
            .filter_map(validate_seed_exercise)
            .map(|seed| Exercise {
                id: Uuid::new_v4().to_string(),
                name: seed.name,
                equipment: seed.equipment,
                muscles: seed.muscles,
            })
            .collect();

        if exercises.len() < total {
            tracing::warn!(
                "Skipped {} of {} seed exercises",
                total - exercises.len(),
                total
            );
        }
        tracing::info!("Successfully populated {} exercises", exercises.len());

        Self::from_exercises(exercises)
    }

    pub fn from_exercises(exercises: Vec<Exercise>) -> Self {
        Self {
            exercises: Arc::new(exercises),
        }
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

fn distinct_sorted<'a>(names: impl Iterator<Item = &'a String>) -> Vec<String> {
    names
        .cloned()
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

#[async_trait]
impl Catalog for InMemoryCatalog {
    async fn all_exercises(&self) -> Result<Vec<Exercise>> {
        Ok(self.exercises.as_ref().clone())
    }

    async fn distinct_equipment_names(&self) -> Result<Vec<String>> {
        Ok(distinct_sorted(
            self.exercises.iter().flat_map(|e| e.equipment.iter()),
        ))
    }

    async fn distinct_muscle_names(&self) -> Result<Vec<String>> {
        Ok(distinct_sorted(
            self.exercises.iter().flat_map(|e| e.muscles.iter()),
        ))
    }

    async fn distinct_exercise_names(&self) -> Result<Vec<String>> {
        Ok(distinct_sorted(self.exercises.iter().map(|e| &e.name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::seed::embedded_seed;
    use std::collections::HashSet;
    use tokio_test::block_on;

    fn seed(name: &str, equipment: &[&str], muscles: &[&str]) -> SeedExercise {
        SeedExercise {
            name: name.to_string(),
            equipment: equipment.iter().map(|s| s.to_string()).collect(),
            muscles: muscles.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_from_seed_assigns_unique_ids_and_keeps_order() {
        let catalog = InMemoryCatalog::from_seed(vec![
            seed("Squat", &["Barbell", "Squat Rack"], &["Legs"]),
            seed("Pullup", &["Pullup Bar"], &["Back", "Biceps"]),
        ]);

        let exercises = block_on(catalog.all_exercises()).unwrap();
        assert_eq!(exercises.len(), 2);
        assert_eq!(exercises[0].name, "Squat");
        assert_eq!(exercises[1].name, "Pullup");
        assert_ne!(exercises[0].id, exercises[1].id);
        assert!(Uuid::parse_str(&exercises[0].id).is_ok());
    }

    #[test]
    fn test_from_seed_drops_unknown_tags_and_blank_names() {
        let catalog = InMemoryCatalog::from_seed(vec![
            seed("Kettlebell Swing", &["Kettlebell"], &["Legs"]),
            seed("", &["Barbell"], &["Back"]),
        ]);

        assert_eq!(catalog.len(), 1);
        let exercises = block_on(catalog.all_exercises()).unwrap();
        assert!(exercises[0].equipment.is_empty());
        assert_eq!(exercises[0].muscles, vec!["Legs"]);
    }

    #[test]
    fn test_distinct_names_are_deduplicated_and_sorted() {
        let catalog = InMemoryCatalog::from_exercises(vec![
            Exercise::new("1", "Squat", &["Squat Rack", "Barbell"], &["Legs"]),
            Exercise::new("2", "Bench Press", &["Barbell", "Flat Bench"], &["Chest"]),
            Exercise::new("3", "Bench Press", &[], &["Chest", "Triceps"]),
        ]);

        assert_eq!(
            block_on(catalog.distinct_equipment_names()).unwrap(),
            vec!["Barbell", "Flat Bench", "Squat Rack"]
        );
        assert_eq!(
            block_on(catalog.distinct_muscle_names()).unwrap(),
            vec!["Chest", "Legs", "Triceps"]
        );
        assert_eq!(
            block_on(catalog.distinct_exercise_names()).unwrap(),
            vec!["Bench Press", "Squat"]
        );
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = InMemoryCatalog::default();
        assert!(catalog.is_empty());
        assert!(block_on(catalog.all_exercises()).unwrap().is_empty());
        assert!(block_on(catalog.distinct_equipment_names()).unwrap().is_empty());
    }

    #[test]
    fn test_embedded_catalog_options_cover_vocabulary_subset() {
        let catalog = InMemoryCatalog::from_seed(embedded_seed().unwrap());
        assert_eq!(catalog.len(), 70);

        let equipment = block_on(catalog.distinct_equipment_names()).unwrap();
        let unique: HashSet<&String> = equipment.iter().collect();
        assert_eq!(unique.len(), equipment.len());
        assert!(equipment.windows(2).all(|w| w[0] < w[1]));
        assert!(equipment
            .iter()
            .all(|name| crate::domain::vocabulary::is_valid_equipment(name)));
    }
}
