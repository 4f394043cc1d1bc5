pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use adapters::{InMemoryCatalog, LocalStorage};
pub use config::{CliConfig, ServiceConfig};
pub use core::filter::{filter_exercises, matches_any, ExerciseFilter};
pub use domain::model::{ApiInfo, Exercise, FilterRequest, SeedExercise};
pub use domain::ports::Catalog;
pub use server::AppState;
pub use utils::error::{CatalogError, Result};
