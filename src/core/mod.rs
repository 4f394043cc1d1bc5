pub mod filter;
pub mod query;

pub use crate::domain::model::{ApiInfo, Exercise, FilterRequest, SeedExercise};
pub use crate::domain::ports::{Catalog, ConfigProvider, Storage};
pub use crate::utils::error::Result;
