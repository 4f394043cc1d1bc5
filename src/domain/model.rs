use serde::{Deserialize, Serialize};

/// A catalog entry as served by the API, with its equipment and muscle
/// names already resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default)]
    pub muscles: Vec<String>,
}

impl Exercise {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        equipment: &[&str],
        muscles: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            equipment: equipment.iter().map(|s| s.to_string()).collect(),
            muscles: muscles.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// One record of the persisted seed format. Ids are allocated when the
/// catalog is built, not stored in the seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedExercise {
    pub name: String,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default)]
    pub muscles: Vec<String>,
}

/// Equipment and muscle filters for one query. An empty list means the
/// dimension is unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterRequest {
    pub equipment: Vec<String>,
    pub muscles: Vec<String>,
}

impl FilterRequest {
    pub fn new<E, M>(equipment: E, muscles: M) -> Self
    where
        E: IntoIterator,
        E::Item: Into<String>,
        M: IntoIterator,
        M::Item: Into<String>,
    {
        Self {
            equipment: equipment.into_iter().map(Into::into).collect(),
            muscles: muscles.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.equipment.is_empty() && self.muscles.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiInfo {
    pub version: String,
    #[serde(rename = "buildType")]
    pub build_type: String,
}

impl ApiInfo {
    /// 未提供版本檔時使用編譯期資訊
    pub fn from_build() -> Self {
        let build_type = if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        };
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            build_type: build_type.to_string(),
        }
    }
}
