use std::fmt;

/// A discrete projection year or period index.
pub type Timestep = i64;

/// Local authority district identifier (`lad_uk_2016`).
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct DistrictId(String);

impl DistrictId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DistrictId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DistrictId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for DistrictId {
    fn from(value: String) -> Self {
        Self(value)
    }
}
