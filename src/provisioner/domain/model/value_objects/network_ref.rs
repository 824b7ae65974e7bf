use serde::{Deserialize, Serialize};

/// Opaque handle to the network the database is placed in.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkRef(String);

impl NetworkRef {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
