use serde::{Deserialize, Serialize};

/// Opaque compute sizing such as `db.t4g.medium`, passed to the backend untouched.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceSizing(String);

impl InstanceSizing {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
