use serde::{Deserialize, Serialize};

/// Opaque handle to the key used for storage and secret encryption.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncryptionKeyRef(String);

impl EncryptionKeyRef {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
