/// Pointer to a credential held by the secret manager. Never the credential itself.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SecretReference {
    name: String,
}

impl SecretReference {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
