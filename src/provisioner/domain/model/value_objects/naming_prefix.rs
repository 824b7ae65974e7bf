use std::fmt;

use crate::provisioner::domain::model::enums::provisioner_domain_error::ProvisionerDomainError;

/// Solution-wide naming prefix, kept verbatim. Derived names use its
/// lowercase form.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct NamingPrefix(String);

impl NamingPrefix {
    pub fn new(value: String) -> Result<Self, ProvisionerDomainError> {
        if value.is_empty() {
            return Err(ProvisionerDomainError::InvalidConfig(
                "prefix must not be empty".to_string(),
            ));
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn lowercase(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for NamingPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
