use std::fmt;

use crate::provisioner::domain::model::enums::provisioner_domain_error::ProvisionerDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct EnvironmentName(String);

impl EnvironmentName {
    pub fn new(value: String) -> Result<Self, ProvisionerDomainError> {
        if value.is_empty() {
            return Err(ProvisionerDomainError::InvalidConfig(
                "environment name must not be empty".to_string(),
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

impl fmt::Display for EnvironmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
