use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProvisioningStep {
    ResourceCreation,
    EndpointResolution,
    CredentialGeneration,
    EndpointParameterWrite,
    SecretParameterWrite,
}

impl ProvisioningStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ResourceCreation => "resource_creation",
            Self::EndpointResolution => "endpoint_resolution",
            Self::CredentialGeneration => "credential_generation",
            Self::EndpointParameterWrite => "endpoint_parameter_write",
            Self::SecretParameterWrite => "secret_parameter_write",
        }
    }
}

impl fmt::Display for ProvisioningStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
