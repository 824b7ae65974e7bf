use thiserror::Error;

use crate::provisioner::domain::model::enums::provisioning_step::ProvisioningStep;

#[derive(Debug, Error)]
pub enum ProvisionerDomainError {
    #[error("invalid environment config: {0}")]
    InvalidConfig(String),

    #[error("backend failure during {step}: {message}")]
    BackendFailure {
        step: ProvisioningStep,
        message: String,
    },
}

impl ProvisionerDomainError {
    pub fn backend_failure(step: ProvisioningStep, message: impl Into<String>) -> Self {
        Self::BackendFailure {
            step,
            message: message.into(),
        }
    }

    pub fn failed_step(&self) -> Option<ProvisioningStep> {
        match self {
            Self::InvalidConfig(_) => None,
            Self::BackendFailure { step, .. } => Some(*step),
        }
    }
}
