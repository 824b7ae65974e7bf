use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::provisioner::domain::model::enums::provisioner_domain_error::ProvisionerDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopologyChoice {
    Replicated,
    SingleInstance,
}

impl TopologyChoice {
    /// Resolves the boolean-like topology signal. Only `true` (any case)
    /// selects the replicated cluster.
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some(value) if value.trim().eq_ignore_ascii_case("true") => Self::Replicated,
            _ => Self::SingleInstance,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Replicated => "replicated",
            Self::SingleInstance => "single_instance",
        }
    }
}

impl FromStr for TopologyChoice {
    type Err = ProvisionerDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "replicated" => Ok(Self::Replicated),
            "single_instance" => Ok(Self::SingleInstance),
            other => Err(ProvisionerDomainError::InvalidConfig(format!(
                "unknown topology '{other}'"
            ))),
        }
    }
}
