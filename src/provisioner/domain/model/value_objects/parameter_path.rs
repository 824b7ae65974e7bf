use std::fmt;

use crate::provisioner::domain::model::value_objects::{
    environment_name::EnvironmentName, naming_prefix::NamingPrefix,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParameterPathSuffix {
    Endpoint,
    Secret,
}

impl ParameterPathSuffix {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Endpoint => "db",
            Self::Secret => "db-secret",
        }
    }
}

/// `/<lowercase prefix>/<lowercase envName>/<suffix>`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ParameterPath(String);

impl ParameterPath {
    pub fn derive(
        prefix: &NamingPrefix,
        env_name: &EnvironmentName,
        suffix: ParameterPathSuffix,
    ) -> Self {
        Self(format!(
            "/{}/{}/{}",
            prefix.lowercase(),
            env_name.lowercase(),
            suffix.as_str()
        ))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParameterPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
