use std::fmt;

use crate::provisioner::domain::model::value_objects::{
    environment_name::EnvironmentName, naming_prefix::NamingPrefix,
};

/// `lowercase(prefix) + envName`. Correlates every artifact of one
/// provisioning run. Uniqueness across environments is up to the caller.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DatabaseIdentifier(String);

impl DatabaseIdentifier {
    pub fn derive(prefix: &NamingPrefix, env_name: &EnvironmentName) -> Self {
        Self(format!("{}{}", prefix.lowercase(), env_name.value()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Name of the initial database inside the cluster or instance.
    pub fn default_database_name(&self) -> String {
        format!("{}db", self.0)
    }
}

impl fmt::Display for DatabaseIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
