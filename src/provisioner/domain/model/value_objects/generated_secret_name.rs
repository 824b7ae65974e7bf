use crate::provisioner::domain::model::value_objects::{
    environment_name::EnvironmentName, naming_prefix::NamingPrefix,
};

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct GeneratedSecretName(String);

impl GeneratedSecretName {
    pub fn derive(prefix: &NamingPrefix, env_name: &EnvironmentName) -> Self {
        Self(format!(
            "{}-{}-db-secrets",
            prefix.lowercase(),
            env_name.value()
        ))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
