use crate::provisioner::domain::model::{
    enums::provisioner_domain_error::ProvisionerDomainError,
    value_objects::{
        database_identifier::DatabaseIdentifier, encryption_key_ref::EncryptionKeyRef,
        environment_name::EnvironmentName, generated_secret_name::GeneratedSecretName,
        instance_sizing::InstanceSizing, naming_prefix::NamingPrefix, network_ref::NetworkRef,
        parameter_path::{ParameterPath, ParameterPathSuffix},
    },
};

/// Resolved environment the database is provisioned for. Never mutated once built.
#[derive(Clone, Debug)]
pub struct EnvironmentConfig {
    prefix: NamingPrefix,
    env_name: EnvironmentName,
    network_ref: NetworkRef,
    encryption_key_ref: EncryptionKeyRef,
    instance_sizing: InstanceSizing,
}

impl EnvironmentConfig {
    pub fn new(
        prefix: String,
        env_name: String,
        network_ref: NetworkRef,
        encryption_key_ref: EncryptionKeyRef,
        instance_sizing: InstanceSizing,
    ) -> Result<Self, ProvisionerDomainError> {
        Ok(Self {
            prefix: NamingPrefix::new(prefix)?,
            env_name: EnvironmentName::new(env_name)?,
            network_ref,
            encryption_key_ref,
            instance_sizing,
        })
    }

    pub fn prefix(&self) -> &NamingPrefix {
        &self.prefix
    }

    pub fn env_name(&self) -> &EnvironmentName {
        &self.env_name
    }

    pub fn network_ref(&self) -> &NetworkRef {
        &self.network_ref
    }

    pub fn encryption_key_ref(&self) -> &EncryptionKeyRef {
        &self.encryption_key_ref
    }

    pub fn instance_sizing(&self) -> &InstanceSizing {
        &self.instance_sizing
    }

    pub fn database_identifier(&self) -> DatabaseIdentifier {
        DatabaseIdentifier::derive(&self.prefix, &self.env_name)
    }

    pub fn endpoint_parameter_path(&self) -> ParameterPath {
        ParameterPath::derive(&self.prefix, &self.env_name, ParameterPathSuffix::Endpoint)
    }

    pub fn secret_parameter_path(&self) -> ParameterPath {
        ParameterPath::derive(&self.prefix, &self.env_name, ParameterPathSuffix::Secret)
    }

    pub fn generated_secret_name(&self) -> GeneratedSecretName {
        GeneratedSecretName::derive(&self.prefix, &self.env_name)
    }

    pub fn endpoint_parameter_description(&self) -> String {
        format!(
            "The DB for {} Solution: {} Environment",
            self.prefix, self.env_name
        )
    }

    pub fn secret_parameter_description(&self) -> String {
        format!(
            "The DB Secret for {} Solution: {} Environment",
            self.prefix, self.env_name
        )
    }
}
