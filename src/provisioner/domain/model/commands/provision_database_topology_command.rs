use crate::provisioner::domain::model::{
    entities::environment_config::EnvironmentConfig,
    enums::{provisioner_domain_error::ProvisionerDomainError, topology_choice::TopologyChoice},
    value_objects::{
        encryption_key_ref::EncryptionKeyRef, instance_sizing::InstanceSizing,
        network_ref::NetworkRef,
    },
};

#[derive(Clone, Debug)]
pub struct ProvisionDatabaseTopologyCommand {
    config: EnvironmentConfig,
    topology: TopologyChoice,
}

impl ProvisionDatabaseTopologyCommand {
    pub fn new(
        prefix: String,
        env_name: String,
        network_ref: String,
        encryption_key_ref: String,
        instance_sizing: String,
        topology: TopologyChoice,
    ) -> Result<Self, ProvisionerDomainError> {
        Ok(Self {
            config: EnvironmentConfig::new(
                prefix,
                env_name,
                NetworkRef::new(network_ref),
                EncryptionKeyRef::new(encryption_key_ref),
                InstanceSizing::new(instance_sizing),
            )?,
            topology,
        })
    }

    pub fn config(&self) -> &EnvironmentConfig {
        &self.config
    }

    pub fn topology(&self) -> TopologyChoice {
        self.topology
    }
}
