use serde::Serialize;

use crate::provisioner::domain::model::{
    entities::environment_config::EnvironmentConfig,
    enums::{
        database_engine::DatabaseEngine, removal_policy::RemovalPolicy, subnet_type::SubnetType,
    },
    value_objects::{
        encryption_key_ref::EncryptionKeyRef, instance_sizing::InstanceSizing,
        network_ref::NetworkRef,
    },
};

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ClusterInstanceRequest {
    pub name: String,
    pub instance_sizing: InstanceSizing,
}

/// Declaration of a replicated cluster: one writer plus readers.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ReplicatedDatabaseRequest {
    pub logical_id: String,
    pub engine: DatabaseEngine,
    pub engine_version: String,
    pub default_database_name: String,
    pub network_ref: NetworkRef,
    pub subnet_type: SubnetType,
    pub storage_encrypted: bool,
    pub storage_encryption_key_ref: EncryptionKeyRef,
    pub deletion_protection: bool,
    pub removal_policy: RemovalPolicy,
    pub writer: ClusterInstanceRequest,
    pub readers: Vec<ClusterInstanceRequest>,
}

impl ReplicatedDatabaseRequest {
    pub fn for_environment(config: &EnvironmentConfig) -> Self {
        let identifier = config.database_identifier();
        let engine = DatabaseEngine::AuroraPostgresql;

        Self {
            logical_id: identifier.value().to_string(),
            engine,
            engine_version: engine.version().to_string(),
            default_database_name: identifier.default_database_name(),
            network_ref: config.network_ref().clone(),
            subnet_type: SubnetType::PrivateWithEgress,
            storage_encrypted: true,
            storage_encryption_key_ref: config.encryption_key_ref().clone(),
            // Torn down together with the stack.
            deletion_protection: false,
            removal_policy: RemovalPolicy::Destroy,
            writer: ClusterInstanceRequest {
                name: "writer".to_string(),
                instance_sizing: config.instance_sizing().clone(),
            },
            readers: vec![ClusterInstanceRequest {
                name: "reader".to_string(),
                instance_sizing: config.instance_sizing().clone(),
            }],
        }
    }
}
