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

pub const ALLOCATED_STORAGE_GIB: u32 = 20;
pub const MAX_ALLOCATED_STORAGE_GIB: u32 = 100;
pub const BACKUP_RETENTION_DAYS: u32 = 7;

/// Declaration of a cost-optimized single-zone instance with storage autoscaling.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SingleInstanceDatabaseRequest {
    pub logical_id: String,
    pub engine: DatabaseEngine,
    pub engine_version: String,
    pub database_name: String,
    pub instance_sizing: InstanceSizing,
    pub network_ref: NetworkRef,
    pub subnet_type: SubnetType,
    pub storage_encrypted: bool,
    pub storage_encryption_key_ref: EncryptionKeyRef,
    pub deletion_protection: bool,
    pub removal_policy: RemovalPolicy,
    pub allocated_storage_gib: u32,
    pub max_allocated_storage_gib: u32,
    pub backup_retention_days: u32,
    pub multi_az: bool,
}

impl SingleInstanceDatabaseRequest {
    pub fn for_environment(config: &EnvironmentConfig) -> Self {
        let identifier = config.database_identifier();
        let engine = DatabaseEngine::Postgres;

        Self {
            logical_id: identifier.value().to_string(),
            engine,
            engine_version: engine.version().to_string(),
            database_name: identifier.default_database_name(),
            instance_sizing: config.instance_sizing().clone(),
            network_ref: config.network_ref().clone(),
            subnet_type: SubnetType::PrivateWithEgress,
            storage_encrypted: true,
            storage_encryption_key_ref: config.encryption_key_ref().clone(),
            deletion_protection: false,
            removal_policy: RemovalPolicy::Destroy,
            allocated_storage_gib: ALLOCATED_STORAGE_GIB,
            max_allocated_storage_gib: MAX_ALLOCATED_STORAGE_GIB,
            backup_retention_days: BACKUP_RETENTION_DAYS,
            multi_az: false,
        }
    }
}
