use async_trait::async_trait;

use crate::provisioner::domain::model::{
    entities::database_resource_handle::{ClusterHandle, InstanceHandle},
    requests::{
        replicated_database_request::ReplicatedDatabaseRequest,
        single_instance_database_request::SingleInstanceDatabaseRequest,
    },
};

/// Provisioning backend. A call returns once the backend has accepted the
/// declaration; actual resource creation may finish later.
#[async_trait]
pub trait DatabaseResourceRepository: Send + Sync {
    async fn create_replicated_database(
        &self,
        request: &ReplicatedDatabaseRequest,
    ) -> Result<ClusterHandle, String>;

    async fn create_single_instance_database(
        &self,
        request: &SingleInstanceDatabaseRequest,
    ) -> Result<InstanceHandle, String>;
}
