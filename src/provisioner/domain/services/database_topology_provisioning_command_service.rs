use async_trait::async_trait;

use crate::provisioner::domain::model::{
    commands::provision_database_topology_command::ProvisionDatabaseTopologyCommand,
    entities::provisioned_database::ProvisionedDatabase,
    enums::provisioner_domain_error::ProvisionerDomainError,
};

/// Runs are independent. Concurrent runs for the same database identifier are
/// not supported and are not guarded against.
#[async_trait]
pub trait DatabaseTopologyProvisioningCommandService: Send + Sync {
    async fn handle_provision(
        &self,
        command: ProvisionDatabaseTopologyCommand,
    ) -> Result<ProvisionedDatabase, ProvisionerDomainError>;
}
