use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ProvisioningOutputResource {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ProvisionedDatabaseTopologyResource {
    pub database_identifier: String,
    pub topology: String,
    pub resource_identifier: String,
    pub endpoint: String,
    pub secret_name: String,
    pub provisioned_at: String,
    pub outputs: Vec<ProvisioningOutputResource>,
}
