use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct ProvisionDatabaseTopologyRequestResource {
    #[validate(length(min = 1, message = "prefix must not be empty"))]
    pub prefix: String,

    #[validate(length(min = 1, message = "env_name must not be empty"))]
    pub env_name: String,

    #[validate(length(min = 1, message = "network_ref must not be empty"))]
    pub network_ref: String,

    #[validate(length(min = 1, message = "encryption_key_ref must not be empty"))]
    pub encryption_key_ref: String,

    #[validate(length(min = 1, message = "instance_sizing must not be empty"))]
    pub instance_sizing: String,

    /// `replicated` or `single_instance`; falls back to the `USE_AURORA` setting.
    pub topology: Option<String>,
}
