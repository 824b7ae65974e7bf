use async_trait::async_trait;

use crate::provisioner::domain::model::requests::parameter_write_request::ParameterWriteRequest;

#[async_trait]
pub trait ParameterStoreRepository: Send + Sync {
    async fn write_parameter(&self, request: &ParameterWriteRequest) -> Result<(), String>;
}
