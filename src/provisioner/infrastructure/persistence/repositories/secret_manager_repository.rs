use async_trait::async_trait;

use crate::provisioner::domain::model::{
    requests::credential_generation_request::CredentialGenerationRequest,
    value_objects::secret_reference::SecretReference,
};

#[async_trait]
pub trait SecretManagerRepository: Send + Sync {
    async fn generate_credential(
        &self,
        request: &CredentialGenerationRequest,
    ) -> Result<SecretReference, String>;
}
