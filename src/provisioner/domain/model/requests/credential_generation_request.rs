use crate::provisioner::domain::model::{
    entities::environment_config::EnvironmentConfig,
    value_objects::{
        database_identifier::DatabaseIdentifier, encryption_key_ref::EncryptionKeyRef,
        generated_secret_name::GeneratedSecretName,
    },
};

pub const MASTER_USERNAME: &str = "postgres";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CredentialGenerationRequest {
    username: String,
    secret_name: GeneratedSecretName,
    encryption_key_ref: EncryptionKeyRef,
    database_identifier: DatabaseIdentifier,
}

impl CredentialGenerationRequest {
    pub fn for_environment(config: &EnvironmentConfig) -> Self {
        Self {
            username: MASTER_USERNAME.to_string(),
            secret_name: config.generated_secret_name(),
            encryption_key_ref: config.encryption_key_ref().clone(),
            database_identifier: config.database_identifier(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn secret_name(&self) -> &GeneratedSecretName {
        &self.secret_name
    }

    pub fn encryption_key_ref(&self) -> &EncryptionKeyRef {
        &self.encryption_key_ref
    }

    pub fn database_identifier(&self) -> &DatabaseIdentifier {
        &self.database_identifier
    }
}
