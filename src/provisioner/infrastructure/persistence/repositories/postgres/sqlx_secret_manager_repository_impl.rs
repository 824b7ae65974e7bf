use async_trait::async_trait;
use rand::{Rng, distributions::Alphanumeric};
use sqlx::{PgPool, Row};
use tracing::debug;

use crate::provisioner::{
    domain::model::{
        requests::credential_generation_request::CredentialGenerationRequest,
        value_objects::secret_reference::SecretReference,
    },
    infrastructure::persistence::repositories::secret_manager_repository::SecretManagerRepository,
};

const GENERATED_PASSWORD_LENGTH: usize = 32;

pub struct SqlxSecretManagerRepositoryImpl {
    pool: PgPool,
}

impl SqlxSecretManagerRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn generate_password() -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(GENERATED_PASSWORD_LENGTH)
            .map(char::from)
            .collect()
    }
}

#[async_trait]
impl SecretManagerRepository for SqlxSecretManagerRepositoryImpl {
    async fn generate_credential(
        &self,
        request: &CredentialGenerationRequest,
    ) -> Result<SecretReference, String> {
        // An existing secret keeps its password; only the binding is refreshed.
        let statement = r#"
            INSERT INTO generated_secrets (
                secret_name,
                username,
                password,
                encryption_key_ref,
                database_identifier,
                generated_at
            )
            VALUES ($1, $2, $3, $4, $5, NOW())
            ON CONFLICT (secret_name)
            DO UPDATE SET
                username = EXCLUDED.username,
                encryption_key_ref = EXCLUDED.encryption_key_ref,
                database_identifier = EXCLUDED.database_identifier
            RETURNING secret_name
        "#;

        let row = sqlx::query(statement)
            .bind(request.secret_name().value())
            .bind(request.username())
            .bind(Self::generate_password())
            .bind(request.encryption_key_ref().value())
            .bind(request.database_identifier().value())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| e.to_string())?;

        let secret_name: String = row.try_get("secret_name").map_err(|e| e.to_string())?;
        debug!(secret_name, "credential generated");

        Ok(SecretReference::new(secret_name))
    }
}
