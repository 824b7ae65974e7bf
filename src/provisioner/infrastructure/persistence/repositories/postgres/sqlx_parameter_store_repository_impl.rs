use async_trait::async_trait;
use regex::Regex;
use sqlx::PgPool;

use crate::provisioner::{
    domain::model::requests::parameter_write_request::ParameterWriteRequest,
    infrastructure::persistence::repositories::parameter_store_repository::ParameterStoreRepository,
};

/// The whole value must match; the pattern is anchored at both ends.
pub fn ensure_allowed_pattern(
    path: &str,
    value: &str,
    allowed_pattern: &str,
) -> Result<(), String> {
    let matcher = Regex::new(&format!("^(?:{allowed_pattern})$"))
        .map_err(|e| format!("invalid allowed pattern for {path}: {e}"))?;

    if !matcher.is_match(value) {
        return Err(format!(
            "value for {path} does not match allowed pattern {allowed_pattern}"
        ));
    }

    Ok(())
}

pub struct SqlxParameterStoreRepositoryImpl {
    pool: PgPool,
}

impl SqlxParameterStoreRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ParameterStoreRepository for SqlxParameterStoreRepositoryImpl {
    async fn write_parameter(&self, request: &ParameterWriteRequest) -> Result<(), String> {
        ensure_allowed_pattern(
            request.path().value(),
            request.value(),
            request.allowed_pattern(),
        )?;

        let statement = r#"
            INSERT INTO parameters (path, value, description, allowed_pattern, updated_at)
            VALUES ($1, $2, $3, $4, NOW())
            ON CONFLICT (path)
            DO UPDATE SET
                value = EXCLUDED.value,
                description = EXCLUDED.description,
                allowed_pattern = EXCLUDED.allowed_pattern,
                updated_at = EXCLUDED.updated_at
        "#;

        sqlx::query(statement)
            .bind(request.path().value())
            .bind(request.value())
            .bind(request.description())
            .bind(request.allowed_pattern())
            .execute(&self.pool)
            .await
            .map_err(|e| e.to_string())?;

        Ok(())
    }
}
