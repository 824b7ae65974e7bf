use async_trait::async_trait;
use sqlx::PgPool;

use crate::provisioner::infrastructure::persistence::repositories::provisioning_audit_event_repository::{
    ProvisioningAuditEventRecord, ProvisioningAuditEventRepository,
};

pub struct SqlxProvisioningAuditEventRepositoryImpl {
    pool: PgPool,
}

impl SqlxProvisioningAuditEventRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProvisioningAuditEventRepository for SqlxProvisioningAuditEventRepositoryImpl {
    async fn save_event(&self, event: &ProvisioningAuditEventRecord) -> Result<(), String> {
        let statement = r#"
            INSERT INTO provisioning_audit_events (
                event_name,
                run_id,
                database_identifier,
                topology,
                failed_step,
                error_message,
                occurred_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#;

        sqlx::query(statement)
            .bind(event.event_name())
            .bind(event.run_id())
            .bind(event.database_identifier())
            .bind(event.topology())
            .bind(event.failed_step())
            .bind(event.error_message())
            .bind(event.occurred_at())
            .execute(&self.pool)
            .await
            .map_err(|e| e.to_string())?;

        Ok(())
    }
}
