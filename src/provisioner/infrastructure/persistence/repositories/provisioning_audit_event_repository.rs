use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct ProvisioningAuditEventRecord {
    event_name: String,
    run_id: Uuid,
    database_identifier: String,
    topology: String,
    failed_step: Option<String>,
    error_message: Option<String>,
    occurred_at: DateTime<Utc>,
}

impl ProvisioningAuditEventRecord {
    pub fn new(
        event_name: impl Into<String>,
        run_id: Uuid,
        database_identifier: impl Into<String>,
        topology: impl Into<String>,
        failed_step: Option<String>,
        error_message: Option<String>,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            event_name: event_name.into(),
            run_id,
            database_identifier: database_identifier.into(),
            topology: topology.into(),
            failed_step,
            error_message,
            occurred_at,
        }
    }

    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn database_identifier(&self) -> &str {
        &self.database_identifier
    }

    pub fn topology(&self) -> &str {
        &self.topology
    }

    pub fn failed_step(&self) -> Option<&str> {
        self.failed_step.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

#[async_trait]
pub trait ProvisioningAuditEventRepository: Send + Sync {
    async fn save_event(&self, event: &ProvisioningAuditEventRecord) -> Result<(), String>;
}
