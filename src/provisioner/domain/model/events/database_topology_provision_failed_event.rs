use chrono::{DateTime, Utc};

use crate::provisioner::domain::model::{
    enums::{provisioning_step::ProvisioningStep, topology_choice::TopologyChoice},
    value_objects::{
        database_identifier::DatabaseIdentifier, provisioning_run_id::ProvisioningRunId,
    },
};

#[derive(Clone, Debug)]
pub struct DatabaseTopologyProvisionFailedEvent {
    pub run_id: ProvisioningRunId,
    pub identifier: DatabaseIdentifier,
    pub topology: TopologyChoice,
    pub failed_step: Option<ProvisioningStep>,
    pub error_message: String,
    pub occurred_at: DateTime<Utc>,
}

impl DatabaseTopologyProvisionFailedEvent {
    pub fn new(
        run_id: ProvisioningRunId,
        identifier: DatabaseIdentifier,
        topology: TopologyChoice,
        failed_step: Option<ProvisioningStep>,
        error_message: String,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            run_id,
            identifier,
            topology,
            failed_step,
            error_message,
            occurred_at,
        }
    }
}
