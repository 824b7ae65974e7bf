use chrono::{DateTime, Utc};

use crate::provisioner::domain::model::{
    enums::topology_choice::TopologyChoice,
    value_objects::{
        database_identifier::DatabaseIdentifier, provisioning_run_id::ProvisioningRunId,
    },
};

#[derive(Clone, Debug)]
pub struct DatabaseTopologyProvisionedEvent {
    pub run_id: ProvisioningRunId,
    pub identifier: DatabaseIdentifier,
    pub topology: TopologyChoice,
    pub occurred_at: DateTime<Utc>,
}

impl DatabaseTopologyProvisionedEvent {
    pub fn new(
        run_id: ProvisioningRunId,
        identifier: DatabaseIdentifier,
        topology: TopologyChoice,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            run_id,
            identifier,
            topology,
            occurred_at,
        }
    }
}
