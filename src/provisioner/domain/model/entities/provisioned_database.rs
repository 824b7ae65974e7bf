use chrono::{DateTime, Utc};

use crate::provisioner::domain::model::{
    entities::database_resource_handle::DatabaseResourceHandle,
    enums::topology_choice::TopologyChoice,
    value_objects::{
        database_identifier::DatabaseIdentifier, endpoint_locator::EndpointLocator,
        parameter_path::ParameterPath, provisioning_output_record::ProvisioningOutputRecord,
        secret_reference::SecretReference,
    },
};

#[derive(Clone, Debug)]
pub struct ProvisionedDatabase {
    identifier: DatabaseIdentifier,
    resource: DatabaseResourceHandle,
    endpoint: EndpointLocator,
    secret_reference: Option<SecretReference>,
    endpoint_parameter_path: ParameterPath,
    secret_parameter_path: ParameterPath,
    provisioned_at: DateTime<Utc>,
}

impl ProvisionedDatabase {
    pub fn new(
        identifier: DatabaseIdentifier,
        resource: DatabaseResourceHandle,
        endpoint: EndpointLocator,
        secret_reference: Option<SecretReference>,
        endpoint_parameter_path: ParameterPath,
        secret_parameter_path: ParameterPath,
        provisioned_at: DateTime<Utc>,
    ) -> Self {
        Self {
            identifier,
            resource,
            endpoint,
            secret_reference,
            endpoint_parameter_path,
            secret_parameter_path,
            provisioned_at,
        }
    }

    /// Value written under the `db-secret` path. An absent reference is
    /// written as an empty string, never skipped.
    pub fn secret_parameter_value_for(secret_reference: Option<&SecretReference>) -> String {
        secret_reference
            .map(|reference| reference.name().to_string())
            .unwrap_or_default()
    }

    pub fn identifier(&self) -> &DatabaseIdentifier {
        &self.identifier
    }

    pub fn resource(&self) -> &DatabaseResourceHandle {
        &self.resource
    }

    pub fn topology(&self) -> TopologyChoice {
        self.resource.topology()
    }

    pub fn endpoint(&self) -> &EndpointLocator {
        &self.endpoint
    }

    pub fn secret_reference(&self) -> Option<&SecretReference> {
        self.secret_reference.as_ref()
    }

    pub fn endpoint_parameter_value(&self) -> String {
        self.endpoint.to_string()
    }

    pub fn secret_parameter_value(&self) -> String {
        Self::secret_parameter_value_for(self.secret_reference.as_ref())
    }

    pub fn endpoint_parameter_path(&self) -> &ParameterPath {
        &self.endpoint_parameter_path
    }

    pub fn secret_parameter_path(&self) -> &ParameterPath {
        &self.secret_parameter_path
    }

    pub fn output_records(&self) -> Vec<ProvisioningOutputRecord> {
        vec![
            ProvisioningOutputRecord::endpoint(self.endpoint_parameter_path.clone()),
            ProvisioningOutputRecord::secret(self.secret_parameter_path.clone()),
        ]
    }

    pub fn provisioned_at(&self) -> DateTime<Utc> {
        self.provisioned_at
    }
}
