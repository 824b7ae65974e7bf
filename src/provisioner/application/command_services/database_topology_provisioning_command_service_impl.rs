use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, error, info, warn};

use crate::provisioner::{
    domain::{
        model::{
            commands::provision_database_topology_command::ProvisionDatabaseTopologyCommand,
            entities::{
                database_resource_handle::DatabaseResourceHandle,
                environment_config::EnvironmentConfig,
                provisioned_database::ProvisionedDatabase,
            },
            enums::{
                provisioner_domain_error::ProvisionerDomainError,
                provisioning_step::ProvisioningStep, topology_choice::TopologyChoice,
            },
            events::{
                database_topology_provision_failed_event::DatabaseTopologyProvisionFailedEvent,
                database_topology_provisioned_event::DatabaseTopologyProvisionedEvent,
            },
            requests::{
                credential_generation_request::CredentialGenerationRequest,
                parameter_write_request::ParameterWriteRequest,
                replicated_database_request::ReplicatedDatabaseRequest,
                single_instance_database_request::SingleInstanceDatabaseRequest,
            },
            value_objects::provisioning_run_id::ProvisioningRunId,
        },
        services::database_topology_provisioning_command_service::DatabaseTopologyProvisioningCommandService,
    },
    infrastructure::persistence::repositories::{
        database_resource_repository::DatabaseResourceRepository,
        parameter_store_repository::ParameterStoreRepository,
        provisioning_audit_event_repository::{
            ProvisioningAuditEventRecord, ProvisioningAuditEventRepository,
        },
        secret_manager_repository::SecretManagerRepository,
    },
};

pub struct DatabaseTopologyProvisioningCommandServiceImpl {
    database_resource_repository: Arc<dyn DatabaseResourceRepository>,
    secret_manager_repository: Arc<dyn SecretManagerRepository>,
    parameter_store_repository: Arc<dyn ParameterStoreRepository>,
    audit_event_repository: Arc<dyn ProvisioningAuditEventRepository>,
}

impl DatabaseTopologyProvisioningCommandServiceImpl {
    pub fn new(
        database_resource_repository: Arc<dyn DatabaseResourceRepository>,
        secret_manager_repository: Arc<dyn SecretManagerRepository>,
        parameter_store_repository: Arc<dyn ParameterStoreRepository>,
        audit_event_repository: Arc<dyn ProvisioningAuditEventRepository>,
    ) -> Self {
        Self {
            database_resource_repository,
            secret_manager_repository,
            parameter_store_repository,
            audit_event_repository,
        }
    }

    async fn create_resource(
        &self,
        config: &EnvironmentConfig,
        topology: TopologyChoice,
    ) -> Result<DatabaseResourceHandle, ProvisionerDomainError> {
        let created = match topology {
            TopologyChoice::Replicated => {
                let request = ReplicatedDatabaseRequest::for_environment(config);
                self.database_resource_repository
                    .create_replicated_database(&request)
                    .await
                    .map(DatabaseResourceHandle::Replicated)
            }
            TopologyChoice::SingleInstance => {
                let request = SingleInstanceDatabaseRequest::for_environment(config);
                self.database_resource_repository
                    .create_single_instance_database(&request)
                    .await
                    .map(DatabaseResourceHandle::Single)
            }
        };

        created.map_err(|message| {
            ProvisionerDomainError::backend_failure(ProvisioningStep::ResourceCreation, message)
        })
    }

    async fn write_parameter(
        &self,
        step: ProvisioningStep,
        request: ParameterWriteRequest,
    ) -> Result<(), ProvisionerDomainError> {
        self.parameter_store_repository
            .write_parameter(&request)
            .await
            .map_err(|message| ProvisionerDomainError::backend_failure(step, message))?;

        debug!(path = %request.path(), %step, "parameter written");
        Ok(())
    }

    // Strict order: resource, credential, then the two parameter writes. A
    // parameter is never written for a resource that failed to materialize.
    async fn provision(
        &self,
        config: &EnvironmentConfig,
        topology: TopologyChoice,
    ) -> Result<ProvisionedDatabase, ProvisionerDomainError> {
        let identifier = config.database_identifier();
        let endpoint_parameter_path = config.endpoint_parameter_path();
        let secret_parameter_path = config.secret_parameter_path();

        let resource = self.create_resource(config, topology).await?;
        let endpoint = resource.endpoint_locator().map_err(|message| {
            ProvisionerDomainError::backend_failure(ProvisioningStep::EndpointResolution, message)
        })?;
        debug!(
            identifier = %identifier,
            resource = resource.resource_identifier(),
            endpoint = %endpoint,
            "database resource accepted"
        );

        let secret_reference = self
            .secret_manager_repository
            .generate_credential(&CredentialGenerationRequest::for_environment(config))
            .await
            .map_err(|message| {
                ProvisionerDomainError::backend_failure(
                    ProvisioningStep::CredentialGeneration,
                    message,
                )
            })?;

        let provisioned = ProvisionedDatabase::new(
            identifier,
            resource,
            endpoint,
            Some(secret_reference),
            endpoint_parameter_path,
            secret_parameter_path,
            Utc::now(),
        );

        self.write_parameter(
            ProvisioningStep::EndpointParameterWrite,
            ParameterWriteRequest::new(
                provisioned.endpoint_parameter_path().clone(),
                provisioned.endpoint_parameter_value(),
                config.endpoint_parameter_description(),
            ),
        )
        .await?;

        self.write_parameter(
            ProvisioningStep::SecretParameterWrite,
            ParameterWriteRequest::new(
                provisioned.secret_parameter_path().clone(),
                provisioned.secret_parameter_value(),
                config.secret_parameter_description(),
            ),
        )
        .await?;

        Ok(provisioned)
    }

    async fn record_event(&self, record: ProvisioningAuditEventRecord) {
        if let Err(error) = self.audit_event_repository.save_event(&record).await {
            warn!(
                event_name = record.event_name(),
                run_id = %record.run_id(),
                %error,
                "failed to record provisioning audit event"
            );
        }
    }
}

#[async_trait]
impl DatabaseTopologyProvisioningCommandService for DatabaseTopologyProvisioningCommandServiceImpl {
    async fn handle_provision(
        &self,
        command: ProvisionDatabaseTopologyCommand,
    ) -> Result<ProvisionedDatabase, ProvisionerDomainError> {
        let run_id = ProvisioningRunId::new_random();
        let config = command.config();
        let topology = command.topology();
        let identifier = config.database_identifier();

        info!(
            %run_id,
            identifier = %identifier,
            topology = topology.as_str(),
            "database topology provisioning started"
        );
        self.record_event(ProvisioningAuditEventRecord::new(
            "database_topology_provision_started",
            run_id.value(),
            identifier.value(),
            topology.as_str(),
            None,
            None,
            Utc::now(),
        ))
        .await;

        match self.provision(config, topology).await {
            Ok(provisioned) => {
                let event = DatabaseTopologyProvisionedEvent::new(
                    run_id,
                    provisioned.identifier().clone(),
                    provisioned.topology(),
                    provisioned.provisioned_at(),
                );
                info!(
                    run_id = %event.run_id,
                    identifier = %event.identifier,
                    topology = event.topology.as_str(),
                    endpoint_parameter = %provisioned.endpoint_parameter_path(),
                    secret_parameter = %provisioned.secret_parameter_path(),
                    "database topology provisioned"
                );
                self.record_event(ProvisioningAuditEventRecord::new(
                    "database_topology_provision_succeeded",
                    event.run_id.value(),
                    event.identifier.value(),
                    event.topology.as_str(),
                    None,
                    None,
                    event.occurred_at,
                ))
                .await;

                Ok(provisioned)
            }
            Err(error) => {
                let event = DatabaseTopologyProvisionFailedEvent::new(
                    run_id,
                    identifier,
                    topology,
                    error.failed_step(),
                    error.to_string(),
                    Utc::now(),
                );
                error!(
                    run_id = %event.run_id,
                    identifier = %event.identifier,
                    topology = event.topology.as_str(),
                    step = event.failed_step.map(|step| step.as_str()),
                    error = %event.error_message,
                    "database topology provisioning failed"
                );
                self.record_event(ProvisioningAuditEventRecord::new(
                    "database_topology_provision_failed",
                    event.run_id.value(),
                    event.identifier.value(),
                    event.topology.as_str(),
                    event.failed_step.map(|step| step.as_str().to_string()),
                    Some(event.error_message.clone()),
                    event.occurred_at,
                ))
                .await;

                Err(error)
            }
        }
    }
}
