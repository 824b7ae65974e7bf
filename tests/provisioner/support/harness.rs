use std::sync::Arc;

use database_topology_provisioner::provisioner::application::command_services::database_topology_provisioning_command_service_impl::DatabaseTopologyProvisioningCommandServiceImpl;

use super::fakes::{
    CallLog, FakeAuditEventRepository, FakeDatabaseResourceRepository,
    FakeParameterStoreRepository, FakeSecretManagerRepository,
};

#[derive(Clone, Debug, Default)]
pub enum FailureMode {
    #[default]
    None,
    ResourceCreation,
    EmptyEndpointHostname,
    CredentialGeneration,
    ParameterWrite(String),
}

pub struct ProvisioningTestHarness {
    pub call_log: CallLog,
    pub resource_repository: Arc<FakeDatabaseResourceRepository>,
    pub secret_repository: Arc<FakeSecretManagerRepository>,
    pub parameter_repository: Arc<FakeParameterStoreRepository>,
    pub audit_repository: Arc<FakeAuditEventRepository>,
    pub service: DatabaseTopologyProvisioningCommandServiceImpl,
}

pub fn create_harness(failure: FailureMode) -> ProvisioningTestHarness {
    let call_log = CallLog::default();

    let resource_repository = Arc::new(FakeDatabaseResourceRepository::new(
        call_log.clone(),
        matches!(failure, FailureMode::ResourceCreation),
        if matches!(failure, FailureMode::EmptyEndpointHostname) {
            ""
        } else {
            ".rds.internal"
        },
    ));
    let secret_repository = Arc::new(FakeSecretManagerRepository::new(
        call_log.clone(),
        matches!(failure, FailureMode::CredentialGeneration),
    ));
    let parameter_repository = Arc::new(FakeParameterStoreRepository::new(
        call_log.clone(),
        match &failure {
            FailureMode::ParameterWrite(path) => Some(path.clone()),
            _ => None,
        },
    ));
    let audit_repository = Arc::new(FakeAuditEventRepository::new());

    let service = DatabaseTopologyProvisioningCommandServiceImpl::new(
        resource_repository.clone(),
        secret_repository.clone(),
        parameter_repository.clone(),
        audit_repository.clone(),
    );

    ProvisioningTestHarness {
        call_log,
        resource_repository,
        secret_repository,
        parameter_repository,
        audit_repository,
        service,
    }
}
