use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use database_topology_provisioner::provisioner::{
    domain::model::{
        entities::database_resource_handle::{ClusterHandle, InstanceHandle},
        requests::{
            credential_generation_request::CredentialGenerationRequest,
            parameter_write_request::ParameterWriteRequest,
            replicated_database_request::ReplicatedDatabaseRequest,
            single_instance_database_request::SingleInstanceDatabaseRequest,
        },
        value_objects::secret_reference::SecretReference,
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

/// Collaborator calls across every fake, in the order they happened.
#[derive(Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    pub fn record(&self, call: impl Into<String>) {
        self.calls.lock().expect("mutex poisoned").push(call.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("mutex poisoned").clone()
    }
}

#[derive(Default)]
struct FakeDatabaseResourceState {
    replicated_requests: Vec<ReplicatedDatabaseRequest>,
    single_instance_requests: Vec<SingleInstanceDatabaseRequest>,
}

pub struct FakeDatabaseResourceRepository {
    state: Mutex<FakeDatabaseResourceState>,
    call_log: CallLog,
    create_should_fail: bool,
    endpoint_hostname_suffix: String,
}

impl FakeDatabaseResourceRepository {
    pub fn new(
        call_log: CallLog,
        create_should_fail: bool,
        endpoint_hostname_suffix: &str,
    ) -> Self {
        Self {
            state: Mutex::new(FakeDatabaseResourceState::default()),
            call_log,
            create_should_fail,
            endpoint_hostname_suffix: endpoint_hostname_suffix.to_string(),
        }
    }

    pub fn replicated_requests(&self) -> Vec<ReplicatedDatabaseRequest> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .replicated_requests
            .clone()
    }

    pub fn single_instance_requests(&self) -> Vec<SingleInstanceDatabaseRequest> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .single_instance_requests
            .clone()
    }

    fn hostname(&self, prefix: &str) -> String {
        if self.endpoint_hostname_suffix.is_empty() {
            return String::new();
        }
        format!("{prefix}{}", self.endpoint_hostname_suffix)
    }
}

#[async_trait]
impl DatabaseResourceRepository for FakeDatabaseResourceRepository {
    async fn create_replicated_database(
        &self,
        request: &ReplicatedDatabaseRequest,
    ) -> Result<ClusterHandle, String> {
        self.call_log.record("create_replicated_database");
        self.state
            .lock()
            .expect("mutex poisoned")
            .replicated_requests
            .push(request.clone());

        if self.create_should_fail {
            return Err("cluster create failed".to_string());
        }

        Ok(ClusterHandle::new(
            request.logical_id.clone(),
            self.hostname(&format!("{}.cluster-abc123", request.logical_id)),
            5432,
        ))
    }

    async fn create_single_instance_database(
        &self,
        request: &SingleInstanceDatabaseRequest,
    ) -> Result<InstanceHandle, String> {
        self.call_log.record("create_single_instance_database");
        self.state
            .lock()
            .expect("mutex poisoned")
            .single_instance_requests
            .push(request.clone());

        if self.create_should_fail {
            return Err("instance create failed".to_string());
        }

        Ok(InstanceHandle::new(
            request.logical_id.clone(),
            self.hostname(&format!("{}.abc123", request.logical_id)),
            5432,
        ))
    }
}

pub struct FakeSecretManagerRepository {
    requests: Mutex<Vec<CredentialGenerationRequest>>,
    call_log: CallLog,
    generate_should_fail: bool,
}

impl FakeSecretManagerRepository {
    pub fn new(call_log: CallLog, generate_should_fail: bool) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            call_log,
            generate_should_fail,
        }
    }

    pub fn requests(&self) -> Vec<CredentialGenerationRequest> {
        self.requests.lock().expect("mutex poisoned").clone()
    }
}

#[async_trait]
impl SecretManagerRepository for FakeSecretManagerRepository {
    async fn generate_credential(
        &self,
        request: &CredentialGenerationRequest,
    ) -> Result<SecretReference, String> {
        self.call_log.record("generate_credential");
        self.requests
            .lock()
            .expect("mutex poisoned")
            .push(request.clone());

        if self.generate_should_fail {
            return Err("secret generation failed".to_string());
        }

        Ok(SecretReference::new(request.secret_name().value()))
    }
}

pub struct FakeParameterStoreRepository {
    writes: Mutex<Vec<ParameterWriteRequest>>,
    call_log: CallLog,
    fail_on_path: Option<String>,
}

impl FakeParameterStoreRepository {
    pub fn new(call_log: CallLog, fail_on_path: Option<String>) -> Self {
        Self {
            writes: Mutex::new(Vec::new()),
            call_log,
            fail_on_path,
        }
    }

    pub fn writes(&self) -> Vec<ParameterWriteRequest> {
        self.writes.lock().expect("mutex poisoned").clone()
    }

    pub fn written(&self) -> Vec<(String, String)> {
        self.writes()
            .into_iter()
            .map(|write| (write.path().value().to_string(), write.value().to_string()))
            .collect()
    }
}

#[async_trait]
impl ParameterStoreRepository for FakeParameterStoreRepository {
    async fn write_parameter(&self, request: &ParameterWriteRequest) -> Result<(), String> {
        self.call_log
            .record(format!("write_parameter {}", request.path().value()));

        if self.fail_on_path.as_deref() == Some(request.path().value()) {
            return Err(format!("write to {} failed", request.path().value()));
        }

        self.writes
            .lock()
            .expect("mutex poisoned")
            .push(request.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeAuditEventRepository {
    events: Mutex<Vec<ProvisioningAuditEventRecord>>,
}

impl FakeAuditEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saved_event_names(&self) -> Vec<String> {
        self.events
            .lock()
            .expect("mutex poisoned")
            .iter()
            .map(|event| event.event_name().to_string())
            .collect()
    }

    pub fn saved_events(&self) -> Vec<ProvisioningAuditEventRecord> {
        self.events.lock().expect("mutex poisoned").clone()
    }
}

#[async_trait]
impl ProvisioningAuditEventRepository for FakeAuditEventRepository {
    async fn save_event(&self, event: &ProvisioningAuditEventRecord) -> Result<(), String> {
        self.events
            .lock()
            .expect("mutex poisoned")
            .push(event.clone());
        Ok(())
    }
}
