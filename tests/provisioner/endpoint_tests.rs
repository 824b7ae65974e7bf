use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use database_topology_provisioner::provisioner::{
    domain::{
        model::enums::topology_choice::TopologyChoice,
        services::database_topology_provisioning_command_service::DatabaseTopologyProvisioningCommandService,
    },
    interfaces::rest::{
        controllers::provisioner_rest_controller::{
            ProvisionerRestControllerState, provision_database_topology,
        },
        resources::provision_database_topology_request_resource::ProvisionDatabaseTopologyRequestResource,
    },
};

use crate::support::{
    FailureMode, create_harness,
    fixtures::{ENCRYPTION_KEY_REF, INSTANCE_SIZING, NETWORK_REF},
    harness::ProvisioningTestHarness,
};

fn state_for(
    harness: ProvisioningTestHarness,
    default_topology: TopologyChoice,
) -> ProvisionerRestControllerState {
    let command_service: Arc<dyn DatabaseTopologyProvisioningCommandService> =
        Arc::new(harness.service);

    ProvisionerRestControllerState {
        command_service,
        default_topology,
    }
}

fn request(
    prefix: &str,
    env_name: &str,
    topology: Option<&str>,
) -> ProvisionDatabaseTopologyRequestResource {
    ProvisionDatabaseTopologyRequestResource {
        prefix: prefix.to_string(),
        env_name: env_name.to_string(),
        network_ref: NETWORK_REF.to_string(),
        encryption_key_ref: ENCRYPTION_KEY_REF.to_string(),
        instance_sizing: INSTANCE_SIZING.to_string(),
        topology: topology.map(str::to_string),
    }
}

#[tokio::test]
async fn provision_endpoint_uses_default_topology_and_returns_outputs() {
    let harness = create_harness(FailureMode::None);
    let state = state_for(harness, TopologyChoice::SingleInstance);

    let (status, Json(body)) =
        provision_database_topology(State(state), Json(request("OPA", "dev", None)))
            .await
            .expect("provisioning should succeed");

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body.database_identifier, "opadev");
    assert_eq!(body.topology, "single_instance");
    assert_eq!(body.endpoint, "opadev.abc123.rds.internal:5432");
    assert_eq!(body.secret_name, "opa-dev-db-secrets");
    assert_eq!(body.outputs.len(), 2);
    assert_eq!(body.outputs[0].label, "DB Param");
    assert_eq!(body.outputs[0].value, "/opa/dev/db");
    assert_eq!(body.outputs[1].label, "DB Secret Param");
    assert_eq!(body.outputs[1].value, "/opa/dev/db-secret");
}

#[tokio::test]
async fn provision_endpoint_honors_explicit_topology() {
    let harness = create_harness(FailureMode::None);
    let resource_repository = harness.resource_repository.clone();
    let state = state_for(harness, TopologyChoice::SingleInstance);

    let (_, Json(body)) = provision_database_topology(
        State(state),
        Json(request("OPA", "dev", Some("replicated"))),
    )
    .await
    .expect("provisioning should succeed");

    assert_eq!(body.topology, "replicated");
    assert_eq!(resource_repository.replicated_requests().len(), 1);
}

#[tokio::test]
async fn provision_endpoint_rejects_empty_prefix_without_backend_calls() {
    let harness = create_harness(FailureMode::None);
    let call_log = harness.call_log.clone();
    let state = state_for(harness, TopologyChoice::Replicated);

    let result =
        provision_database_topology(State(state), Json(request("", "dev", None))).await;

    match result {
        Err((status, Json(error))) => {
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(error.message, "invalid request: prefix must not be empty");
            assert!(error.failed_step.is_none());
        }
        Ok(_) => panic!("expected validation failure"),
    }
    assert!(call_log.calls().is_empty());
}

#[tokio::test]
async fn provision_endpoint_accepts_any_non_empty_names() {
    let long_prefix = "a".repeat(45);
    let names = [
        ("opa-x", "dev"),
        ("OPA", "dev_eu"),
        ("OPA", "Dev.1"),
        (long_prefix.as_str(), "dev"),
    ];

    for (prefix, env_name) in names {
        let harness = create_harness(FailureMode::None);
        let state = state_for(harness, TopologyChoice::SingleInstance);

        let (status, _) =
            provision_database_topology(State(state), Json(request(prefix, env_name, None)))
                .await
                .unwrap_or_else(|(status, Json(error))| {
                    panic!("{prefix}/{env_name} rejected with {status}: {}", error.message)
                });

        assert_eq!(status, StatusCode::CREATED);
    }
}

#[tokio::test]
async fn provision_endpoint_interpolates_hyphens_and_underscores_verbatim() {
    let harness = create_harness(FailureMode::None);
    let parameter_repository = harness.parameter_repository.clone();
    let state = state_for(harness, TopologyChoice::SingleInstance);

    let (_, Json(body)) =
        provision_database_topology(State(state), Json(request("OPA-x", "dev_eu", None)))
            .await
            .expect("provisioning should succeed");

    assert_eq!(body.database_identifier, "opa-xdev_eu");
    assert_eq!(body.secret_name, "opa-x-dev_eu-db-secrets");
    assert_eq!(body.outputs[0].value, "/opa-x/dev_eu/db");
    assert_eq!(
        parameter_repository.written()[0],
        (
            "/opa-x/dev_eu/db".to_string(),
            "opa-xdev_eu.abc123.rds.internal:5432".to_string()
        )
    );
}

#[tokio::test]
async fn provision_endpoint_rejects_unknown_topology() {
    let harness = create_harness(FailureMode::None);
    let call_log = harness.call_log.clone();
    let state = state_for(harness, TopologyChoice::Replicated);

    let result = provision_database_topology(
        State(state),
        Json(request("OPA", "dev", Some("serverless"))),
    )
    .await;

    assert!(matches!(result, Err((StatusCode::BAD_REQUEST, _))));
    assert!(call_log.calls().is_empty());
}

#[tokio::test]
async fn provision_endpoint_maps_backend_failure_to_bad_gateway() {
    let harness = create_harness(FailureMode::CredentialGeneration);
    let state = state_for(harness, TopologyChoice::SingleInstance);

    let result =
        provision_database_topology(State(state), Json(request("OPA", "dev", None))).await;

    match result {
        Err((status, Json(error))) => {
            assert_eq!(status, StatusCode::BAD_GATEWAY);
            assert_eq!(error.failed_step.as_deref(), Some("credential_generation"));
            assert!(error.message.contains("secret generation failed"));
        }
        Ok(_) => panic!("expected backend failure"),
    }
}
