use std::{str::FromStr, sync::Arc};

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use validator::{Validate, ValidationErrors};

use crate::provisioner::{
    domain::{
        model::{
            commands::provision_database_topology_command::ProvisionDatabaseTopologyCommand,
            entities::provisioned_database::ProvisionedDatabase,
            enums::{
                provisioner_domain_error::ProvisionerDomainError, topology_choice::TopologyChoice,
            },
        },
        services::database_topology_provisioning_command_service::DatabaseTopologyProvisioningCommandService,
    },
    interfaces::rest::resources::{
        error_response_resource::ErrorResponseResource,
        provision_database_topology_request_resource::ProvisionDatabaseTopologyRequestResource,
        provisioned_database_topology_resource::{
            ProvisionedDatabaseTopologyResource, ProvisioningOutputResource,
        },
    },
};

#[derive(Clone)]
pub struct ProvisionerRestControllerState {
    pub command_service: Arc<dyn DatabaseTopologyProvisioningCommandService>,
    pub default_topology: TopologyChoice,
}

pub fn router(state: ProvisionerRestControllerState) -> Router {
    Router::new()
        .route("/provisioner/topologies", post(provision_database_topology))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/provisioner/topologies",
    tag = "provisioner",
    request_body = ProvisionDatabaseTopologyRequestResource,
    responses(
        (status = 201, description = "Database topology provisioned", body = ProvisionedDatabaseTopologyResource),
        (status = 400, description = "Invalid environment config", body = ErrorResponseResource),
        (status = 502, description = "Provisioning backend failure", body = ErrorResponseResource)
    )
)]
pub async fn provision_database_topology(
    State(state): State<ProvisionerRestControllerState>,
    Json(request): Json<ProvisionDatabaseTopologyRequestResource>,
) -> Result<
    (StatusCode, Json<ProvisionedDatabaseTopologyResource>),
    (StatusCode, Json<ErrorResponseResource>),
> {
    if let Err(validation_error) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponseResource {
                message: validation_message(&validation_error),
                failed_step: None,
            }),
        ));
    }

    let topology = match request.topology.as_deref() {
        Some(value) => TopologyChoice::from_str(value).map_err(map_domain_error)?,
        None => state.default_topology,
    };

    let command = ProvisionDatabaseTopologyCommand::new(
        request.prefix,
        request.env_name,
        request.network_ref,
        request.encryption_key_ref,
        request.instance_sizing,
        topology,
    )
    .map_err(map_domain_error)?;

    let provisioned = state
        .command_service
        .handle_provision(command)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(to_resource(&provisioned))))
}

fn to_resource(provisioned: &ProvisionedDatabase) -> ProvisionedDatabaseTopologyResource {
    ProvisionedDatabaseTopologyResource {
        database_identifier: provisioned.identifier().value().to_string(),
        topology: provisioned.topology().as_str().to_string(),
        resource_identifier: provisioned.resource().resource_identifier().to_string(),
        endpoint: provisioned.endpoint_parameter_value(),
        secret_name: provisioned.secret_parameter_value(),
        provisioned_at: provisioned.provisioned_at().to_rfc3339(),
        outputs: provisioned
            .output_records()
            .into_iter()
            .map(|record| ProvisioningOutputResource {
                label: record.label().to_string(),
                value: record.value().value().to_string(),
            })
            .collect(),
    }
}

fn validation_message(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| match &error.message {
                Some(message) => message.to_string(),
                None => format!("{field} is invalid ({})", error.code),
            })
        })
        .collect();
    messages.sort();

    format!("invalid request: {}", messages.join("; "))
}

fn map_domain_error(error: ProvisionerDomainError) -> (StatusCode, Json<ErrorResponseResource>) {
    let status = match error {
        ProvisionerDomainError::InvalidConfig(_) => StatusCode::BAD_REQUEST,
        ProvisionerDomainError::BackendFailure { .. } => StatusCode::BAD_GATEWAY,
    };

    (
        status,
        Json(ErrorResponseResource {
            message: error.to_string(),
            failed_step: error.failed_step().map(|step| step.as_str().to_string()),
        }),
    )
}
