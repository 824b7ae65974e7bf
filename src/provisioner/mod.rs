use std::sync::Arc;

use axum::Router;
use sqlx::{PgPool, migrate};
use tracing::info;

use crate::{
    config::app_config::AppConfig,
    provisioner::{
        application::command_services::database_topology_provisioning_command_service_impl::DatabaseTopologyProvisioningCommandServiceImpl,
        infrastructure::persistence::repositories::postgres::{
            sqlx_declarative_database_resource_repository_impl::SqlxDeclarativeDatabaseResourceRepositoryImpl,
            sqlx_parameter_store_repository_impl::SqlxParameterStoreRepositoryImpl,
            sqlx_provisioning_audit_event_repository_impl::SqlxProvisioningAuditEventRepositoryImpl,
            sqlx_secret_manager_repository_impl::SqlxSecretManagerRepositoryImpl,
        },
        interfaces::rest::controllers::provisioner_rest_controller::{
            ProvisionerRestControllerState, router,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub async fn build_provisioner_router(config: &AppConfig) -> Result<Router, String> {
    let pool = PgPool::connect(&config.database_url())
        .await
        .map_err(|e| e.to_string())?;

    migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| e.to_string())?;

    let database_resource_repository = Arc::new(SqlxDeclarativeDatabaseResourceRepositoryImpl::new(
        pool.clone(),
        config.declared_endpoint_domain.clone(),
    ));
    let secret_manager_repository =
        Arc::new(SqlxSecretManagerRepositoryImpl::new(pool.clone()));
    let parameter_store_repository =
        Arc::new(SqlxParameterStoreRepositoryImpl::new(pool.clone()));
    let audit_event_repository = Arc::new(SqlxProvisioningAuditEventRepositoryImpl::new(
        pool,
    ));

    let command_service = Arc::new(DatabaseTopologyProvisioningCommandServiceImpl::new(
        database_resource_repository,
        secret_manager_repository,
        parameter_store_repository,
        audit_event_repository,
    ));

    info!(
        default_topology = config.topology.as_str(),
        "provisioner router ready"
    );

    Ok(router(ProvisionerRestControllerState {
        command_service,
        default_topology: config.topology,
    }))
}
