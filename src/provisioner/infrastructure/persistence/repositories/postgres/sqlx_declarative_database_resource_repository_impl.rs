use async_trait::async_trait;
use serde::Serialize;
use sha2::{Digest, Sha256};
use sqlx::PgPool;
use tracing::debug;

use crate::provisioner::{
    domain::model::{
        entities::database_resource_handle::{ClusterHandle, InstanceHandle},
        enums::topology_choice::TopologyChoice,
        requests::{
            replicated_database_request::ReplicatedDatabaseRequest,
            single_instance_database_request::SingleInstanceDatabaseRequest,
        },
    },
    infrastructure::persistence::repositories::database_resource_repository::DatabaseResourceRepository,
};

pub const DECLARED_ENDPOINT_PORT: u16 = 5432;

fn fingerprint(topology: TopologyChoice, logical_id: &str) -> String {
    let digest = Sha256::digest(format!("{}:{logical_id}", topology.as_str()).as_bytes());
    digest
        .iter()
        .take(6)
        .map(|byte| format!("{byte:02x}"))
        .collect()
}

/// Hostname a declared resource will be reachable at. Depends only on its
/// inputs, so re-declaring the same resource yields the same endpoint.
pub fn declared_hostname(topology: TopologyChoice, logical_id: &str, domain: &str) -> String {
    let fingerprint = fingerprint(topology, logical_id);
    match topology {
        TopologyChoice::Replicated => format!("{logical_id}.cluster-{fingerprint}.{domain}"),
        TopologyChoice::SingleInstance => format!("{logical_id}.{fingerprint}.{domain}"),
    }
}

/// Records database declarations for the deployment pipeline and hands back
/// the endpoint the declared resource will be reachable at.
pub struct SqlxDeclarativeDatabaseResourceRepositoryImpl {
    pool: PgPool,
    endpoint_domain: String,
}

impl SqlxDeclarativeDatabaseResourceRepositoryImpl {
    pub fn new(pool: PgPool, endpoint_domain: String) -> Self {
        Self {
            pool,
            endpoint_domain,
        }
    }

    async fn declare<T: Serialize + Sync>(
        &self,
        logical_id: &str,
        topology: TopologyChoice,
        declaration: &T,
        endpoint_hostname: &str,
    ) -> Result<(), String> {
        let declaration = serde_json::to_string(declaration).map_err(|e| e.to_string())?;

        let statement = r#"
            INSERT INTO declared_database_resources (
                logical_id,
                topology,
                declaration,
                endpoint_hostname,
                endpoint_port,
                declared_at
            )
            VALUES ($1, $2, $3, $4, $5, NOW())
            ON CONFLICT (logical_id)
            DO UPDATE SET
                topology = EXCLUDED.topology,
                declaration = EXCLUDED.declaration,
                endpoint_hostname = EXCLUDED.endpoint_hostname,
                endpoint_port = EXCLUDED.endpoint_port,
                declared_at = EXCLUDED.declared_at
        "#;

        sqlx::query(statement)
            .bind(logical_id)
            .bind(topology.as_str())
            .bind(declaration)
            .bind(endpoint_hostname)
            .bind(i32::from(DECLARED_ENDPOINT_PORT))
            .execute(&self.pool)
            .await
            .map_err(|e| e.to_string())?;

        debug!(logical_id, topology = topology.as_str(), "database declaration stored");
        Ok(())
    }
}

#[async_trait]
impl DatabaseResourceRepository for SqlxDeclarativeDatabaseResourceRepositoryImpl {
    async fn create_replicated_database(
        &self,
        request: &ReplicatedDatabaseRequest,
    ) -> Result<ClusterHandle, String> {
        let hostname = declared_hostname(
            TopologyChoice::Replicated,
            &request.logical_id,
            &self.endpoint_domain,
        );

        self.declare(
            &request.logical_id,
            TopologyChoice::Replicated,
            request,
            &hostname,
        )
        .await?;

        Ok(ClusterHandle::new(
            request.logical_id.clone(),
            hostname,
            DECLARED_ENDPOINT_PORT,
        ))
    }

    async fn create_single_instance_database(
        &self,
        request: &SingleInstanceDatabaseRequest,
    ) -> Result<InstanceHandle, String> {
        let hostname = declared_hostname(
            TopologyChoice::SingleInstance,
            &request.logical_id,
            &self.endpoint_domain,
        );

        self.declare(
            &request.logical_id,
            TopologyChoice::SingleInstance,
            request,
            &hostname,
        )
        .await?;

        Ok(InstanceHandle::new(
            request.logical_id.clone(),
            hostname,
            DECLARED_ENDPOINT_PORT,
        ))
    }
}
