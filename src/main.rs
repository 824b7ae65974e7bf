use axum::Router;
use database_topology_provisioner::{
    config::app_config::AppConfig,
    provisioner::{
        build_provisioner_router,
        interfaces::rest::resources::{
            error_response_resource::ErrorResponseResource,
            provision_database_topology_request_resource::ProvisionDatabaseTopologyRequestResource,
            provisioned_database_topology_resource::{
                ProvisionedDatabaseTopologyResource, ProvisioningOutputResource,
            },
        },
    },
};
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        database_topology_provisioner::provisioner::interfaces::rest::controllers::provisioner_rest_controller::provision_database_topology
    ),
    components(
        schemas(
            ProvisionDatabaseTopologyRequestResource,
            ProvisionedDatabaseTopologyResource,
            ProvisioningOutputResource,
            ErrorResponseResource
        )
    ),
    tags(
        (name = "provisioner", description = "Database topology provisioning bounded context")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    let provisioner_router = build_provisioner_router(&config)
        .await
        .expect("failed to build provisioner router");

    let app = Router::new()
        .merge(provisioner_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    info!(%addr, topology = config.topology.as_str(), "provisioner listening");
    info!(
        "Swagger UI available at http://localhost:{}/swagger-ui",
        config.port
    );

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
