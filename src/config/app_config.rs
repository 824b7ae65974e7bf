use crate::provisioner::domain::model::enums::topology_choice::TopologyChoice;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: Option<String>,
    pub postgres_host: String,
    pub postgres_port: u16,
    pub postgres_user: String,
    pub postgres_password: String,
    pub postgres_database: String,
    pub topology: TopologyChoice,
    pub declared_endpoint_domain: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(8081),
            database_url: std::env::var("DATABASE_URL").ok(),
            postgres_host: std::env::var("POSTGRES_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            postgres_port: std::env::var("POSTGRES_PORT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(5432),
            postgres_user: std::env::var("POSTGRES_USER")
                .unwrap_or_else(|_| "postgres".to_string()),
            postgres_password: std::env::var("POSTGRES_PASSWORD")
                .unwrap_or_else(|_| "admin".to_string()),
            postgres_database: std::env::var("POSTGRES_DATABASE")
                .unwrap_or_else(|_| "provisioner".to_string()),
            topology: TopologyChoice::from_flag(std::env::var("USE_AURORA").ok().as_deref()),
            declared_endpoint_domain: std::env::var("DECLARED_ENDPOINT_DOMAIN")
                .unwrap_or_else(|_| "rds.internal".to_string()),
        }
    }

    /// `DATABASE_URL` wins over the individual `POSTGRES_*` settings.
    pub fn database_url(&self) -> String {
        self.database_url.clone().unwrap_or_else(|| {
            format!(
                "postgres://{}:{}@{}:{}/{}",
                self.postgres_user,
                self.postgres_password,
                self.postgres_host,
                self.postgres_port,
                self.postgres_database
            )
        })
    }
}
