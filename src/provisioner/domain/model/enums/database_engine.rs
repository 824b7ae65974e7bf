use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DatabaseEngine {
    AuroraPostgresql,
    Postgres,
}

impl DatabaseEngine {
    pub const POSTGRES_MAJOR_MINOR: &'static str = "16.6";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AuroraPostgresql => "aurora-postgresql",
            Self::Postgres => "postgres",
        }
    }

    pub fn version(&self) -> &'static str {
        Self::POSTGRES_MAJOR_MINOR
    }
}
