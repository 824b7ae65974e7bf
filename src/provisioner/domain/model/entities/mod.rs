pub mod database_resource_handle;
pub mod environment_config;
pub mod provisioned_database;
