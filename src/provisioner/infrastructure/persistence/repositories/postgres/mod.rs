pub mod sqlx_declarative_database_resource_repository_impl;
pub mod sqlx_parameter_store_repository_impl;
pub mod sqlx_provisioning_audit_event_repository_impl;
pub mod sqlx_secret_manager_repository_impl;
