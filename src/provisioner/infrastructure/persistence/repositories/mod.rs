pub mod database_resource_repository;
pub mod parameter_store_repository;
pub mod postgres;
pub mod provisioning_audit_event_repository;
pub mod secret_manager_repository;
