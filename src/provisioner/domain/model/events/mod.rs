pub mod database_topology_provision_failed_event;
pub mod database_topology_provisioned_event;
