pub mod error_response_resource;
pub mod provision_database_topology_request_resource;
pub mod provisioned_database_topology_resource;
