pub mod database_topology_provisioning_command_service;
