pub mod provision_database_topology_command;
