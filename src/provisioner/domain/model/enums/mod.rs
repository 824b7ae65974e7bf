pub mod database_engine;
pub mod provisioner_domain_error;
pub mod provisioning_step;
pub mod removal_policy;
pub mod subnet_type;
pub mod topology_choice;
