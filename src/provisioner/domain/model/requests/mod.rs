pub mod credential_generation_request;
pub mod parameter_write_request;
pub mod replicated_database_request;
pub mod single_instance_database_request;
