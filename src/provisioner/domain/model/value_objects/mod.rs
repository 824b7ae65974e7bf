pub mod database_identifier;
pub mod encryption_key_ref;
pub mod endpoint_locator;
pub mod environment_name;
pub mod generated_secret_name;
pub mod instance_sizing;
pub mod naming_prefix;
pub mod network_ref;
pub mod parameter_path;
pub mod provisioning_output_record;
pub mod provisioning_run_id;
pub mod secret_reference;
