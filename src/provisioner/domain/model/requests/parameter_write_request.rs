use crate::provisioner::domain::model::value_objects::parameter_path::ParameterPath;

pub const ALLOWED_PATTERN_ANY: &str = ".*";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParameterWriteRequest {
    path: ParameterPath,
    value: String,
    description: String,
    allowed_pattern: String,
}

impl ParameterWriteRequest {
    pub fn new(path: ParameterPath, value: String, description: String) -> Self {
        Self {
            path,
            value,
            description,
            allowed_pattern: ALLOWED_PATTERN_ANY.to_string(),
        }
    }

    pub fn path(&self) -> &ParameterPath {
        &self.path
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn allowed_pattern(&self) -> &str {
        &self.allowed_pattern
    }
}
