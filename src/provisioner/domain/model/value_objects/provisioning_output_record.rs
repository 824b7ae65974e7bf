use crate::provisioner::domain::model::value_objects::parameter_path::ParameterPath;

pub const DB_PARAM_LABEL: &str = "DB Param";
pub const DB_SECRET_PARAM_LABEL: &str = "DB Secret Param";

/// Discovery record for operators and later provisioning stages. Downstream
/// consumers key off the label text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProvisioningOutputRecord {
    label: &'static str,
    value: ParameterPath,
}

impl ProvisioningOutputRecord {
    pub fn endpoint(path: ParameterPath) -> Self {
        Self {
            label: DB_PARAM_LABEL,
            value: path,
        }
    }

    pub fn secret(path: ParameterPath) -> Self {
        Self {
            label: DB_SECRET_PARAM_LABEL,
            value: path,
        }
    }

    pub fn label(&self) -> &str {
        self.label
    }

    pub fn value(&self) -> &ParameterPath {
        &self.value
    }
}
