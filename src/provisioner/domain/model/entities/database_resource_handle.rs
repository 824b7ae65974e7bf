use crate::provisioner::domain::model::{
    enums::topology_choice::TopologyChoice, value_objects::endpoint_locator::EndpointLocator,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClusterHandle {
    cluster_identifier: String,
    cluster_endpoint_hostname: String,
    cluster_endpoint_port: u16,
}

impl ClusterHandle {
    pub fn new(
        cluster_identifier: impl Into<String>,
        cluster_endpoint_hostname: impl Into<String>,
        cluster_endpoint_port: u16,
    ) -> Self {
        Self {
            cluster_identifier: cluster_identifier.into(),
            cluster_endpoint_hostname: cluster_endpoint_hostname.into(),
            cluster_endpoint_port,
        }
    }

    pub fn cluster_identifier(&self) -> &str {
        &self.cluster_identifier
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InstanceHandle {
    instance_identifier: String,
    instance_endpoint_hostname: String,
    instance_endpoint_port: u16,
}

impl InstanceHandle {
    pub fn new(
        instance_identifier: impl Into<String>,
        instance_endpoint_hostname: impl Into<String>,
        instance_endpoint_port: u16,
    ) -> Self {
        Self {
            instance_identifier: instance_identifier.into(),
            instance_endpoint_hostname: instance_endpoint_hostname.into(),
            instance_endpoint_port,
        }
    }

    pub fn instance_identifier(&self) -> &str {
        &self.instance_identifier
    }
}

/// Whatever the backend handed back for the chosen topology.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DatabaseResourceHandle {
    Replicated(ClusterHandle),
    Single(InstanceHandle),
}

impl DatabaseResourceHandle {
    pub fn topology(&self) -> TopologyChoice {
        match self {
            Self::Replicated(_) => TopologyChoice::Replicated,
            Self::Single(_) => TopologyChoice::SingleInstance,
        }
    }

    pub fn resource_identifier(&self) -> &str {
        match self {
            Self::Replicated(cluster) => cluster.cluster_identifier(),
            Self::Single(instance) => instance.instance_identifier(),
        }
    }

    /// Normalizes the cluster endpoint or the instance endpoint into one shape.
    pub fn endpoint_locator(&self) -> Result<EndpointLocator, String> {
        match self {
            Self::Replicated(cluster) => EndpointLocator::new(
                cluster.cluster_endpoint_hostname.clone(),
                cluster.cluster_endpoint_port,
            ),
            Self::Single(instance) => EndpointLocator::new(
                instance.instance_endpoint_hostname.clone(),
                instance.instance_endpoint_port,
            ),
        }
    }
}
