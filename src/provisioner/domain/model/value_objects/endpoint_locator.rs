use std::fmt;

/// Hostname and port of a provisioned database, whichever topology produced it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EndpointLocator {
    hostname: String,
    port: u16,
}

impl EndpointLocator {
    pub fn new(hostname: String, port: u16) -> Result<Self, String> {
        let hostname = hostname.trim().to_string();

        if hostname.is_empty() {
            return Err("endpoint hostname is empty".to_string());
        }
        if port == 0 {
            return Err(format!("endpoint port for {hostname} is zero"));
        }

        Ok(Self { hostname, port })
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl fmt::Display for EndpointLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.hostname, self.port)
    }
}
