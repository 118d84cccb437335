//! Label types for Prometheus metrics

use prometheus_client::encoding::EncodeLabelSet;

/// Endpoints whose invocations are counted
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Endpoint {
    User,
    Container,
    Health,
}

impl Endpoint {
    pub const ALL: [Endpoint; 3] = [Endpoint::User, Endpoint::Container, Endpoint::Health];

    pub fn path(self) -> &'static str {
        match self {
            Endpoint::User => "/user",
            Endpoint::Container => "/container",
            Endpoint::Health => "/health",
        }
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct RequestLabels {
    pub method: String,
    pub endpoint: String,
}

impl From<Endpoint> for RequestLabels {
    fn from(endpoint: Endpoint) -> Self {
        Self {
            method: "GET".to_string(),
            endpoint: endpoint.path().to_string(),
        }
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct AppInfoLabels {
    pub version: String,
    pub container_id: String,
}
