// ABOUTME: Record types returned by the zPodFactory inventory API
// ABOUTME: Defines deployment, network, component, DNS, and setting record shapes

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One named virtual-lab deployment tracked by the inventory service.
///
/// Timestamp fields are carried as plain strings and passed through to the
/// template context verbatim, so rendering the same deployment twice produces
/// byte-identical output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zpod {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub creation_date: Option<String>,
    #[serde(default)]
    pub last_modified_date: Option<String>,
    #[serde(default)]
    pub networks: Vec<Network>,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub endpoint: Option<Value>,
    #[serde(default)]
    pub features: Option<Value>,
    #[serde(default)]
    pub permissions: Vec<Value>,
}

/// One managed network belonging to a deployment.
///
/// Only the CIDR is interpreted; every other field the API returns is kept
/// as-is so templates can reach it through `zpod_networks`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    #[serde(default)]
    pub cidr: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One deployed host or service instance within a deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub fqdn: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One DNS entry attached to a deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnsRecord {
    pub ip: String,
    pub hostname: String,
}

/// One factory-wide configuration item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Setting {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub value: Value,
}
