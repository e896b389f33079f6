// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides builders for deployment fixtures shared across test suites

#![allow(dead_code)]

use serde_json::{json, Map, Value};
use zpodgen::model::{DnsRecord, Setting, Zpod};

/// Builder for zPod deployment fixtures.
pub struct ZpodBuilder {
    fields: Map<String, Value>,
    networks: Vec<Value>,
    components: Vec<Value>,
}

impl ZpodBuilder {
    pub fn new(name: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("id".to_string(), json!(1));
        fields.insert("name".to_string(), json!(name));
        Self {
            fields,
            networks: Vec::new(),
            components: Vec::new(),
        }
    }

    pub fn with_field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    pub fn with_domain(self, domain: &str) -> Self {
        self.with_field("domain", json!(domain))
    }

    pub fn with_status(self, status: &str) -> Self {
        self.with_field("status", json!(status))
    }

    pub fn with_network(mut self, cidr: &str) -> Self {
        self.networks.push(json!({"cidr": cidr}));
        self
    }

    pub fn with_component(mut self, name: &str, ip: &str) -> Self {
        self.components.push(json!({"name": name, "ip": ip}));
        self
    }

    pub fn build(mut self) -> Zpod {
        self.fields
            .insert("networks".to_string(), Value::Array(self.networks));
        self.fields
            .insert("components".to_string(), Value::Array(self.components));
        serde_json::from_value(Value::Object(self.fields)).expect("valid zPod fixture")
    }
}

pub fn setting(name: &str, value: Value) -> Setting {
    serde_json::from_value(json!({"name": name, "value": value})).expect("valid setting fixture")
}

pub fn dns_record(ip: &str, hostname: &str) -> DnsRecord {
    DnsRecord {
        ip: ip.to_string(),
        hostname: hostname.to_string(),
    }
}
