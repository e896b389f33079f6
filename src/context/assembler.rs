// ABOUTME: Template context assembly from deployment, DNS, and settings records
// ABOUTME: Builds the flat variable namespace consumed by the template engine

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};
use url::Url;

use super::error::{ContextError, Result};
use super::network::{self, DerivedNetwork};
use super::shortcuts;
use crate::model::{DnsRecord, Setting, Zpod};

/// Name of the component whose IP seeds `zpod_dns` and `zpod_nfs`.
const ZBOX_COMPONENT: &str = "zbox";

/// Name of the factory setting that carries the operator SSH public key.
const SSH_KEY_SETTING: &str = "zpodfactory_ssh_key";

/// How the management network is selected from a deployment's network list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MgmtNetwork {
    /// First network in the returned sequence (inventory service order).
    #[default]
    First,
    /// Explicit position, for deployments with several networks.
    Index(usize),
}

/// The flat variable namespace handed to the template renderer.
///
/// Keys are identifier-style names; insertion order is preserved so that the
/// documented precedence (later construction steps overwrite earlier ones) is
/// directly observable in the serialized form.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct TemplateContext {
    values: Map<String, Value>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.values.keys()
    }

    /// Convert the namespace to JSON for handlebars rendering.
    pub fn to_json(&self) -> Value {
        Value::Object(self.values.clone())
    }
}

/// Assembles the template context from records fetched by the API layer.
///
/// The assembler performs no I/O; every input, including the factory endpoint
/// used for `zpod_ntp`, is passed in explicitly.
#[derive(Debug, Clone, Default)]
pub struct Assembler {
    mgmt_network: MgmtNetwork,
    factory_host: Option<String>,
    require_network: bool,
    strict_overrides: bool,
}

impl Assembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the management network selection policy. Defaults to the first
    /// network in the deployment's list.
    pub fn mgmt_network(mut self, policy: MgmtNetwork) -> Self {
        self.mgmt_network = policy;
        self
    }

    /// Set the factory endpoint URL; its host portion becomes `zpod_ntp`.
    pub fn factory_host(mut self, host: impl Into<String>) -> Self {
        self.factory_host = Some(host.into());
        self
    }

    /// Treat a missing or underivable management network as a hard failure
    /// instead of omitting the four derived network keys.
    pub fn require_network(mut self, yes: bool) -> Self {
        self.require_network = yes;
        self
    }

    /// Reject extra variables that collide with computed keys instead of
    /// letting them overwrite.
    pub fn strict_overrides(mut self, yes: bool) -> Self {
        self.strict_overrides = yes;
        self
    }

    /// Build the template context.
    ///
    /// Construction order defines precedence: direct deployment fields,
    /// derived network values, computed infrastructure values, collection
    /// pass-throughs, shortcut indexes, then extra variables, with later
    /// steps overwriting earlier ones on key collision.
    pub fn assemble(
        &self,
        zpod: &Zpod,
        dns_records: &[DnsRecord],
        settings: &[Setting],
        factory_settings: &[Setting],
        extra_vars: Option<&Map<String, Value>>,
    ) -> Result<TemplateContext> {
        let mut context = TemplateContext::new();

        // 1. Direct deployment fields
        context.insert("zpod_id", serde_json::to_value(zpod.id)?);
        context.insert("zpod_name", Value::String(zpod.name.clone()));
        context.insert("zpod_description", serde_json::to_value(&zpod.description)?);
        context.insert("zpod_domain", serde_json::to_value(&zpod.domain)?);
        context.insert("zpod_password", serde_json::to_value(&zpod.password)?);
        context.insert("zpod_profile", serde_json::to_value(&zpod.profile)?);
        context.insert("zpod_status", serde_json::to_value(&zpod.status)?);
        context.insert(
            "zpod_creation_date",
            serde_json::to_value(&zpod.creation_date)?,
        );
        context.insert(
            "zpod_last_modified_date",
            serde_json::to_value(&zpod.last_modified_date)?,
        );

        // 2. Derived network values from the management network
        match self.derive_management_network(zpod) {
            Ok(derived) => {
                let DerivedNetwork {
                    subnet,
                    gateway,
                    netmask,
                    netprefix,
                } = derived;
                context.insert("zpod_subnet", Value::String(subnet));
                context.insert("zpod_gateway", Value::String(gateway));
                context.insert("zpod_netmask", Value::String(netmask));
                context.insert("zpod_netprefix", Value::from(netprefix));
            }
            Err(err) if self.require_network => return Err(err),
            Err(err) => {
                warn!(
                    "Skipping derived network fields for zPod '{}': {}",
                    zpod.name, err
                );
            }
        }

        // 3. Portgroup name, pure string formatting
        context.insert(
            "zpod_portgroup",
            Value::String(format!("zpod-{}-segment", zpod.name.to_lowercase())),
        );

        // 4. zbox-derived convenience values
        if let Some(ip) = self.zbox_ip(zpod) {
            context.insert("zpod_dns", Value::String(ip.clone()));
            context.insert("zpod_nfs", Value::String(ip));
        }

        // 5. NTP host from the factory endpoint, independent of deployment data
        if let Some(host) = self.factory_host.as_deref() {
            match endpoint_host(host) {
                Some(ntp_host) => context.insert("zpod_ntp", Value::String(ntp_host)),
                None => warn!("Cannot extract a host from factory endpoint '{}'", host),
            }
        }

        // 6. Factory SSH key
        if let Some(setting) = factory_settings
            .iter()
            .filter(|s| s.name == SSH_KEY_SETTING)
            .next_back()
        {
            context.insert("zpod_sshkey", setting.value.clone());
        }

        // 7. Collections, verbatim pass-through
        context.insert("zpod_components", serde_json::to_value(&zpod.components)?);
        context.insert("zpod_networks", serde_json::to_value(&zpod.networks)?);
        context.insert("zpod_dns_records", serde_json::to_value(dns_records)?);
        context.insert("zpod_endpoint", serde_json::to_value(&zpod.endpoint)?);
        context.insert("zpod_features", serde_json::to_value(&zpod.features)?);
        context.insert("zpod_settings", serde_json::to_value(settings)?);
        context.insert("zpod_permissions", serde_json::to_value(&zpod.permissions)?);

        // 8. Component and setting shortcuts
        for (key, value) in shortcuts::index_components(&zpod.components)? {
            context.insert(key, value);
        }
        for (key, value) in shortcuts::index_settings(settings) {
            context.insert(key, value);
        }

        // 9. Extra variables win over everything
        if let Some(extra) = extra_vars {
            for (key, value) in extra {
                if context.contains_key(key) {
                    if self.strict_overrides {
                        return Err(ContextError::VariableCollision(key.clone()));
                    }
                    debug!("Extra variable overrides computed key '{}'", key);
                }
                context.insert(key.clone(), value.clone());
            }
        }

        Ok(context)
    }

    fn derive_management_network(&self, zpod: &Zpod) -> Result<DerivedNetwork> {
        let index = match self.mgmt_network {
            MgmtNetwork::First => 0,
            MgmtNetwork::Index(n) => n,
        };

        let network = zpod.networks.get(index).ok_or_else(|| {
            ContextError::MissingDependency(format!(
                "zPod '{}' has no management network at position {}",
                zpod.name, index
            ))
        })?;

        let cidr = network
            .cidr
            .as_deref()
            .filter(|c| !c.is_empty())
            .ok_or_else(|| {
                ContextError::MissingDependency(format!(
                    "management network of zPod '{}' has no CIDR",
                    zpod.name
                ))
            })?;

        network::derive(cidr)
    }

    fn zbox_ip(&self, zpod: &Zpod) -> Option<String> {
        zpod.components
            .iter()
            .filter(|c| shortcuts::sanitize_name(&c.name) == ZBOX_COMPONENT)
            .filter_map(|c| c.ip.clone())
            .next_back()
    }
}

/// Extract the host portion of an endpoint URL. Accepts bare `host:port`
/// values by retrying with an `http://` scheme prepended.
fn endpoint_host(endpoint: &str) -> Option<String> {
    let parsed = Url::parse(endpoint)
        .ok()
        .filter(|u| u.host_str().is_some())
        .or_else(|| Url::parse(&format!("http://{}", endpoint)).ok())?;

    parsed.host_str().map(|h| h.to_string())
}
