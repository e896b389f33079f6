// ABOUTME: Name-keyed shortcut indexes for components and settings
// ABOUTME: Builds component_<name> and setting_<name> lookup maps for templates

use serde_json::{Map, Value};
use tracing::debug;

use super::error::Result;
use crate::model::{Component, Setting};

/// Normalize a record name into a safe identifier: lower-case, with every
/// character other than ASCII alphanumerics and underscore replaced by an
/// underscore.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Index components by normalized name under `component_<name>` keys.
///
/// Duplicate names after normalization are last-one-wins: the inventory
/// service is the authority on uniqueness, so a later entry silently replaces
/// an earlier one.
pub fn index_components(components: &[Component]) -> Result<Map<String, Value>> {
    let mut index = Map::new();

    for component in components {
        let key = format!("component_{}", sanitize_name(&component.name));
        if index.contains_key(&key) {
            debug!("Duplicate component name '{}', keeping the later entry", key);
        }
        index.insert(key, serde_json::to_value(component)?);
    }

    Ok(index)
}

/// Index setting values by normalized name under `setting_<name>` keys.
///
/// Only the value is stored; the full setting records are separately exposed
/// as `zpod_settings` for iteration.
pub fn index_settings(settings: &[Setting]) -> Map<String, Value> {
    let mut index = Map::new();

    for setting in settings {
        let key = format!("setting_{}", sanitize_name(&setting.name));
        if index.contains_key(&key) {
            debug!("Duplicate setting name '{}', keeping the later entry", key);
        }
        index.insert(key, setting.value.clone());
    }

    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn component(name: &str, ip: &str) -> Component {
        serde_json::from_value(json!({"name": name, "ip": ip})).unwrap()
    }

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("zbox"), "zbox");
        assert_eq!(sanitize_name("My-Comp.01"), "my_comp_01");
        assert_eq!(sanitize_name("VCSA 8"), "vcsa_8");
        assert_eq!(sanitize_name("already_safe"), "already_safe");
    }

    #[test]
    fn test_index_components() {
        let components = vec![component("zbox", "10.196.130.2"), component("vcsa-01", "10.196.130.10")];

        let index = index_components(&components).unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index["component_zbox"]["ip"], json!("10.196.130.2"));
        assert_eq!(index["component_vcsa_01"]["ip"], json!("10.196.130.10"));
    }

    #[test]
    fn test_index_components_last_one_wins() {
        let components = vec![component("zbox", "10.196.130.2"), component("ZBox", "10.196.130.9")];

        let index = index_components(&components).unwrap();

        assert_eq!(index.len(), 1);
        assert_eq!(index["component_zbox"]["ip"], json!("10.196.130.9"));
    }

    #[test]
    fn test_index_settings_stores_value_only() {
        let settings: Vec<Setting> = vec![
            serde_json::from_value(json!({
                "name": "zpodfactory_ssh_key",
                "description": "Factory public key",
                "value": "ssh-rsa AAAA"
            }))
            .unwrap(),
            serde_json::from_value(json!({"name": "Max Hosts", "value": 8})).unwrap(),
        ];

        let index = index_settings(&settings);

        assert_eq!(index["setting_zpodfactory_ssh_key"], json!("ssh-rsa AAAA"));
        assert_eq!(index["setting_max_hosts"], json!(8));
    }

    #[test]
    fn test_index_settings_last_one_wins() {
        let settings: Vec<Setting> = vec![
            serde_json::from_value(json!({"name": "ntp", "value": "a"})).unwrap(),
            serde_json::from_value(json!({"name": "NTP", "value": "b"})).unwrap(),
        ];

        let index = index_settings(&settings);

        assert_eq!(index.len(), 1);
        assert_eq!(index["setting_ntp"], json!("b"));
    }
}
