// ABOUTME: Command implementations for the zpodgen CLI
// ABOUTME: Handles execution of the generate and list commands

use anyhow::{anyhow, Context as _, Result};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::config::Config;
use crate::api::ApiClient;
use crate::context::Assembler;
use crate::template::TemplateEngine;

pub struct GenerateOptions {
    pub zpod_name: String,
    pub template: PathBuf,
    pub extra_vars: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub require_network: bool,
    pub strict_overrides: bool,
}

/// Fetch zPod metadata and render a template
pub async fn generate(options: GenerateOptions, host: &str, token: &str, config: &Config) -> Result<()> {
    // Load overrides before touching the network so bad input fails fast
    let extra_vars = load_extra_vars(options.extra_vars.as_deref(), &config.template_vars)?;

    let template_content = std::fs::read_to_string(&options.template).with_context(|| {
        format!(
            "Failed to read template file {}",
            options.template.display()
        )
    })?;

    let client = ApiClient::new(host, token)?;

    info!("Fetching zPod '{}' from {}", options.zpod_name, host);
    let zpod = client.get_zpod(&options.zpod_name).await?;

    let dns_records = match zpod.id {
        Some(id) => {
            info!("Fetching DNS entries for zPod id={}", id);
            client.get_dns_records(id).await
        }
        None => {
            warn!("zPod '{}' has no id, skipping DNS entries", zpod.name);
            Vec::new()
        }
    };

    info!("Fetching zPodFactory settings");
    let settings = client.get_settings().await;

    let assembler = Assembler::new()
        .factory_host(host)
        .require_network(options.require_network)
        .strict_overrides(options.strict_overrides);
    let context = assembler.assemble(
        &zpod,
        &dns_records,
        &settings,
        &settings,
        Some(&extra_vars),
    )?;
    info!("Assembled template context with {} variables", context.len());

    let engine = TemplateEngine::new()?;
    let rendered = engine
        .render(&template_content, &context)
        .with_context(|| format!("Failed to render {}", options.template.display()))?;

    match options.output {
        Some(output_path) => {
            std::fs::write(&output_path, &rendered).with_context(|| {
                format!("Failed to write output file {}", output_path.display())
            })?;
            info!("Output written to {}", output_path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

/// List available zPods
pub async fn list_zpods(host: &str, token: &str) -> Result<()> {
    let client = ApiClient::new(host, token)?;
    let zpods = client.list_zpods().await?;

    println!("Available zPods:");
    for zpod in &zpods {
        println!("  - {}", zpod.name);
    }

    Ok(())
}

/// Merge config-level template variables with an optional JSON override file.
/// File entries win over config entries; the file must contain a JSON object.
fn load_extra_vars(
    path: Option<&Path>,
    config_vars: &Map<String, Value>,
) -> Result<Map<String, Value>> {
    let mut merged = config_vars.clone();

    if let Some(path) = path {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read extra vars file {}", path.display()))?;
        let parsed: Value = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid JSON in extra vars file {}", path.display()))?;

        match parsed {
            Value::Object(vars) => merged.extend(vars),
            other => {
                return Err(anyhow!(
                    "Extra vars JSON must be an object, got {}",
                    json_type_name(&other)
                ))
            }
        }
    }

    Ok(merged)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
