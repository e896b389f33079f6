// ABOUTME: Handlebars helper functions for template rendering
// ABOUTME: Implements built-in template functions for timestamps, environment variables, and encoding

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::Utc;
use handlebars::{Context, Handlebars, Helper, Output, RenderContext, RenderError};
use std::env;
use uuid::Uuid;

/// Timestamp helper - formats current time with optional format string
pub fn timestamp_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let format = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .unwrap_or("%Y-%m-%d %H:%M:%S");

    let now = Utc::now();
    out.write(&now.format(format).to_string())?;
    Ok(())
}

/// UUID helper - generates a new UUID v4
pub fn uuid_helper(
    _h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    out.write(&Uuid::new_v4().to_string())?;
    Ok(())
}

/// Environment variable helper - gets environment variable value with optional default
pub fn env_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let var_name = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new("env helper requires variable name parameter"))?;

    let default_value = h.param(1).and_then(|v| v.value().as_str()).unwrap_or("");

    let value = env::var(var_name).unwrap_or_else(|_| default_value.to_string());
    out.write(&value)?;
    Ok(())
}

/// Base64 encode helper
pub fn base64_encode_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let input = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new("base64_encode helper requires input parameter"))?;

    out.write(&BASE64.encode(input.as_bytes()))?;
    Ok(())
}

/// Base64 decode helper
pub fn base64_decode_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let input = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new("base64_decode helper requires input parameter"))?;

    let decoded_bytes = BASE64
        .decode(input)
        .map_err(|e| RenderError::new(format!("Base64 decode error: {}", e)))?;

    let decoded_str = String::from_utf8(decoded_bytes)
        .map_err(|e| RenderError::new(format!("UTF-8 decode error: {}", e)))?;

    out.write(&decoded_str)?;
    Ok(())
}

/// Default helper - provides default value if variable is empty
pub fn default_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let value = h.param(0).and_then(|v| v.value().as_str()).unwrap_or("");

    let default_value = h
        .param(1)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new("default helper requires default value parameter"))?;

    let result = if value.is_empty() {
        default_value
    } else {
        value
    };

    out.write(result)?;
    Ok(())
}

/// Register all built-in helpers with a Handlebars instance
pub fn register_helpers(
    handlebars: &mut Handlebars,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    handlebars.register_helper("timestamp", Box::new(timestamp_helper));
    handlebars.register_helper("uuid", Box::new(uuid_helper));
    handlebars.register_helper("env", Box::new(env_helper));
    handlebars.register_helper("base64_encode", Box::new(base64_encode_helper));
    handlebars.register_helper("base64_decode", Box::new(base64_decode_helper));
    handlebars.register_helper("default", Box::new(default_helper));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use handlebars::Handlebars;

    fn create_test_handlebars() -> Handlebars<'static> {
        let mut handlebars = Handlebars::new();
        register_helpers(&mut handlebars).unwrap();
        handlebars
    }

    #[test]
    fn test_timestamp_helper() {
        let handlebars = create_test_handlebars();
        let result = handlebars
            .render_template("{{timestamp}}", &serde_json::json!({}))
            .unwrap();
        assert!(!result.is_empty());

        let result_formatted = handlebars
            .render_template("{{timestamp \"%Y\"}}", &serde_json::json!({}))
            .unwrap();
        assert_eq!(result_formatted.len(), 4);
    }

    #[test]
    fn test_uuid_helper() {
        let handlebars = create_test_handlebars();
        let result = handlebars
            .render_template("{{uuid}}", &serde_json::json!({}))
            .unwrap();
        assert_eq!(result.len(), 36);
        assert!(result.contains('-'));
    }

    #[test]
    fn test_env_helper() {
        std::env::set_var("ZPODGEN_TEST_VAR", "test_value");
        let handlebars = create_test_handlebars();
        let result = handlebars
            .render_template("{{env \"ZPODGEN_TEST_VAR\"}}", &serde_json::json!({}))
            .unwrap();
        assert_eq!(result, "test_value");

        let result_default = handlebars
            .render_template(
                "{{env \"ZPODGEN_NONEXISTENT_VAR\" \"default_value\"}}",
                &serde_json::json!({}),
            )
            .unwrap();
        assert_eq!(result_default, "default_value");
    }

    #[test]
    fn test_base64_helpers() {
        let handlebars = create_test_handlebars();
        let encoded = handlebars
            .render_template("{{base64_encode \"hello world\"}}", &serde_json::json!({}))
            .unwrap();
        assert_eq!(encoded, "aGVsbG8gd29ybGQ=");

        let template = format!("{{{{base64_decode \"{}\"}}}}", encoded);
        let decoded = handlebars
            .render_template(&template, &serde_json::json!({}))
            .unwrap();
        assert_eq!(decoded, "hello world");
    }

    #[test]
    fn test_default_helper() {
        let handlebars = create_test_handlebars();
        let result = handlebars
            .render_template("{{default \"\" \"fallback\"}}", &serde_json::json!({}))
            .unwrap();
        assert_eq!(result, "fallback");

        let result2 = handlebars
            .render_template("{{default \"value\" \"fallback\"}}", &serde_json::json!({}))
            .unwrap();
        assert_eq!(result2, "value");
    }
}
