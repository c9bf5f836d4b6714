// File: src/config.rs
// Purpose: DOM identifiers and CSS classes used by the browser binding

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::FormError;
use crate::field::FieldId;
use crate::view::OutputKind;

/// Element ids and class names the form markup uses
///
/// Field control ids are fixed by [`FieldId::id`]; everything around them
/// is configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default = "default_form_id")]
    pub form_id: String,

    #[serde(default = "default_submit_id")]
    pub submit_id: String,

    #[serde(default = "default_output_id")]
    pub output_id: String,

    /// Appended to a field id to find its error element (`ownerNameError`)
    #[serde(default = "default_error_suffix")]
    pub error_suffix: String,

    #[serde(default = "default_highlight_class")]
    pub highlight_class: String,

    #[serde(default = "default_success_class")]
    pub success_class: String,

    #[serde(default = "default_error_class")]
    pub error_class: String,
}

// Default values
fn default_form_id() -> String {
    "registerForm".to_string()
}

fn default_submit_id() -> String {
    "submitBtn".to_string()
}

fn default_output_id() -> String {
    "outputMessage".to_string()
}

fn default_error_suffix() -> String {
    "Error".to_string()
}

fn default_highlight_class() -> String {
    "highlight-error".to_string()
}

fn default_success_class() -> String {
    "success".to_string()
}

fn default_error_class() -> String {
    "error".to_string()
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form_id: default_form_id(),
            submit_id: default_submit_id(),
            output_id: default_output_id(),
            error_suffix: default_error_suffix(),
            highlight_class: default_highlight_class(),
            success_class: default_success_class(),
            error_class: default_error_class(),
        }
    }
}

impl FormConfig {
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, FormError> {
        Ok(toml::from_str(content)?)
    }

    /// Load from a TOML file, falling back to defaults when it doesn't exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn error_element_id(&self, field: FieldId) -> String {
        format!("{}{}", field.id(), self.error_suffix)
    }

    pub fn output_class(&self, kind: OutputKind) -> &str {
        match kind {
            OutputKind::Success => &self.success_class,
            OutputKind::Error => &self.error_class,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert_eq!(config.form_id, "registerForm");
        assert_eq!(config.submit_id, "submitBtn");
        assert_eq!(config.output_id, "outputMessage");
        assert_eq!(config.highlight_class, "highlight-error");
        assert_eq!(config.error_element_id(FieldId::RegDate), "regDateError");
        assert_eq!(config.output_class(OutputKind::Success), "success");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = FormConfig::from_toml_str(
            r#"
            form_id = "vehicleForm"
            error_suffix = "-error"
            "#,
        )
        .unwrap();

        assert_eq!(config.form_id, "vehicleForm");
        assert_eq!(config.error_element_id(FieldId::Terms), "terms-error");
        assert_eq!(config.submit_id, "submitBtn");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = FormConfig::from_toml_str("form_id = [").unwrap_err();
        assert!(matches!(err, FormError::Config(_)));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = FormConfig::load("does/not/exist/regform.toml").unwrap();
        assert_eq!(config, FormConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("regform-config-{}.toml", std::process::id()));
        fs::write(&path, "highlight_class = \"is-invalid\"\n").unwrap();

        let config = FormConfig::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.highlight_class, "is-invalid");
        assert_eq!(config.error_class, "error");
    }
}
