// veda-ingest-core/src/infrastructure/config/settings.rs

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use validator::{Validate, ValidationError};

use crate::domain::profile::{EnvConfig, PROFILE_ENV_VAR, Profile};
use crate::domain::schema::TenantField;
use crate::infrastructure::error::InfrastructureError;

/// Overrides the tenant listing endpoint.
pub const TENANTS_URL_ENV_VAR: &str = "VEDA_TENANTS_URL";

pub const DEFAULT_SETTINGS_FILES: [&str; 2] = ["veda-ingest.yaml", "veda-ingest.yml"];

#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
pub struct Settings {
    /// Raw profile selector. Resolved forgivingly, see [`Settings::profile`].
    #[serde(rename = "profile", default)]
    pub profile_name: Option<String>,

    #[serde(rename = "tenants-url", default)]
    pub tenants_url: Option<String>,

    #[serde(rename = "tenant-field", default)]
    pub tenant_field: TenantField,

    /// Served by the tenant-listing endpoint and used when no URL is configured.
    #[serde(rename = "fallback-tenants", default = "default_fallback_tenants")]
    #[validate(custom(function = "validate_tenant_ids"))]
    pub fallback_tenants: Vec<String>,

    #[serde(rename = "request-timeout-secs", default = "default_request_timeout")]
    #[validate(range(min = 1, max = 300, message = "Timeout must be between 1 and 300 seconds"))]
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            profile_name: None,
            tenants_url: None,
            tenant_field: TenantField::default(),
            fallback_tenants: default_fallback_tenants(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl Settings {
    pub fn profile(&self) -> Profile {
        Profile::resolve(self.profile_name.as_deref())
    }

    pub fn env_config(&self) -> EnvConfig {
        EnvConfig::for_profile(self.profile())
    }

    /// Layering: environment variables win over the file.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup(PROFILE_ENV_VAR) {
            info!(old = ?self.profile_name, new = %val, "Overriding profile via ENV");
            self.profile_name = Some(val);
        }
        if let Some(val) = lookup(TENANTS_URL_ENV_VAR) {
            info!(old = ?self.tenants_url, new = %val, "Overriding tenants URL via ENV");
            self.tenants_url = Some(val);
        }
    }
}

// Placeholder directory served until a permissions-backed one exists.
fn default_fallback_tenants() -> Vec<String> {
    (1..=5).map(|i| format!("tenant{}", i)).collect()
}

fn default_request_timeout() -> u64 {
    10
}

fn validate_tenant_ids(tenants: &[String]) -> Result<(), ValidationError> {
    if tenants.iter().any(|t| t.trim().is_empty()) {
        let mut err = ValidationError::new("blank_tenant");
        err.message = Some("Tenant identifiers cannot be blank".into());
        return Err(err);
    }
    Ok(())
}

/// Loads `veda-ingest.yaml` from `dir` when present, defaults otherwise, then applies env overrides.
#[instrument(skip(dir))]
pub fn load_settings(dir: &Path) -> Result<Settings, InfrastructureError> {
    let mut settings = match find_settings_file(dir) {
        Some(path) => read_settings(&path)?,
        None => {
            debug!(dir = ?dir, "No settings file found, using defaults");
            Settings::default()
        }
    };
    settings.apply_env_overrides();
    settings.validate()?;
    Ok(settings)
}

/// Loads an explicitly named settings file. A missing file is an error here.
#[instrument]
pub fn load_settings_from(path: &Path) -> Result<Settings, InfrastructureError> {
    if !path.exists() {
        return Err(InfrastructureError::ConfigNotFound(
            path.display().to_string(),
        ));
    }
    let mut settings = read_settings(path)?;
    settings.apply_env_overrides();
    settings.validate()?;
    Ok(settings)
}

fn find_settings_file(dir: &Path) -> Option<PathBuf> {
    DEFAULT_SETTINGS_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.exists())
}

fn read_settings(path: &Path) -> Result<Settings, InfrastructureError> {
    info!(path = ?path, "Loading settings");
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings at {:?}", path))?;
    // An empty file is valid YAML for "everything default".
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    let settings: Settings = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse settings YAML at {:?}", path))?;
    Ok(settings)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.profile(), Profile::Local);
        assert_eq!(settings.tenant_field, TenantField::Tenants);
        assert_eq!(settings.fallback_tenants.len(), 5);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_parse_yaml_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        fs::write(
            dir.path().join("veda-ingest.yaml"),
            "profile: Disasters\n\
             tenant-field: tenant\n\
             fallback-tenants: [ghg, disasters]\n",
        )?;

        let settings = read_settings(&find_settings_file(dir.path()).unwrap())?;
        assert_eq!(settings.profile(), Profile::Disasters);
        assert_eq!(settings.env_config().repo, "disaster-data");
        assert_eq!(settings.tenant_field, TenantField::Tenant);
        assert_eq!(settings.fallback_tenants, vec!["ghg", "disasters"]);
        assert_eq!(settings.request_timeout_secs, 10);
        Ok(())
    }

    #[test]
    fn test_unknown_profile_in_file_falls_back() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("veda-ingest.yml");
        fs::write(&path, "profile: staging\n")?;

        let settings = read_settings(&path)?;
        assert_eq!(settings.profile(), Profile::Local);
        Ok(())
    }

    #[test]
    fn test_empty_file_means_defaults() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("veda-ingest.yaml");
        fs::write(&path, "\n")?;
        assert_eq!(read_settings(&path)?.fallback_tenants.len(), 5);
        Ok(())
    }

    #[test]
    fn test_env_overrides_win() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (PROFILE_ENV_VAR, "VEDA"),
            (TENANTS_URL_ENV_VAR, "http://localhost:9000/api/tenants"),
        ]);
        let mut settings = Settings {
            profile_name: Some("local".into()),
            ..Settings::default()
        };

        settings.apply_overrides_from(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(settings.profile(), Profile::Veda);
        assert_eq!(
            settings.tenants_url.as_deref(),
            Some("http://localhost:9000/api/tenants")
        );
    }

    #[test]
    fn test_blank_tenant_rejected() {
        let settings = Settings {
            fallback_tenants: vec!["ok".into(), "  ".into()],
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_timeout_range() {
        let settings = Settings {
            request_timeout_secs: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let err = load_settings_from(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, InfrastructureError::ConfigNotFound(_)));
    }

    #[test]
    fn test_malformed_yaml_is_an_error() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("veda-ingest.yaml");
        fs::write(&path, "fallback-tenants: {not: [a list\n")?;
        assert!(read_settings(&path).is_err());
        Ok(())
    }
}
