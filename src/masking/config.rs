//! Masking configuration

use crate::masking::policy::MaskingPolicy;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Masking engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaskingConfig {
    /// Per-field masking modes
    #[serde(default)]
    pub policy: MaskingPolicy,

    /// Salt for hashed tokens; generated at engine creation when unset, so
    /// hashed tokens are only stable across runs that configure a salt
    pub salt: Option<String>,

    /// Constant placeholder emitted by fixed masking
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Trailing digits kept by keep-last masking
    #[serde(default = "default_keep_last_digits")]
    pub keep_last_digits: usize,

    /// Per-field prefixes for hashed tokens; fields without an entry use
    /// their uppercased name
    #[serde(default)]
    pub token_prefixes: BTreeMap<String, String>,

    /// Per-field word lists for dictionary masking; fields without an entry
    /// draw from a built-in name list
    #[serde(default)]
    pub dictionaries: BTreeMap<String, Vec<String>>,

    /// Dry-run mode (classify fields but return values unchanged)
    #[serde(default)]
    pub dry_run: bool,

    /// Audit logging configuration
    #[serde(default)]
    pub audit: AuditConfig,
}

fn default_placeholder() -> String {
    "********".to_string()
}

fn default_keep_last_digits() -> usize {
    4
}

impl Default for MaskingConfig {
    fn default() -> Self {
        Self {
            policy: MaskingPolicy::new(),
            salt: None,
            placeholder: default_placeholder(),
            keep_last_digits: default_keep_last_digits(),
            token_prefixes: BTreeMap::new(),
            dictionaries: BTreeMap::new(),
            dry_run: false,
            audit: AuditConfig::default(),
        }
    }
}

impl MaskingConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.policy.validate().context("Invalid masking policy")?;

        if self.placeholder.is_empty() {
            anyhow::bail!("Placeholder must not be empty");
        }

        if self.keep_last_digits == 0 {
            anyhow::bail!("keep_last_digits must be at least 1");
        }

        if let Some(ref salt) = self.salt {
            if salt.trim().is_empty() {
                anyhow::bail!("Salt must not be blank when configured");
            }
        }

        for (field, words) in &self.dictionaries {
            if words.is_empty() {
                anyhow::bail!("Dictionary for field '{field}' must not be empty");
            }
            if words.iter().any(|w| w.trim().is_empty()) {
                anyhow::bail!("Dictionary for field '{field}' contains a blank word");
            }
        }

        self.audit
            .validate()
            .context("Invalid audit configuration")?;

        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("SYNSTYL_MASKING_SALT") {
            self.salt = Some(val);
        }

        if let Ok(val) = std::env::var("SYNSTYL_MASKING_PLACEHOLDER") {
            self.placeholder = val;
        }

        if let Ok(val) = std::env::var("SYNSTYL_MASKING_KEEP_LAST") {
            self.keep_last_digits = val
                .parse()
                .context("Invalid SYNSTYL_MASKING_KEEP_LAST value")?;
        }

        if let Ok(val) = std::env::var("SYNSTYL_MASKING_DRY_RUN") {
            self.dry_run = val.parse().context("Invalid SYNSTYL_MASKING_DRY_RUN value")?;
        }

        self.audit.apply_env_overrides()?;

        Ok(())
    }
}

/// Audit logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable audit logging; off by default so the engine performs no disk
    /// I/O unless the caller opts in
    #[serde(default)]
    pub enabled: bool,

    /// Audit log file path
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,

    /// Use JSON lines format for audit entries
    #[serde(default = "default_audit_json_format")]
    pub json_format: bool,
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/masking.log")
}

fn default_audit_json_format() -> bool {
    true
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_path: default_audit_log_path(),
            json_format: default_audit_json_format(),
        }
    }
}

impl AuditConfig {
    /// Validate audit configuration
    pub fn validate(&self) -> Result<()> {
        if self.enabled {
            if let Some(parent) = self.log_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create audit log directory: {}", parent.display())
                    })?;
                }
            }
        }
        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("SYNSTYL_AUDIT_ENABLED") {
            self.enabled = val.parse().context("Invalid SYNSTYL_AUDIT_ENABLED value")?;
        }

        if let Ok(val) = std::env::var("SYNSTYL_AUDIT_LOG_PATH") {
            self.log_path = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("SYNSTYL_AUDIT_JSON_FORMAT") {
            self.json_format = val
                .parse()
                .context("Invalid SYNSTYL_AUDIT_JSON_FORMAT value")?;
        }

        Ok(())
    }
}
