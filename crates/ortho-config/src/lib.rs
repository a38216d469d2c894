//! Configuration for the Ortho console.
//!
//! Precedence, lowest to highest: built-in defaults, optional YAML file,
//! environment variables (`ORTHO_API_URL`, `ORTHO_STORE_DIR`,
//! `ORTHO_TIMEOUT_SECS`).
//!
//! Config files must never inline credentials: any leaf string that looks
//! like a token aborts the load. Tokens reach the process through the
//! environment or the local store only.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// Env var overriding `api.base_url`.
pub const ENV_API_URL: &str = "ORTHO_API_URL";
/// Env var overriding `store.dir`.
pub const ENV_STORE_DIR: &str = "ORTHO_STORE_DIR";
/// Env var overriding `api.timeout_secs`.
pub const ENV_TIMEOUT_SECS: &str = "ORTHO_TIMEOUT_SECS";

/// Known secret-like prefixes. If any leaf string value in the config file
/// starts with one of these, the load aborts: credentials do not belong in
/// config files.
const SECRET_PREFIXES: &[&str] = &[
    "sk-",        // Stripe / OpenAI style
    "sk_live",    // Stripe live
    "sk_test",    // Stripe test
    "Bearer ",    // pasted Authorization header
    "eyJ",        // JWT
    "ghp_",       // GitHub PAT
    "-----BEGIN", // PEM private keys
];

// ---------------------------------------------------------------------------
// Config types
// ---------------------------------------------------------------------------

/// Admin API connection settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Local store settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(".ortho"),
        }
    }
}

/// Full console configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrthoConfig {
    pub api: ApiConfig,
    pub store: StoreConfig,
}

impl OrthoConfig {
    /// Load configuration. `path = None` skips the file layer.
    pub fn load(path: Option<&Path>) -> Result<OrthoConfig> {
        let mut cfg = match path {
            Some(p) => {
                let raw = fs::read_to_string(p)
                    .with_context(|| format!("read config failed: {}", p.display()))?;
                reject_inline_secrets(&raw)
                    .with_context(|| format!("config rejected: {}", p.display()))?;
                serde_yaml::from_str(&raw)
                    .with_context(|| format!("parse config failed: {}", p.display()))?
            }
            None => OrthoConfig::default(),
        };
        apply_env_overrides(&mut cfg, |key| std::env::var(key).ok())?;
        Ok(cfg)
    }
}

// ---------------------------------------------------------------------------
// Layers
// ---------------------------------------------------------------------------

/// Apply env overrides via the given lookup (injectable for tests).
fn apply_env_overrides(
    cfg: &mut OrthoConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<()> {
    if let Some(url) = lookup(ENV_API_URL) {
        cfg.api.base_url = url;
    }
    if let Some(dir) = lookup(ENV_STORE_DIR) {
        cfg.store.dir = PathBuf::from(dir);
    }
    if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
        cfg.api.timeout_secs = raw
            .parse()
            .with_context(|| format!("{ENV_TIMEOUT_SECS} must be an integer, got {raw:?}"))?;
    }
    Ok(())
}

/// Scan every leaf string in the YAML document for secret-like prefixes.
fn reject_inline_secrets(raw: &str) -> Result<()> {
    let doc: serde_yaml::Value =
        serde_yaml::from_str(raw).context("config is not valid YAML")?;
    let mut path = Vec::new();
    scan_value(&doc, &mut path)
}

fn scan_value(value: &serde_yaml::Value, path: &mut Vec<String>) -> Result<()> {
    match value {
        serde_yaml::Value::String(s) => {
            for prefix in SECRET_PREFIXES {
                if s.starts_with(prefix) {
                    bail!(
                        "secret-like value at {}: credentials must come from the environment or the local store, never the config file",
                        if path.is_empty() { "<root>".to_string() } else { path.join(".") }
                    );
                }
            }
        }
        serde_yaml::Value::Mapping(map) => {
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    other => format!("{other:?}"),
                };
                path.push(key);
                scan_value(v, path)?;
                path.pop();
            }
        }
        serde_yaml::Value::Sequence(seq) => {
            for (i, v) in seq.iter().enumerate() {
                path.push(i.to_string());
                scan_value(v, path)?;
                path.pop();
            }
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_local_dev_friendly() {
        let cfg = OrthoConfig::default();
        assert_eq!(cfg.api.base_url, "http://127.0.0.1:8000");
        assert_eq!(cfg.api.timeout_secs, 10);
        assert_eq!(cfg.store.dir, PathBuf::from(".ortho"));
    }

    #[test]
    fn env_overrides_win_over_defaults() {
        let mut cfg = OrthoConfig::default();
        apply_env_overrides(&mut cfg, |key| match key {
            ENV_API_URL => Some("https://admin.example.net".to_string()),
            ENV_TIMEOUT_SECS => Some("30".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(cfg.api.base_url, "https://admin.example.net");
        assert_eq!(cfg.api.timeout_secs, 30);
        assert_eq!(cfg.store.dir, PathBuf::from(".ortho"));
    }

    #[test]
    fn non_numeric_timeout_is_an_error() {
        let mut cfg = OrthoConfig::default();
        let res = apply_env_overrides(&mut cfg, |key| {
            (key == ENV_TIMEOUT_SECS).then(|| "soon".to_string())
        });
        assert!(res.is_err());
    }

    #[test]
    fn inline_bearer_token_is_rejected() {
        let raw = "api:\n  base_url: https://x\n  auth: Bearer abc123\n";
        let err = reject_inline_secrets(raw).unwrap_err();
        assert!(err.to_string().contains("api.auth"), "{err}");
    }

    #[test]
    fn clean_config_passes_the_secret_scan() {
        let raw = "api:\n  base_url: https://admin.example.net\n  timeout_secs: 5\n";
        assert!(reject_inline_secrets(raw).is_ok());
    }
}
