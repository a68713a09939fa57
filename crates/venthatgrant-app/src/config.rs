use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use venthatgrant_assist::Latency;
use venthatgrant_search::venice::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const CONFIG_FILE: &str = "config.json";

pub const DEFAULT_KEY_VARIABLE: &str = "VENICE_API_KEY";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub search_mode: SearchMode,
    pub endpoint: String,
    pub request_timeout_secs: u64,
    pub credentials: CredentialSource,
    /// Uniform assistant delay. `None` keeps the interactive defaults.
    #[serde(default)]
    pub assistant_latency_ms: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            search_mode: SearchMode::Live,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            credentials: CredentialSource::Environment {
                variable: DEFAULT_KEY_VARIABLE.to_string(),
            },
            assistant_latency_ms: None,
        }
    }
}

impl AppConfig {
    /// Reject settings no session could run with. A zero timeout would fail
    /// every live request.
    pub fn validate(&self) -> eyre::Result<()> {
        if self.request_timeout_secs == 0 {
            return Err(eyre::eyre!("request_timeout_secs must be at least 1"));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn assistant_latency(&self) -> Latency {
        self.assistant_latency_ms
            .map(|ms| Latency::uniform(Duration::from_millis(ms)))
            .unwrap_or_default()
    }

    /// The API key, if the configured source yields a non-empty one.
    pub fn api_key(&self) -> Option<String> {
        let key = match &self.credentials {
            CredentialSource::Environment { variable } => std::env::var(variable).ok()?,
            CredentialSource::Inline { api_key } => api_key.clone(),
        };
        let key = key.trim();
        (!key.is_empty()).then(|| key.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// The hosted search API.
    Live,
    /// The bundled demo catalog. Never contacts the network.
    Catalog,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CredentialSource {
    Environment { variable: String },
    Inline { api_key: String },
}

/// Redacted config info safe to print.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigInfo {
    pub search_mode: SearchMode,
    pub endpoint: String,
    pub request_timeout_secs: u64,
    pub credential_type: String,
    pub key_variable: Option<String>,
    pub key_hint: Option<String>,
}

pub fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.venthatgrant.app"))
}

pub fn has_config(dir: &Path) -> bool {
    dir.join(CONFIG_FILE).exists()
}

pub fn load_config(dir: &Path) -> eyre::Result<AppConfig> {
    let path = dir.join(CONFIG_FILE);
    let contents = std::fs::read_to_string(&path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0);
    let on_disk_version = u32::try_from(on_disk_version)
        .map_err(|_| eyre::eyre!("config_version {on_disk_version} is out of range"))?;

    let migrated = migrate(json, on_disk_version)?;
    let config: AppConfig = serde_json::from_value(migrated)?;
    config.validate()?;
    Ok(config)
}

/// The stored config, or defaults when none has been saved.
pub fn load_or_default(dir: &Path) -> eyre::Result<AppConfig> {
    if has_config(dir) {
        load_config(dir)
    } else {
        tracing::debug!(dir = %dir.display(), "no config file, using defaults");
        Ok(AppConfig::default())
    }
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update VenThatGrant."
        ));
    }

    // v0 → v1: search mode and request timeout became configurable
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("search_mode")
            .or_insert(serde_json::Value::String("live".to_string()));
        obj.entry("request_timeout_secs")
            .or_insert(serde_json::Value::Number(DEFAULT_TIMEOUT.as_secs().into()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added search_mode, request_timeout_secs)");
    }

    Ok(json)
}

pub fn save_config(dir: &Path, config: &AppConfig) -> eyre::Result<()> {
    config.validate()?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = dir.join("config.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    // Inline keys live in this file
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

pub fn delete_config(dir: &Path) -> eyre::Result<()> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        std::fs::remove_file(&path)?;
        tracing::info!(path = %path.display(), "config deleted");
    }
    Ok(())
}

pub fn config_info(config: &AppConfig) -> ConfigInfo {
    let (credential_type, key_variable, key_hint) = match &config.credentials {
        CredentialSource::Environment { variable } => {
            let hint = std::env::var(variable).ok().map(|k| redact_key(&k));
            ("environment".to_string(), Some(variable.clone()), hint)
        }
        CredentialSource::Inline { api_key } => {
            ("inline".to_string(), None, Some(redact_key(api_key)))
        }
    };

    ConfigInfo {
        search_mode: config.search_mode,
        endpoint: config.endpoint.clone(),
        request_timeout_secs: config.request_timeout_secs,
        credential_type,
        key_variable,
        key_hint,
    }
}

fn redact_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let prefix: String = chars[..4].iter().collect();
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    format!("{prefix}...{suffix}")
}
