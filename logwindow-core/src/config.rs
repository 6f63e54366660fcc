use std::env;
use std::path::{Path, PathBuf};

use crate::errors::ConfigError;

/// Bind address used when none is configured.
pub const DEFAULT_HTTP_BIND: &str = "127.0.0.1:5000";

/// Runtime environment used by the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    fn from_str(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Development,
        }
    }
}

/// Process configuration shared by the LogWindow binaries.
#[derive(Debug, Clone)]
pub struct CoreConfig {
    pub dataset_path: PathBuf,
    pub environment: Environment,
    pub node_name: String,
    pub http_bind: Option<String>,
}

impl CoreConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let dataset_path = read_required("DATASET_PATH")?;
        let environment = env::var("LOGWINDOW_ENV")
            .map(|raw| Environment::from_str(&raw))
            .unwrap_or_default();

        let node_name =
            env::var("LOGWINDOW_NODE_NAME").unwrap_or_else(|_| "logwindow-node".to_string());
        let http_bind = read_optional("LOGWINDOW_HTTP_BIND")?;

        Ok(Self {
            dataset_path: PathBuf::from(dataset_path),
            environment,
            node_name,
            http_bind,
        })
    }

    /// Loads configuration from env vars prefixed with the provided value (e.g. `SHOW_LOGS_`).
    pub fn from_env_with_prefix(prefix: &str) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let key = |suffix: &str| format!("{}{}", prefix, suffix);

        let dataset_path = read_required(&key("DATASET_PATH"))?;

        let environment = env::var(key("ENV"))
            .map(|raw| Environment::from_str(&raw))
            .unwrap_or_default();

        let node_name =
            env::var(key("NODE_NAME")).unwrap_or_else(|_| "logwindow-node".to_string());
        let http_bind = read_optional(&key("HTTP_BIND"))?;

        Ok(Self {
            dataset_path: PathBuf::from(dataset_path),
            environment,
            node_name,
            http_bind,
        })
    }

    /// Path of the NDJSON dataset loaded at startup.
    pub fn dataset_path(&self) -> &Path {
        &self.dataset_path
    }

    /// Address the HTTP listener binds to.
    pub fn http_bind(&self) -> &str {
        self.http_bind.as_deref().unwrap_or(DEFAULT_HTTP_BIND)
    }

    /// Whether the service is running in production.
    pub fn is_production(&self) -> bool {
        matches!(self.environment, Environment::Production)
    }
}

fn read_required(key: &str) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        Ok(_) | Err(env::VarError::NotPresent) => Err(ConfigError::MissingEnvVar(key.to_string())),
        Err(err) => Err(ConfigError::InvalidEnvVar {
            key: key.to_string(),
            source: err,
        }),
    }
}

fn read_optional(key: &str) -> Result<Option<String>, ConfigError> {
    match env::var(key) {
        Ok(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                Ok(Some(trimmed.to_string()))
            }
        }
        Err(env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(ConfigError::InvalidEnvVar {
            key: key.to_string(),
            source: err,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_prefixed_configuration() {
        std::env::set_var("CFG_TEST_A_DATASET_PATH", "/tmp/events.json");
        std::env::set_var("CFG_TEST_A_ENV", "prod");
        std::env::set_var("CFG_TEST_A_HTTP_BIND", " 0.0.0.0:9000 ");

        let cfg = CoreConfig::from_env_with_prefix("CFG_TEST_A_").expect("config should load");
        assert_eq!(cfg.dataset_path(), Path::new("/tmp/events.json"));
        assert!(cfg.is_production());
        assert_eq!(cfg.http_bind(), "0.0.0.0:9000");
        assert_eq!(cfg.node_name, "logwindow-node");
    }

    #[test]
    fn missing_dataset_path_is_reported() {
        std::env::remove_var("CFG_TEST_B_DATASET_PATH");
        let err = CoreConfig::from_env_with_prefix("CFG_TEST_B_").expect_err("must fail");
        assert!(matches!(err, ConfigError::MissingEnvVar(key) if key == "CFG_TEST_B_DATASET_PATH"));
    }

    #[test]
    fn bind_address_defaults_when_unset() {
        std::env::set_var("CFG_TEST_C_DATASET_PATH", "events.json");
        std::env::remove_var("CFG_TEST_C_HTTP_BIND");
        let cfg = CoreConfig::from_env_with_prefix("CFG_TEST_C_").expect("config should load");
        assert_eq!(cfg.http_bind(), DEFAULT_HTTP_BIND);
        assert_eq!(cfg.environment, Environment::Development);
    }

    #[test]
    fn prefixed_values_are_read_from_dotenv_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(
            dir.path().join(".env"),
            "CFG_TEST_D_DATASET_PATH=/srv/logs/events.ndjson\nCFG_TEST_D_NODE_NAME=paging-1\n",
        )
        .expect("write .env");
        std::env::remove_var("CFG_TEST_D_DATASET_PATH");
        std::env::remove_var("CFG_TEST_D_NODE_NAME");

        let previous = std::env::current_dir().expect("cwd");
        std::env::set_current_dir(dir.path()).expect("enter temp dir");
        let loaded = CoreConfig::from_env_with_prefix("CFG_TEST_D_");
        std::env::set_current_dir(previous).expect("restore cwd");

        let cfg = loaded.expect("config should load from .env");
        assert_eq!(cfg.dataset_path(), Path::new("/srv/logs/events.ndjson"));
        assert_eq!(cfg.node_name, "paging-1");
    }
}
