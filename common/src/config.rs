use std::{collections::HashMap, path::Path};

use anyhow::{Context, Result};
use hocon::{Hocon, HoconLoader};

use crate::FsExt;

/// Reads scoped settings from a HOCON document.
///
/// Lookups first consult the process environment for a variable with the exact key name,
/// then the configured scope, then the document root.
#[derive(Debug)]
pub struct ConfigLoader {
    hocon: Hocon,
    env: HashMap<String, String>,
    scope: String,
}

impl ConfigLoader {
    pub fn new(path: impl AsRef<Path>, scope: String) -> Result<Self> {
        let path = path.as_ref().to_path_buf().existing_file()?;

        let hocon = HoconLoader::new()
            .load_file(&path)
            .with_context(|| format!("Failed to find or load config file at: {:?}", path))?
            .hocon()?;

        Ok(Self::with_hocon(hocon, scope))
    }

    pub fn from_str(content: &str, scope: String) -> Result<Self> {
        let hocon = HoconLoader::new()
            .load_str(content)
            .with_context(|| "Failed to parse config")?
            .hocon()?;

        Ok(Self::with_hocon(hocon, scope))
    }

    /// A loader with no document, so every key falls back to the environment or its default.
    pub fn without_file(scope: String) -> Result<Self> {
        Self::from_str("{}", scope)
    }

    fn with_hocon(hocon: Hocon, scope: String) -> Self {
        let env = std::env::vars().collect::<HashMap<_, _>>();

        Self { hocon, env, scope }
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.env.get(name) {
            return Some(Value::String(value.clone()));
        }

        let scope = &self.hocon[self.scope.as_str()];
        if matches!(scope, Hocon::Hash(_)) {
            if let Some(value) = Self::map_hocon(scope, name) {
                return Some(value);
            }
        }

        Self::map_hocon(&self.hocon, name)
    }

    pub fn load<T: Config>(&self) -> Result<T> {
        let res = T::load(self)?;
        Ok(res)
    }

    fn map_hocon(hocon: &Hocon, name: &str) -> Option<Value> {
        match &hocon[name] {
            Hocon::Real(f64) => Some(Value::Float(*f64 as f32)),
            Hocon::Integer(i64) => Some(Value::Integer(*i64 as usize)),
            Hocon::String(string) => Some(Value::String(string.clone())),
            Hocon::Boolean(bool) => Some(Value::Boolean(*bool)),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum Value {
    String(String),
    Integer(usize),
    Float(f32),
    Boolean(bool),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(val) => Some(*val),
            Value::String(val) => Hocon::String(val.clone()).as_bool(),
            _ => None,
        }
    }

    pub fn as_usize(&self) -> Option<usize> {
        match self {
            Value::Integer(val) => Some(*val),
            Value::String(val) => val.parse::<usize>().ok(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.as_usize().map(|v| v as u64)
    }

    pub fn as_string(&self) -> Option<String> {
        match self {
            Value::String(val) => Some(val.clone()),
            Value::Boolean(true) => Some("true".to_string()),
            Value::Boolean(false) => Some("false".to_string()),
            Value::Float(val) => Some(val.to_string()),
            Value::Integer(val) => Some(val.to_string()),
        }
    }
}

pub trait Config {
    fn load(config: &ConfigLoader) -> Result<Self>
    where
        Self: Sized;
}

#[cfg(test)]
mod tests {
    use super::ConfigLoader;

    const CONFIG: &str = r#"
        request_timeout_ms = 500
        player {
            config_test_env_url = "http://env:8000"
            config_test_retries = 3
        }
    "#;

    #[test]
    fn test_scope_then_root() {
        let config = ConfigLoader::from_str(CONFIG, "player".to_string()).unwrap();

        assert_eq!(
            config
                .get("config_test_env_url")
                .and_then(|v| v.as_string()),
            Some("http://env:8000".to_string())
        );
        assert_eq!(
            config.get("config_test_retries").and_then(|v| v.as_usize()),
            Some(3)
        );
        assert_eq!(
            config.get("request_timeout_ms").and_then(|v| v.as_u64()),
            Some(500)
        );
        assert!(config.get("config_test_missing").is_none());
    }

    #[test]
    fn test_environment_overrides_document() {
        std::env::set_var("config_test_override", "from-env");
        let config = ConfigLoader::from_str(
            r#"player { config_test_override = "from-file" }"#,
            "player".to_string(),
        )
        .unwrap();

        assert_eq!(
            config
                .get("config_test_override")
                .and_then(|v| v.as_string()),
            Some("from-env".to_string())
        );
    }

    #[test]
    fn test_without_file() {
        let config = ConfigLoader::without_file("player".to_string()).unwrap();

        assert!(config.get("config_test_nothing_here").is_none());
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();

        assert!(ConfigLoader::new(dir.path().join("nope.conf"), "player".to_string()).is_err());
    }
}
