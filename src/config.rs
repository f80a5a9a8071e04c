use std::env;
use std::fmt;
use std::time::Duration;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";
const DEFAULT_DATABASE: &str = "mongo-golang";
const DEFAULT_COLLECTION: &str = "users";
const DEFAULT_OPERATION_TIMEOUT_SECS: u64 = 10;

/// Configuração do serviço, lida do ambiente (e do `.env` via dotenv)
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub mongodb_uri: String,
    pub mongodb_database: String,
    pub mongodb_collection: String,
    pub operation_timeout: Duration,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, PartialEq)]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid value for {}: {:?}", self.key, self.value)
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Monta a configuração a partir de uma função de lookup (facilita testes)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError {
                key: "PORT",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        let timeout_secs = match lookup("MONGODB_OPERATION_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| ConfigError {
                key: "MONGODB_OPERATION_TIMEOUT_SECS",
                value: raw,
            })?,
            None => DEFAULT_OPERATION_TIMEOUT_SECS,
        }
        .max(1);

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            mongodb_uri: lookup("MONGODB_URI").unwrap_or_else(|| DEFAULT_MONGODB_URI.to_string()),
            mongodb_database: lookup("MONGODB_DATABASE")
                .unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            mongodb_collection: lookup("MONGODB_COLLECTION")
                .unwrap_or_else(|| DEFAULT_COLLECTION.to_string()),
            operation_timeout: Duration::from_secs(timeout_secs),
            cors_allowed_origins,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.mongodb_uri, "mongodb://localhost:27017");
        assert_eq!(config.mongodb_database, "mongo-golang");
        assert_eq!(config.mongodb_collection, "users");
        assert_eq!(config.operation_timeout, Duration::from_secs(10));
        assert!(config.cors_allowed_origins.is_empty());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "3002"),
            ("MONGODB_URI", "mongodb://db:27017"),
            ("MONGODB_DATABASE", "app"),
            ("MONGODB_COLLECTION", "people"),
            ("MONGODB_OPERATION_TIMEOUT_SECS", "0"),
            ("CORS_ALLOWED_ORIGINS", "http://localhost:3000, ,http://127.0.0.1:3000"),
        ]))
        .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:3002");
        assert_eq!(config.mongodb_uri, "mongodb://db:27017");
        assert_eq!(config.mongodb_database, "app");
        assert_eq!(config.mongodb_collection, "people");
        // minimo de 1s
        assert_eq!(config.operation_timeout, Duration::from_secs(1));
        assert_eq!(
            config.cors_allowed_origins,
            vec!["http://localhost:3000", "http://127.0.0.1:3000"]
        );
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert_eq!(err.key, "PORT");
        assert_eq!(err.value, "eighty");
    }

    #[test]
    fn test_invalid_timeout_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("MONGODB_OPERATION_TIMEOUT_SECS", "ten")]))
            .unwrap_err();
        assert_eq!(err.key, "MONGODB_OPERATION_TIMEOUT_SECS");
        assert_eq!(err.value, "ten");
    }
}
