use std::env;

use anyhow::{Context, Result, anyhow};
use dotenvy::dotenv;
use sqlx::mysql::MySqlConnectOptions;

#[derive(Clone, Debug)]
pub struct Config {
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub db_max_connections: u32,
    pub db_acquire_timeout_secs: u64,

    pub server_addr: String,

    // Rate limiting, 0 disables
    pub rate_limit_per_min: u32,

    pub log_dir: String,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, so loading can be exercised
    /// without mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| anyhow!("{key} must be set"))
        };
        let or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            db_host: or_default("DB_HOST", "localhost"),
            db_port: or_default("DB_PORT", "3306")
                .parse()
                .context("DB_PORT must be a port number")?,
            db_user: required("DB_USER")?,
            db_password: or_default("DB_PASSWORD", ""),
            db_name: required("DB_NAME")?,
            db_max_connections: or_default("DB_MAX_CONNECTIONS", "10")
                .parse()
                .context("DB_MAX_CONNECTIONS must be a positive integer")?,
            db_acquire_timeout_secs: or_default("DB_ACQUIRE_TIMEOUT_SECS", "30")
                .parse()
                .context("DB_ACQUIRE_TIMEOUT_SECS must be a number of seconds")?,

            server_addr: or_default("SERVER_ADDR", "127.0.0.1:5000"),

            rate_limit_per_min: or_default("RATE_LIMIT_PER_MIN", "1000")
                .parse()
                .context("RATE_LIMIT_PER_MIN must be an integer")?,

            log_dir: or_default("LOG_DIR", "logs"),
            log_level: or_default("LOG_LEVEL", "debug"),
        })
    }

    pub fn connect_options(&self) -> MySqlConnectOptions {
        let options = MySqlConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .database(&self.db_name);

        if self.db_password.is_empty() {
            options
        } else {
            options.password(&self.db_password)
        }
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_fill_optional_settings() {
        let config = Config::from_lookup(lookup_from(&[("DB_USER", "hr"), ("DB_NAME", "staff")])).unwrap();

        assert_eq!(config.db_host, "localhost");
        assert_eq!(config.db_port, 3306);
        assert_eq!(config.db_password, "");
        assert_eq!(config.server_addr, "127.0.0.1:5000");
        assert_eq!(config.rate_limit_per_min, 1000);
        assert_eq!(config.db_max_connections, 10);
        assert_eq!(config.db_acquire_timeout_secs, 30);
        assert_eq!(config.log_dir, "logs");
    }

    #[test]
    fn explicit_values_win() {
        let config = Config::from_lookup(lookup_from(&[
            ("DB_HOST", "db.internal"),
            ("DB_PORT", "3307"),
            ("DB_USER", "hr"),
            ("DB_PASSWORD", "secret"),
            ("DB_NAME", "staff"),
            ("SERVER_ADDR", "0.0.0.0:8080"),
            ("RATE_LIMIT_PER_MIN", "0"),
        ]))
        .unwrap();

        assert_eq!(config.db_host, "db.internal");
        assert_eq!(config.db_port, 3307);
        assert_eq!(config.db_password, "secret");
        assert_eq!(config.server_addr, "0.0.0.0:8080");
        assert_eq!(config.rate_limit_per_min, 0);
    }

    #[test]
    fn missing_database_name_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[("DB_USER", "hr")])).unwrap_err();
        assert!(err.to_string().contains("DB_NAME"));
    }

    #[test]
    fn empty_user_counts_as_missing() {
        let err = Config::from_lookup(lookup_from(&[("DB_USER", ""), ("DB_NAME", "staff")])).unwrap_err();
        assert!(err.to_string().contains("DB_USER"));
    }

    #[test]
    fn bad_port_is_an_error() {
        let result = Config::from_lookup(lookup_from(&[
            ("DB_USER", "hr"),
            ("DB_NAME", "staff"),
            ("DB_PORT", "not-a-port"),
        ]));
        assert!(result.is_err());
    }
}
