use anyhow::{Context, Result, anyhow};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "postgres" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(anyhow!(
                "STORE_BACKEND must be 'postgres' or 'memory', got '{}'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub store_backend: StoreBackend,
    pub database_url: Option<String>,
    pub db_min_conn: u32,
    pub db_max_conn: u32,
    pub run_migrations: bool,
    pub service_host: String,
    pub otel_endpoint: Option<String>,
    pub dev_mode: bool,
    pub enable_file_log: bool,
}

impl Config {
    pub fn init(default_port: u16) -> Result<Self> {
        Self::from_lookup(default_port, |key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup instead of the
    /// process environment.
    pub fn from_lookup<F>(default_port: u16, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .context("PORT must be a valid u16 integer")?,
            None => default_port,
        };

        let store_backend = match lookup("STORE_BACKEND") {
            Some(raw) => raw.parse::<StoreBackend>()?,
            None => StoreBackend::Postgres,
        };

        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        if store_backend == StoreBackend::Postgres && database_url.is_none() {
            return Err(anyhow!("Missing environment variable: DATABASE_URL"));
        }

        let db_min_conn = parse_u32(&lookup, "DB_MIN_CONN", 1)?;
        let db_max_conn = parse_u32(&lookup, "DB_MAX_CONN", 5)?;

        if db_max_conn == 0 {
            return Err(anyhow!("DB_MAX_CONN must be at least 1"));
        }

        if db_min_conn > db_max_conn {
            return Err(anyhow!(
                "DB_MIN_CONN ({}) must not exceed DB_MAX_CONN ({})",
                db_min_conn,
                db_max_conn
            ));
        }

        let run_migrations = match lookup("RUN_MIGRATIONS").as_deref() {
            None | Some("true") => true,
            Some("false") => false,
            Some(other) => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let service_host = lookup("SERVICE_HOST")
            .or_else(|| lookup("HOSTNAME"))
            .unwrap_or_else(|| "localhost".to_string());

        let otel_endpoint = lookup("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|e| !e.trim().is_empty());

        Ok(Self {
            port,
            store_backend,
            database_url,
            db_min_conn,
            db_max_conn,
            run_migrations,
            service_host,
            otel_endpoint,
            dev_mode: parse_flag(&lookup, "DEV_MODE"),
            enable_file_log: parse_flag(&lookup, "ENABLE_FILE_LOG"),
        })
    }
}

fn parse_u32<F>(lookup: &F, key: &str, default: u32) -> Result<u32>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .parse::<u32>()
            .with_context(|| format!("{key} must be a valid u32 integer")),
        None => Ok(default),
    }
}

fn parse_flag<F>(lookup: &F, key: &str) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false)
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
    fn memory_backend_needs_no_database() {
        let config =
            Config::from_lookup(7001, lookup_from(&[("STORE_BACKEND", "memory")])).unwrap();

        assert_eq!(config.port, 7001);
        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert!(config.database_url.is_none());
        assert!(config.run_migrations);
        assert_eq!(config.service_host, "localhost");
        assert!(config.otel_endpoint.is_none());
    }

    #[test]
    fn postgres_backend_requires_database_url() {
        let err = Config::from_lookup(7001, lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn reads_explicit_values() {
        let config = Config::from_lookup(
            7001,
            lookup_from(&[
                ("PORT", "8080"),
                ("DATABASE_URL", "postgres://localhost/products"),
                ("DB_MIN_CONN", "2"),
                ("DB_MAX_CONN", "10"),
                ("RUN_MIGRATIONS", "false"),
                ("HOSTNAME", "product-1"),
                ("DEV_MODE", "1"),
            ]),
        )
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.store_backend, StoreBackend::Postgres);
        assert_eq!(config.db_min_conn, 2);
        assert_eq!(config.db_max_conn, 10);
        assert!(!config.run_migrations);
        assert_eq!(config.service_host, "product-1");
        assert!(config.dev_mode);
        assert!(!config.enable_file_log);
    }

    #[test]
    fn rejects_bad_values() {
        let bad = [
            ("PORT", "seventy"),
            ("STORE_BACKEND", "mongo"),
            ("RUN_MIGRATIONS", "yes"),
            ("DB_MAX_CONN", "-1"),
        ];

        for (key, value) in bad {
            let result = Config::from_lookup(
                7001,
                lookup_from(&[("STORE_BACKEND", "memory"), (key, value)]),
            );
            assert!(result.is_err(), "{key}={value} should be rejected");
        }
    }

    #[test]
    fn rejects_zero_max_connections() {
        let err = Config::from_lookup(
            7001,
            lookup_from(&[
                ("STORE_BACKEND", "memory"),
                ("DB_MIN_CONN", "0"),
                ("DB_MAX_CONN", "0"),
            ]),
        )
        .unwrap_err();
        assert!(err.to_string().contains("DB_MAX_CONN must be at least 1"));
    }

    #[test]
    fn rejects_min_above_max() {
        let err = Config::from_lookup(
            7001,
            lookup_from(&[
                ("STORE_BACKEND", "memory"),
                ("DB_MIN_CONN", "6"),
                ("DB_MAX_CONN", "5"),
            ]),
        )
        .unwrap_err();
        assert!(err.to_string().contains("DB_MIN_CONN"));
    }
}
