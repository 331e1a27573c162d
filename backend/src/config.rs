//! # Configuration
//!
//! Runtime settings read from environment variables. Every setting has a
//! default so the server starts with no configuration at all.

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:fincapiza.db";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BOVINE_SPECIES_ID: i64 = 1;
pub const DEFAULT_EQUINE_SPECIES_ID: i64 = 2;

/// Species ids the dashboard counts separately
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummarySpecies {
    pub bovine_id: i64,
    pub equine_id: i64,
}

impl Default for SummarySpecies {
    fn default() -> Self {
        Self {
            bovine_id: DEFAULT_BOVINE_SPECIES_ID,
            equine_id: DEFAULT_EQUINE_SPECIES_ID,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub max_connections: u32,
    /// When unset any origin may call the API
    pub cors_allowed_origin: Option<HeaderValue>,
    /// Built frontend assets served for non-API paths
    pub frontend_dist: Option<PathBuf>,
    pub summary_species: SummarySpecies,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let database_url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let host = parse_or(get("HOST"), "HOST", IpAddr::from_str(DEFAULT_HOST)?)?;
        let port = parse_or(get("PORT"), "PORT", DEFAULT_PORT)?;
        let max_connections = parse_or(get("DB_MAX_CONNECTIONS"), "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        if max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        let summary_species = SummarySpecies {
            bovine_id: parse_or(get("BOVINE_SPECIES_ID"), "BOVINE_SPECIES_ID", DEFAULT_BOVINE_SPECIES_ID)?,
            equine_id: parse_or(get("EQUINE_SPECIES_ID"), "EQUINE_SPECIES_ID", DEFAULT_EQUINE_SPECIES_ID)?,
        };

        let cors_allowed_origin = get("CORS_ALLOWED_ORIGIN")
            .map(|origin| {
                HeaderValue::from_str(&origin)
                    .with_context(|| format!("Invalid value for CORS_ALLOWED_ORIGIN: {:?}", origin))
            })
            .transpose()?;

        Ok(Self {
            database_url,
            host,
            port,
            max_connections,
            cors_allowed_origin,
            frontend_dist: get("FRONTEND_DIST").map(PathBuf::from),
            summary_species,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T>(raw: Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(value) => value
            .trim()
            .parse::<T>()
            .with_context(|| format!("Invalid value for {}: {:?}", key, value)),
        None => Ok(default),
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
    fn test_defaults_when_environment_is_empty() {
        let config = AppConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3001");
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(config.cors_allowed_origin, None);
        assert_eq!(config.frontend_dist, None);
        assert_eq!(config.summary_species, SummarySpecies::default());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite:/tmp/farm.db"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("CORS_ALLOWED_ORIGIN", "http://localhost:8081"),
            ("FRONTEND_DIST", "frontend/dist"),
            ("BOVINE_SPECIES_ID", "10"),
            ("EQUINE_SPECIES_ID", "11"),
        ]))
        .unwrap();

        assert_eq!(config.database_url, "sqlite:/tmp/farm.db");
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(
            config.cors_allowed_origin,
            Some(HeaderValue::from_static("http://localhost:8081"))
        );
        assert_eq!(config.frontend_dist, Some(PathBuf::from("frontend/dist")));
        assert_eq!(config.summary_species, SummarySpecies { bovine_id: 10, equine_id: 11 });
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[("PORT", "  "), ("DATABASE_URL", "")])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("PORT", "not-a-port")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));

        assert!(AppConfig::from_lookup(lookup_from(&[("DB_MAX_CONNECTIONS", "0")])).is_err());
        assert!(AppConfig::from_lookup(lookup_from(&[("HOST", "localhost:80")])).is_err());
    }

    #[test]
    fn test_cors_origin_is_trimmed_and_validated() {
        let config = AppConfig::from_lookup(lookup_from(&[("CORS_ALLOWED_ORIGIN", "http://finca.local\r\n")])).unwrap();
        assert_eq!(
            config.cors_allowed_origin,
            Some(HeaderValue::from_static("http://finca.local"))
        );

        let err = AppConfig::from_lookup(lookup_from(&[("CORS_ALLOWED_ORIGIN", "http://finca.local\nevil")])).unwrap_err();
        assert!(err.to_string().contains("CORS_ALLOWED_ORIGIN"));
    }
}
