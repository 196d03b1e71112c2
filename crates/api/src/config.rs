//! Server configuration.

use std::net::SocketAddr;

use thiserror::Error;

use catalog_products::PageLimits;

pub const HTTP_ADDR_ENV: &str = "CATALOG_HTTP_ADDR";
pub const DEFAULT_PAGE_SIZE_ENV: &str = "CATALOG_DEFAULT_PAGE_SIZE";
pub const MAX_PAGE_SIZE_ENV: &str = "CATALOG_MAX_PAGE_SIZE";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a socket address like 0.0.0.0:8080 (got {value})")]
    InvalidAddr { name: &'static str, value: String },

    #[error("{name} must be a positive integer (got {value})")]
    InvalidSize { name: &'static str, value: String },

    #[error("default page size {default_size} exceeds max page size {max_size}")]
    PageSizeOrder { default_size: usize, max_size: usize },
}

/// Runtime configuration for the catalog server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Listen address.
    pub http_addr: SocketAddr,
    /// Page-size defaults applied to list requests.
    pub page_limits: PageLimits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            page_limits: PageLimits::default(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Unset or blank variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = env_string(&lookup, HTTP_ADDR_ENV) {
            config.http_addr = parse_addr(HTTP_ADDR_ENV, &addr)?;
        }
        if let Some(size) = env_size(&lookup, DEFAULT_PAGE_SIZE_ENV)? {
            config.page_limits.default_size = size;
        }
        if let Some(size) = env_size(&lookup, MAX_PAGE_SIZE_ENV)? {
            config.page_limits.max_size = size;
        }

        let PageLimits {
            default_size,
            max_size,
        } = config.page_limits;
        if default_size > max_size {
            return Err(ConfigError::PageSizeOrder {
                default_size,
                max_size,
            });
        }

        Ok(config)
    }
}

fn env_string<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn env_size<F>(lookup: &F, name: &'static str) -> Result<Option<usize>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(v) = env_string(lookup, name) else {
        return Ok(None);
    };
    match v.parse::<usize>() {
        Ok(n) if n > 0 => Ok(Some(n)),
        _ => Err(ConfigError::InvalidSize { name, value: v }),
    }
}

fn parse_addr(name: &'static str, value: &str) -> Result<SocketAddr, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidAddr {
        name,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.http_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.page_limits.default_size, 50);
        assert_eq!(config.page_limits.max_size, 1000);
    }

    #[test]
    fn reads_every_variable() {
        let config = Config::from_lookup(lookup(&[
            (HTTP_ADDR_ENV, "127.0.0.1:9000"),
            (DEFAULT_PAGE_SIZE_ENV, "20"),
            (MAX_PAGE_SIZE_ENV, " 200 "),
        ]))
        .unwrap();

        assert_eq!(config.http_addr, SocketAddr::from(([127, 0, 0, 1], 9000)));
        assert_eq!(config.page_limits.default_size, 20);
        assert_eq!(config.page_limits.max_size, 200);
    }

    #[test]
    fn blank_values_keep_defaults() {
        let config = Config::from_lookup(lookup(&[(HTTP_ADDR_ENV, "   ")])).unwrap();
        assert_eq!(config.http_addr, Config::default().http_addr);
    }

    #[test]
    fn rejects_bad_address() {
        let err = Config::from_lookup(lookup(&[(HTTP_ADDR_ENV, "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAddr { .. }));
    }

    #[test]
    fn rejects_zero_and_non_numeric_sizes() {
        for bad in ["0", "-1", "ten"] {
            let err =
                Config::from_lookup(lookup(&[(DEFAULT_PAGE_SIZE_ENV, bad)])).unwrap_err();
            assert_eq!(
                err,
                ConfigError::InvalidSize {
                    name: DEFAULT_PAGE_SIZE_ENV,
                    value: bad.to_string()
                }
            );
        }
    }

    #[test]
    fn default_size_must_not_exceed_max() {
        let err = Config::from_lookup(lookup(&[
            (DEFAULT_PAGE_SIZE_ENV, "500"),
            (MAX_PAGE_SIZE_ENV, "100"),
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::PageSizeOrder {
                default_size: 500,
                max_size: 100
            }
        );
    }
}
