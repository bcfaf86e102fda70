use dashmap::DashMap;
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use strum_macros::{Display, EnumString};
use thiserror::Error;

pub const HOST_KEY: &str = "FARM_HOST";
pub const PORT_KEY: &str = "FARM_PORT";

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

/// Key/value configuration seeded from the process environment
#[derive(Clone, Default)]
pub struct ConfigService {
    config: Arc<DashMap<String, String>>,
}

impl ConfigService {
    /// An empty store; nothing is read from the environment.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let service = Self::new();
        for (key, value) in env::vars() {
            service.set(&key, &value);
        }
        service
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get(key).map(|v| v.clone())
    }

    pub fn set(&self, key: &str, value: &str) {
        self.config.insert(key.to_string(), value.to_string());
    }
}

/// Launcher profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Profile {
    /// Verbose logging and per-request HTTP spans.
    Dev,
    Prod,
}

impl Profile {
    /// Filter used when `RUST_LOG` is unset.
    pub fn default_log_filter(self) -> &'static str {
        match self {
            Profile::Dev => "info,farm_stack_basic=debug,tower_http=debug",
            Profile::Prod => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub profile: Profile,
}

impl ServerConfig {
    /// Both profiles listen on `127.0.0.1:8000` unless `FARM_HOST` or
    /// `FARM_PORT` say otherwise.
    pub fn for_profile(profile: Profile, config: &ConfigService) -> Result<Self, ConfigError> {
        let host = match config.get(HOST_KEY) {
            Some(value) => value.parse::<IpAddr>().map_err(|e| {
                ConfigError::InvalidValue {
                    key: HOST_KEY.to_string(),
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => DEFAULT_HOST,
        };

        let port = match config.get(PORT_KEY) {
            Some(value) => value.parse::<u16>().map_err(|e| {
                ConfigError::InvalidValue {
                    key: PORT_KEY.to_string(),
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host,
            port,
            profile,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_defaults_are_loopback_8000() {
        let config = ServerConfig::for_profile(Profile::Dev, &ConfigService::new()).unwrap();
        assert_eq!(config.addr(), "127.0.0.1:8000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.profile, Profile::Dev);

        let config = ServerConfig::for_profile(Profile::Prod, &ConfigService::new()).unwrap();
        assert_eq!(config.addr(), "127.0.0.1:8000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_overrides() {
        let service = ConfigService::new();
        service.set(HOST_KEY, "0.0.0.0");
        service.set(PORT_KEY, "9090");

        let config = ServerConfig::for_profile(Profile::Prod, &service).unwrap();
        assert_eq!(config.addr(), "0.0.0.0:9090".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_invalid_port() {
        let service = ConfigService::new();
        service.set(PORT_KEY, "eighty");

        let err = ServerConfig::for_profile(Profile::Prod, &service).unwrap_err();
        let ConfigError::InvalidValue { key, value, .. } = err;
        assert_eq!(key, PORT_KEY);
        assert_eq!(value, "eighty");
    }

    #[test]
    fn test_profile_names() {
        assert_eq!(Profile::Dev.to_string(), "dev");
        assert_eq!(Profile::from_str("prod").unwrap(), Profile::Prod);
        assert!(Profile::from_str("staging").is_err());
    }
}
