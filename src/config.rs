use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;

/// Hosted mock-data service the relay forwards to by default.
pub const DEFAULT_STORE_URL: &str = "https://6929e9609d311cddf34b9ae5.mockapi.io";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Where the client gateway reaches the relay.
    pub base_url: String,
    pub store: StoreBackend,
    pub store_timeout: Option<Duration>,
    pub max_body_size: usize,
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreBackend {
    Remote { base_url: String },
    Memory,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("LEADBOARD_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid LEADBOARD_HOST: {e}"))?;

        let port: u16 = env_or("LEADBOARD_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid LEADBOARD_PORT: {e}"))?;

        let base_url = env_or("LEADBOARD_BASE_URL", &default_base_url(host, port));

        let store = match env_or("LEADBOARD_STORE", "remote").as_str() {
            "remote" => StoreBackend::Remote {
                base_url: env_or("LEADBOARD_STORE_URL", DEFAULT_STORE_URL),
            },
            "memory" => StoreBackend::Memory,
            other => return Err(format!("Invalid LEADBOARD_STORE: '{other}' (expected remote or memory)")),
        };

        let store_timeout = match std::env::var("LEADBOARD_STORE_TIMEOUT_SECS").ok() {
            Some(secs) if !secs.trim().is_empty() => Some(Duration::from_secs(
                secs.trim()
                    .parse()
                    .map_err(|e| format!("Invalid LEADBOARD_STORE_TIMEOUT_SECS: {e}"))?,
            )),
            _ => None,
        };

        let max_body_size: usize = env_or("LEADBOARD_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid LEADBOARD_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("LEADBOARD_LOG_LEVEL", "info");

        Ok(Config {
            host,
            port,
            base_url,
            store,
            store_timeout,
            max_body_size,
            log_level,
        })
    }
}

/// Relay address for the gateway when `LEADBOARD_BASE_URL` is unset.
///
/// A wildcard bind is reached over loopback of the same family; any other
/// host is used as-is.
pub fn default_base_url(host: IpAddr, port: u16) -> String {
    let host = match host {
        IpAddr::V4(ip) if ip.is_unspecified() => IpAddr::V4(Ipv4Addr::LOCALHOST),
        IpAddr::V6(ip) if ip.is_unspecified() => IpAddr::V6(Ipv6Addr::LOCALHOST),
        other => other,
    };
    format!("http://{}", SocketAddr::new(host, port))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
