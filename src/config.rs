//! Snap configuration.
use crate::constants::DEFAULT_RPC_MAX_CONNECTIONS;
use eyre::Context;
use serde::{Deserialize, Serialize};
use std::{
    net::{IpAddr, Ipv4Addr},
    path::Path,
};
use url::Url;

/// Snap configuration.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SnapConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// The upstream Ethereum JSON-RPC endpoint used for gas estimation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upstream: Option<Url>,
    /// Gas price in wei to use when the upstream does not support fee queries.
    ///
    /// Without this, a failed gas price query fails the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_gas_price: Option<u128>,
    /// Native currency fees are quoted in.
    #[serde(default)]
    pub currency: CurrencyConfig,
}

impl SnapConfig {
    /// Sets the IP address to serve the RPC on.
    pub fn with_address(mut self, address: IpAddr) -> Self {
        self.server.address = address;
        self
    }

    /// Sets the port to serve the RPC on.
    pub fn with_port(mut self, port: u16) -> Self {
        self.server.port = port;
        self
    }

    /// Sets the maximum number of concurrent connections.
    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.server.max_connections = max_connections;
        self
    }

    /// Sets the upstream endpoint, keeping the existing one when `None`.
    pub fn with_upstream(mut self, upstream: Option<Url>) -> Self {
        if let Some(upstream) = upstream {
            self.upstream = Some(upstream);
        }
        self
    }

    /// Sets the fallback gas price, keeping the existing one when `None`.
    pub fn with_fallback_gas_price(mut self, price: Option<u128>) -> Self {
        if let Some(price) = price {
            self.fallback_gas_price = Some(price);
        }
        self
    }

    /// Load from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> eyre::Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .wrap_err_with(|| format!("failed to read config file: {}", path.display()))?;
        let config = serde_yaml::from_reader(&file)
            .wrap_err_with(|| format!("failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save to a YAML file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> eyre::Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The address to serve the RPC on.
    pub address: IpAddr,
    /// The port to serve the RPC on.
    pub port: u16,
    /// The maximum number of concurrent connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 9229,
            max_connections: DEFAULT_RPC_MAX_CONNECTIONS,
        }
    }
}

fn default_max_connections() -> u32 {
    DEFAULT_RPC_MAX_CONNECTIONS
}

/// The native currency fees are displayed in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// Display symbol.
    pub symbol: String,
    /// Number of decimals of the smallest subunit.
    pub decimals: u8,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self { symbol: "ETH".to_string(), decimals: 18 }
    }
}
