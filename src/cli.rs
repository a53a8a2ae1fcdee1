//! # Snap CLI
use crate::{
    config::SnapConfig,
    constants::DEFAULT_RPC_MAX_CONNECTIONS,
    rpc::{Snap, SnapApiServer},
};
use alloy::providers::ProviderBuilder;
use clap::Parser;
use eyre::OptionExt;
use jsonrpsee::server::{Server, ServerConfig};
use std::{
    net::{IpAddr, Ipv4Addr},
    path::PathBuf,
};
use tower::ServiceBuilder;
use tower_http::cors::{AllowMethods, AllowOrigin, CorsLayer};
use tracing::info;
use url::Url;

/// The EthZip snap service estimates deployment gas savings for bytecode pairs.
#[derive(Debug, Parser)]
#[command(author, version, about = "EthZip snap", long_about = None)]
pub struct Args {
    /// The configuration file.
    ///
    /// If missing, a default one will be stored in the working directory under
    /// `snap.yaml`.
    #[arg(long, value_name = "CONFIG", env = "SNAP_CONFIG", default_value = "snap.yaml")]
    pub config: PathBuf,
    /// The address to serve the RPC on.
    #[arg(long = "http.addr", value_name = "ADDR", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub address: IpAddr,
    /// The port to serve the RPC on.
    #[arg(long = "http.port", value_name = "PORT", default_value_t = 9229)]
    pub port: u16,
    /// The RPC endpoint of the chain to estimate deployments against.
    ///
    /// Must be a valid HTTP or HTTPS URL pointing to an Ethereum JSON-RPC endpoint.
    #[arg(long, value_name = "RPC_ENDPOINT", env = "SNAP_UPSTREAM")]
    pub upstream: Option<Url>,
    /// Gas price in wei to fall back to when the upstream does not support fee
    /// queries.
    #[arg(long = "fallback-gas-price", value_name = "WEI")]
    pub fallback_gas_price: Option<u128>,
    /// The maximum number of concurrent connections.
    #[arg(long = "max-connections", value_name = "NUM", default_value_t = DEFAULT_RPC_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl Args {
    /// Run the snap service.
    pub async fn run(self) -> eyre::Result<()> {
        let config = if self.config.exists() {
            SnapConfig::load_from_file(&self.config)?
        } else {
            let config = SnapConfig::default();
            config.save_to_file(&self.config)?;
            config
        };
        let config = self.merge_snap_config(config);

        let upstream = config.upstream.clone().ok_or_eyre("missing upstream RPC endpoint")?;
        let provider = ProviderBuilder::new().connect_http(upstream.clone());
        let rpc = Snap::new(provider, &config).into_rpc();

        let cors = CorsLayer::new()
            .allow_methods(AllowMethods::any())
            .allow_origin(AllowOrigin::any())
            .allow_headers([http::header::CONTENT_TYPE]);

        let server = Server::builder()
            .set_config(
                ServerConfig::builder()
                    .http_only()
                    .max_connections(config.server.max_connections)
                    .build(),
            )
            .set_http_middleware(ServiceBuilder::new().layer(cors))
            .build((config.server.address, config.server.port))
            .await?;
        let addr = server.local_addr()?;
        info!(%addr, %upstream, "Started snap service");

        let handle = server.start(rpc);
        handle.stopped().await;

        Ok(())
    }

    /// Merges [`Args`] values into an existing [`SnapConfig`] instance.
    pub fn merge_snap_config(&self, config: SnapConfig) -> SnapConfig {
        config
            .with_address(self.address)
            .with_port(self.port)
            .with_max_connections(self.max_connections)
            .with_upstream(self.upstream.clone())
            .with_fallback_gas_price(self.fallback_gas_price)
    }
}
