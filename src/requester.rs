//! Site-side requester.
//!
//! Helpers for asking a wallet host whether the snap is installed, connecting
//! it, and invoking its methods. The host owns installation and permissions;
//! this module is a pure caller in the host's `wallet_` namespace.

use crate::types::SnapRequest;
use jsonrpsee::{
    core::{client::ClientT, ClientError, RpcResult},
    proc_macros::rpc,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// The subset of the host's `wallet_` namespace the requester uses.
#[rpc(server, client, namespace = "wallet")]
pub trait WalletApi {
    /// The snaps installed in the wallet, keyed by snap id.
    #[method(name = "getSnaps")]
    async fn get_snaps(&self) -> RpcResult<HashMap<String, SnapDescriptor>>;

    /// Requests installation/authorization of the given snaps.
    #[method(name = "requestSnaps")]
    async fn request_snaps(
        &self,
        snaps: HashMap<String, ConnectParams>,
    ) -> RpcResult<HashMap<String, SnapDescriptor>>;

    /// Forwards a request to an installed snap.
    #[method(name = "invokeSnap")]
    async fn invoke_snap(
        &self,
        snap_id: String,
        request: SnapRequest,
    ) -> RpcResult<serde_json::Value>;
}

/// An installed snap as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapDescriptor {
    /// The snap id.
    pub id: String,
    /// The installed version.
    pub version: String,
    /// Whether the snap is enabled.
    #[serde(default)]
    pub enabled: bool,
    /// Whether the host has blocked the snap.
    #[serde(default)]
    pub blocked: bool,
}

/// Parameters passed along with a connect request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectParams {
    /// The version to install, if pinned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// A requester bound to one snap id on a wallet host.
#[derive(Debug, Clone)]
pub struct Requester<C> {
    client: C,
    snap_id: String,
}

impl<C> Requester<C> {
    /// Creates a requester for `snap_id` over `client`.
    pub fn new(client: C, snap_id: impl Into<String>) -> Self {
        Self { client, snap_id: snap_id.into() }
    }

    /// The snap id this requester targets.
    pub fn snap_id(&self) -> &str {
        &self.snap_id
    }
}

impl<C> Requester<C>
where
    C: ClientT + Send + Sync,
{
    /// The snaps installed in the wallet.
    ///
    /// Failure to reach the host is a normal outcome (the wallet may not be
    /// running or may not support snaps), so it is logged and reported as an
    /// empty map rather than an error.
    pub async fn installed_snaps(&self) -> HashMap<String, SnapDescriptor> {
        match self.client.get_snaps().await {
            Ok(snaps) => snaps,
            Err(err) => {
                warn!(%err, "Failed to obtain installed snaps");
                HashMap::new()
            }
        }
    }

    /// Requests the host to install/authorize the snap.
    ///
    /// Host errors (e.g. the user rejecting the install) propagate unchanged.
    pub async fn connect(
        &self,
        params: ConnectParams,
    ) -> Result<HashMap<String, SnapDescriptor>, ClientError> {
        self.client.request_snaps(HashMap::from([(self.snap_id.clone(), params)])).await
    }

    /// Finds the installed snap matching this requester's id and, when given,
    /// `version`.
    ///
    /// `None` means "not installed", a normal state for the caller to handle.
    pub async fn find_snap(&self, version: Option<&str>) -> Option<SnapDescriptor> {
        self.installed_snaps().await.into_values().find(|snap| {
            snap.id == self.snap_id && version.is_none_or(|version| snap.version == version)
        })
    }

    /// Invokes a snap method with the given parameters.
    ///
    /// The response shape is method-specific; interpreting it is up to the
    /// caller.
    pub async fn invoke(
        &self,
        method: impl Into<String>,
        params: serde_json::Value,
    ) -> Result<serde_json::Value, ClientError> {
        let request = SnapRequest { method: method.into(), params };
        self.client.invoke_snap(self.snap_id.clone(), request).await
    }
}

/// Whether `snap_id` refers to a development build served from the local
/// machine.
pub fn is_local_snap(snap_id: &str) -> bool {
    snap_id.starts_with("local:")
}
