//! The `snap_` namespace.
//!
//! The snap exposes a single entrypoint, `snap_invoke`, mirroring the inner
//! request of the host's `wallet_invokeSnap`: a method name plus a
//! method-specific parameter object, dispatched inside the snap.

use crate::{
    error::ToRpcResult,
    rpc::Snap,
    types::{DialogRequest, SnapRequest},
};
use alloy::providers::Provider;
use jsonrpsee::{
    core::{async_trait, RpcResult},
    proc_macros::rpc,
};

/// The `snap_` RPC namespace.
#[rpc(server, client, namespace = "snap")]
pub trait SnapApi {
    /// Dispatches a snap request and returns the dialog the host should show.
    ///
    /// Unknown methods fail with a method-not-found error and produce no
    /// dialog content.
    #[method(name = "invoke")]
    async fn invoke(&self, request: SnapRequest) -> RpcResult<DialogRequest>;
}

#[async_trait]
impl<P> SnapApiServer for Snap<P>
where
    P: Provider + 'static,
{
    async fn invoke(&self, request: SnapRequest) -> RpcResult<DialogRequest> {
        self.handle(request).await.to_rpc_result()
    }
}
