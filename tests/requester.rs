//! Requester tests against a mock wallet host.

use ethzip_snap::{
    requester::{ConnectParams, Requester, SnapDescriptor, WalletApiServer},
    types::SnapRequest,
};
use jsonrpsee::{
    core::{async_trait, ClientError, RpcResult},
    http_client::{HttpClient, HttpClientBuilder},
    server::{Server, ServerHandle},
    types::error::ErrorObject,
};
use serde_json::json;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

const SNAP_ID: &str = "local:http://localhost:8080";

/// A wallet host that installs any snap except ids containing "rejected",
/// which simulate the user declining the install prompt.
#[derive(Debug, Default, Clone)]
struct MockWallet {
    installed: Arc<Mutex<HashMap<String, SnapDescriptor>>>,
}

#[async_trait]
impl WalletApiServer for MockWallet {
    async fn get_snaps(&self) -> RpcResult<HashMap<String, SnapDescriptor>> {
        Ok(self.installed.lock().unwrap().clone())
    }

    async fn request_snaps(
        &self,
        snaps: HashMap<String, ConnectParams>,
    ) -> RpcResult<HashMap<String, SnapDescriptor>> {
        let mut installed = self.installed.lock().unwrap();
        for (id, params) in snaps {
            if id.contains("rejected") {
                return Err(ErrorObject::owned::<()>(4001, "User rejected the request.", None));
            }
            let descriptor = SnapDescriptor {
                id: id.clone(),
                version: params.version.unwrap_or_else(|| "1.0.0".to_string()),
                enabled: true,
                blocked: false,
            };
            installed.insert(id, descriptor);
        }
        Ok(installed.clone())
    }

    async fn invoke_snap(
        &self,
        snap_id: String,
        request: SnapRequest,
    ) -> RpcResult<serde_json::Value> {
        Ok(json!({ "snapId": snap_id, "method": request.method, "params": request.params }))
    }
}

async fn spawn_wallet() -> (HttpClient, ServerHandle) {
    let server = Server::builder().build("127.0.0.1:0").await.unwrap();
    let addr = server.local_addr().unwrap();
    let handle = server.start(MockWallet::default().into_rpc());
    let client = HttpClientBuilder::default().build(format!("http://{addr}")).unwrap();
    (client, handle)
}

#[tokio::test]
async fn find_snap_absent_when_nothing_installed() {
    let (client, _handle) = spawn_wallet().await;
    let requester = Requester::new(client, SNAP_ID);

    assert_eq!(requester.find_snap(None).await, None);
}

#[tokio::test]
async fn connect_then_find() {
    let (client, _handle) = spawn_wallet().await;
    let requester = Requester::new(client, SNAP_ID);

    requester.connect(ConnectParams { version: Some("1.2.3".to_string()) }).await.unwrap();

    let snap = requester.find_snap(None).await.unwrap();
    assert_eq!(snap.id, SNAP_ID);
    assert_eq!(snap.version, "1.2.3");

    // Version filter is exact.
    assert!(requester.find_snap(Some("1.2.3")).await.is_some());
    assert_eq!(requester.find_snap(Some("9.9.9")).await, None);
}

#[tokio::test]
async fn connect_propagates_user_rejection() {
    let (client, _handle) = spawn_wallet().await;
    let requester = Requester::new(client, "npm:rejected-snap");

    let err = requester.connect(ConnectParams::default()).await.unwrap_err();
    let ClientError::Call(err) = err else { panic!("expected a call error, got {err:?}") };
    assert_eq!(err.code(), 4001);
}

#[tokio::test]
async fn invoke_forwards_method_and_params() {
    let (client, _handle) = spawn_wallet().await;
    let requester = Requester::new(client, SNAP_ID);

    let response = requester.invoke("hello", json!({"answer": 42})).await.unwrap();
    assert_eq!(
        response,
        json!({ "snapId": SNAP_ID, "method": "hello", "params": { "answer": 42 } })
    );
}

#[tokio::test]
async fn unreachable_host_yields_empty_map() {
    // Nothing is listening here; the failure must be absorbed, not thrown.
    let client = HttpClientBuilder::default().build("http://127.0.0.1:9").unwrap();
    let requester = Requester::new(client, SNAP_ID);

    assert!(requester.installed_snaps().await.is_empty());
    assert_eq!(requester.find_snap(None).await, None);
}
