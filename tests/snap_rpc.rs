//! End-to-end tests of the `snap_` RPC surface over a real server, with the
//! Ethereum provider mocked.

use alloy::{
    primitives::{U128, U64},
    providers::{mock::Asserter, ProviderBuilder},
};
use ethzip_snap::{
    config::SnapConfig,
    rpc::{Snap, SnapApiClient, SnapApiServer},
    types::{Component, DialogRequest, DialogType, SnapRequest},
};
use jsonrpsee::{
    core::ClientError,
    http_client::{HttpClient, HttpClientBuilder},
    server::{Server, ServerHandle},
    types::error::{INVALID_PARAMS_CODE, METHOD_NOT_FOUND_CODE},
};
use serde_json::json;

async fn spawn_snap(asserter: Asserter) -> (HttpClient, ServerHandle) {
    let provider = ProviderBuilder::new().connect_mocked_client(asserter);
    let snap = Snap::new(provider, &SnapConfig::default());

    let server = Server::builder().build("127.0.0.1:0").await.unwrap();
    let addr = server.local_addr().unwrap();
    let handle = server.start(snap.into_rpc());

    let client = HttpClientBuilder::default().build(format!("http://{addr}")).unwrap();
    (client, handle)
}

fn panel_lines(dialog: &DialogRequest) -> Vec<String> {
    match &dialog.content {
        Component::Panel { children } => children
            .iter()
            .filter_map(|component| match component {
                Component::Heading { value }
                | Component::Text { value }
                | Component::Copyable { value } => Some(value.clone()),
                Component::Divider => None,
                Component::Panel { .. } => None,
            })
            .collect(),
        other => panic!("expected a panel, got {other:?}"),
    }
}

#[tokio::test]
async fn hello_shows_static_dialog() {
    let (client, _handle) = spawn_snap(Asserter::new()).await;

    let dialog = client.invoke(SnapRequest::bare("hello")).await.unwrap();
    assert_eq!(dialog.dialog_type, DialogType::Confirmation);
    assert_eq!(panel_lines(&dialog)[0], "EthZip");
}

#[tokio::test]
async fn check_bytecode_reports_savings() {
    let asserter = Asserter::new();
    // Gas price, then the estimates for the original and replacement blobs.
    asserter.push_success(&U128::from(3_000_000_000u64));
    asserter.push_success(&U64::from(100_000u64));
    asserter.push_success(&U64::from(50_000u64));
    let (client, _handle) = spawn_snap(asserter).await;

    let request = SnapRequest::with_params(
        "check_bytecode",
        &json!({
            "bytecode": "0x6060",
            "newBytecode": "0x60",
            "name": "USDC",
            "symbol": "usdc"
        }),
    )
    .unwrap();

    let dialog = client.invoke(request).await.unwrap();
    let lines = panel_lines(&dialog);
    assert_eq!(lines[0], "EthZip");
    assert!(lines.contains(&"Contract: **USDC (usdc)**".to_string()));
    assert!(lines.contains(&"Original size: **2 bytes**".to_string()));
    assert!(lines.contains(&"Original deploy fee: **0.000300 ETH**".to_string()));
    assert!(lines.contains(&"New size: **1 bytes**".to_string()));
    assert!(lines.contains(&"Size reduction: **50.00%**".to_string()));
    assert!(lines.contains(&"New deploy fee: **0.000150 ETH**".to_string()));
    assert!(lines.contains(&"Fee reduction: **50.00%**".to_string()));
    assert!(lines.contains(&"0x60".to_string()));
}

#[tokio::test]
async fn check_bytecode_estimate_failure_yields_no_dialog() {
    let asserter = Asserter::new();
    asserter.push_success(&U128::from(3_000_000_000u64));
    asserter.push_success(&U64::from(100_000u64));
    asserter.push_failure_msg("execution reverted");
    let (client, _handle) = spawn_snap(asserter).await;

    let request = SnapRequest::with_params(
        "check_bytecode",
        &json!({ "bytecode": "0x6060", "newBytecode": "0x60" }),
    )
    .unwrap();

    let err = client.invoke(request).await.unwrap_err();
    let ClientError::Call(err) = err else { panic!("expected a call error, got {err:?}") };
    assert_eq!(err.code(), INVALID_PARAMS_CODE);
    assert!(err.message().contains("replacement"));
}

#[tokio::test]
async fn zk_confirm_shows_payroll_dialog() {
    let (client, _handle) = spawn_snap(Asserter::new()).await;

    let request = SnapRequest::with_params(
        "zkConfirm",
        &json!({
            "from": "Ethereum",
            "to": "Scroll",
            "token": "USDT",
            "fee": "1.2",
            "items": 3,
            "allAmount": "121.2",
            "amount": "120",
            "reward": "10 XLD"
        }),
    )
    .unwrap();

    let dialog = client.invoke(request).await.unwrap();
    let lines = panel_lines(&dialog);
    assert_eq!(lines[0], "ZkPayroll");
    assert!(lines.contains(&"Amount: **120 USDT**".to_string()));
    assert!(lines.contains(&"XLD token reward: **10 XLD**".to_string()));
}

#[tokio::test]
async fn unknown_method_is_method_not_found() {
    let (client, _handle) = spawn_snap(Asserter::new()).await;

    let err = client.invoke(SnapRequest::bare("foo")).await.unwrap_err();
    let ClientError::Call(err) = err else { panic!("expected a call error, got {err:?}") };
    assert_eq!(err.code(), METHOD_NOT_FOUND_CODE);
    assert!(err.message().contains("foo"));
}
