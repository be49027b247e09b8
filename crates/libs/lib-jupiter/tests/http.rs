//! # HTTP Client Tests
//!
//! The reqwest client against a local socket that answers each connection
//! with one canned response.

mod common;

use common::{BONK, SOL, WALLET};
use lib_core::AppError;
use lib_jupiter::{JupiterClient, JupiterService, TradingConfig, TransactionConfig};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Serve `responses` in order, one per connection. Resolves to the raw
/// requests (head and body) that were received.
async fn serve(responses: Vec<(&'static str, String)>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let mut requests = Vec::new();
        for (status, body) in responses {
            let (mut socket, _) = listener.accept().await.unwrap();
            requests.push(read_request(&mut socket).await);

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\
                 Connection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        }
        requests
    });

    (base, handle)
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];
    loop {
        let n = socket.read(&mut buf).await.unwrap();
        if n == 0 {
            break;
        }
        data.extend_from_slice(&buf[..n]);

        if let Some(head_end) = data.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&data[..head_end]).to_lowercase();
            let body_len = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if data.len() >= head_end + 4 + body_len {
                break;
            }
        }
    }
    String::from_utf8_lossy(&data).into_owned()
}

fn client(base: &str) -> JupiterClient {
    JupiterClient::builder()
        .api_base(base)
        .api_key("test-key")
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_error_status_reaches_envelope() {
    // Arrange
    let (base, server) =
        serve(vec![("400 Bad Request", "Could not find any route".into())]).await;
    let config = TradingConfig::default()
        .with_preferred_dexes(vec!["Raydium".to_string(), "Orca V2".to_string()]);
    let service = JupiterService::with_api(client(&base), config);

    // Act
    let result = service
        .get_transaction(SOL, BONK, "100000000", None, &TransactionConfig::for_wallet(WALLET))
        .await;

    // Assert
    assert!(!result.success);
    assert_eq!(
        result.error.as_deref(),
        Some("Jupiter API error (400): Could not find any route")
    );

    let requests = server.await.unwrap();
    assert_eq!(requests.len(), 1);
    let request_line = requests[0].lines().next().unwrap();
    let expected = format!(
        "GET /quote?inputMint={}&outputMint={}&amount=100000000&slippageBps=100\
         &swapMode=ExactIn&restrictIntermediateTokens=true&onlyDirectRoutes=true\
         &asLegacyTransaction=false&maxAccounts=64&dynamicSlippage=false\
         &dexes=Raydium%2COrca+V2 HTTP/1.1",
        SOL, BONK
    );
    assert_eq!(request_line, expected);
    assert!(requests[0].to_lowercase().contains("x-api-key: test-key"));
}

#[tokio::test]
async fn test_undecodable_body_is_decoding_error() {
    let (base, server) = serve(vec![("200 OK", "<html>rate limited</html>".into())]).await;
    let service = JupiterService::with_api(client(&base), TradingConfig::default());

    let err = service.get_route_info(SOL, BONK, "1").await.unwrap_err();

    assert!(matches!(err, AppError::Decoding(_)), "got {err:?}");
    server.await.unwrap();
}

#[tokio::test]
async fn test_swap_instructions_post_carries_quote() {
    let quote_body = serde_json::to_string(&common::sample_quote()).unwrap();
    let (base, server) = serve(vec![
        ("200 OK", quote_body),
        ("500 Internal Server Error", "Internal error".into()),
    ])
    .await;
    let service = JupiterService::with_api(client(&base), TradingConfig::default());

    let result = service.buy(BONK, "100000000", WALLET, None).await;

    assert_eq!(result.error.as_deref(), Some("Jupiter API error (500): Internal error"));

    let requests = server.await.unwrap();
    assert_eq!(requests.len(), 2);
    assert!(requests[1].starts_with("POST /swap-instructions HTTP/1.1"));
    assert!(requests[1].contains(&format!("\"userPublicKey\":\"{}\"", WALLET)));
    assert!(requests[1].contains("\"bps\":10000"));
}
