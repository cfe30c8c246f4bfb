//! Shared harness for end-to-end tests
//!
//! Wires a real gateway (HTTP adapter + service + RPC server on an ephemeral
//! port) in front of whatever upstream URL the test provides.

use dogapi_api_rpc::{RpcServer, RpcServerConfig};
use dogapi_core::application::DogService;
use dogapi_infra_http::{DogCeoClient, DogCeoConfig};
use dogapi_sdk::DogApiClient;
use jsonrpsee::server::ServerHandle;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Running gateway under test
pub struct Gateway {
    pub addr: SocketAddr,
    pub client: DogApiClient,
    handle: ServerHandle,
}

impl Gateway {
    pub async fn start(upstream_url: &str) -> Self {
        Self::start_with(upstream_url, Duration::from_secs(5), Duration::from_secs(5)).await
    }

    pub async fn start_with(
        upstream_url: &str,
        upstream_timeout: Duration,
        call_deadline: Duration,
    ) -> Self {
        let upstream = DogCeoClient::new(DogCeoConfig {
            base_url: upstream_url.to_string(),
            timeout: upstream_timeout,
        })
        .expect("upstream client");
        let service = Arc::new(DogService::new(Arc::new(upstream)).with_deadline(call_deadline));

        let config = RpcServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        };
        let (addr, handle) = RpcServer::new(config, service)
            .start()
            .await
            .expect("rpc server");

        let client = DogApiClient::connect(format!("http://{}", addr))
            .await
            .expect("sdk client");

        Self {
            addr,
            client,
            handle,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// POST a raw JSON-RPC request and return the decoded reply
    pub async fn raw_call(&self, body: serde_json::Value) -> serde_json::Value {
        reqwest::Client::new()
            .post(self.url())
            .json(&body)
            .send()
            .await
            .expect("send")
            .json()
            .await
            .expect("json reply")
    }
}

impl Drop for Gateway {
    fn drop(&mut self) {
        let _ = self.handle.stop();
    }
}

/// `{"status":"success","message":...}`
pub fn success(message: serde_json::Value) -> serde_json::Value {
    serde_json::json!({ "status": "success", "message": message })
}
