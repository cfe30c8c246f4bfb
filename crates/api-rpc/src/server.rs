//! JSON-RPC Server
//!
//! Implements the JSON-RPC 2.0 server over HTTP.

use crate::handler::RpcHandler;
use crate::types::{
    method, BreedRequest, EmptyRequest, RandomBreedImagesRequest, RandomImagesRequest,
    SubBreedRequest,
};
use dogapi_core::application::DogService;
use jsonrpsee::server::{Server, ServerHandle};
use jsonrpsee::types::error::INVALID_PARAMS_CODE;
use jsonrpsee::types::{ErrorObjectOwned, Params};
use jsonrpsee::RpcModule;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

const DEFAULT_RPC_HOST: &str = "127.0.0.1";
const DEFAULT_RPC_PORT: u16 = 50051;

/// RPC Server Configuration
#[derive(Debug, Clone)]
pub struct RpcServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for RpcServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_RPC_HOST.to_string(),
            port: DEFAULT_RPC_PORT,
        }
    }
}

/// RPC Server
pub struct RpcServer {
    config: RpcServerConfig,
    handler: Arc<RpcHandler>,
}

impl RpcServer {
    pub fn new(config: RpcServerConfig, service: Arc<DogService>) -> Self {
        Self {
            config,
            handler: Arc::new(RpcHandler::new(service)),
        }
    }

    /// Start the JSON-RPC server
    ///
    /// Returns the bound address (useful with port 0) and the handle used to
    /// stop the server.
    pub async fn start(self) -> Result<(SocketAddr, ServerHandle), String> {
        let addr = format!("{}:{}", self.config.host, self.config.port);

        info!(
            host = %self.config.host,
            port = %self.config.port,
            "Starting JSON-RPC server"
        );

        let server = Server::builder()
            .build(&addr)
            .await
            .map_err(|e| format!("Failed to build server on {}: {}", addr, e))?;
        let local_addr = server
            .local_addr()
            .map_err(|e| format!("Failed to read bound address: {}", e))?;

        let module = self.build_module()?;

        info!(addr = %local_addr, "JSON-RPC server started successfully");

        let handle = server.start(module);
        Ok((local_addr, handle))
    }

    /// Register every method on a fresh module
    pub fn build_module(&self) -> Result<RpcModule<()>, String> {
        let mut module = RpcModule::new(());

        register(
            &mut module,
            method::LIST_ALL_BREEDS,
            &self.handler,
            |h, req: EmptyRequest| async move { h.list_all_breeds(req).await },
        )?;
        register(
            &mut module,
            method::LIST_BREEDS,
            &self.handler,
            |h, req: EmptyRequest| async move { h.list_breeds(req).await },
        )?;
        register(
            &mut module,
            method::RANDOM_IMAGE,
            &self.handler,
            |h, req: EmptyRequest| async move { h.random_image(req).await },
        )?;
        register(
            &mut module,
            method::RANDOM_IMAGES,
            &self.handler,
            |h, req: RandomImagesRequest| async move { h.random_images(req).await },
        )?;
        register(
            &mut module,
            method::BREED_IMAGES,
            &self.handler,
            |h, req: BreedRequest| async move { h.breed_images(req).await },
        )?;
        register(
            &mut module,
            method::RANDOM_BREED_IMAGE,
            &self.handler,
            |h, req: BreedRequest| async move { h.random_breed_image(req).await },
        )?;
        register(
            &mut module,
            method::RANDOM_BREED_IMAGES,
            &self.handler,
            |h, req: RandomBreedImagesRequest| async move { h.random_breed_images(req).await },
        )?;
        register(
            &mut module,
            method::SUB_BREED_IMAGES,
            &self.handler,
            |h, req: SubBreedRequest| async move { h.sub_breed_images(req).await },
        )?;
        register(
            &mut module,
            method::RANDOM_SUB_BREED_IMAGE,
            &self.handler,
            |h, req: SubBreedRequest| async move { h.random_sub_breed_image(req).await },
        )?;
        register(
            &mut module,
            method::LIST_SUB_BREEDS,
            &self.handler,
            |h, req: BreedRequest| async move { h.list_sub_breeds(req).await },
        )?;

        Ok(module)
    }
}

/// Register one async method; absent params decode as `Req::default()`
fn register<Req, Resp, F, Fut>(
    module: &mut RpcModule<()>,
    name: &'static str,
    handler: &Arc<RpcHandler>,
    call: F,
) -> Result<(), String>
where
    Req: DeserializeOwned + Default + Send + 'static,
    Resp: Serialize + Clone + Send + 'static,
    F: Fn(Arc<RpcHandler>, Req) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<Resp, ErrorObjectOwned>> + Send + 'static,
{
    let handler = handler.clone();
    module
        .register_async_method(name, move |params, _, _| {
            let handler = handler.clone();
            let call = call.clone();
            async move {
                let req = decode_params::<Req>(&params)?;
                call(handler, req).await
            }
        })
        .map_err(|e| e.to_string())?;
    Ok(())
}

/// Absent, `null` and `[]` params all decode as `Req::default()`
fn decode_params<Req>(params: &Params<'_>) -> Result<Req, ErrorObjectOwned>
where
    Req: DeserializeOwned + Default,
{
    match params.parse::<Option<Value>>()? {
        None => Ok(Req::default()),
        Some(Value::Array(items)) if items.is_empty() => Ok(Req::default()),
        Some(value) => serde_json::from_value(value).map_err(|e| {
            ErrorObjectOwned::owned(INVALID_PARAMS_CODE, e.to_string(), None::<()>)
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dogapi_core::port::dog_api::mocks::{MockData, MockDogApi};
    use jsonrpsee::core::EmptyServerParams;

    fn server() -> RpcServer {
        let api = Arc::new(MockDogApi::new_success(MockData {
            images: vec!["https://x/y.jpg".to_string()],
            ..Default::default()
        }));
        RpcServer::new(
            RpcServerConfig::default(),
            Arc::new(DogService::new(api)),
        )
    }

    #[test]
    fn test_all_methods_registered() {
        let module = server().build_module().unwrap();
        let names: Vec<&str> = module.method_names().collect();

        for name in [
            method::LIST_ALL_BREEDS,
            method::LIST_BREEDS,
            method::RANDOM_IMAGE,
            method::RANDOM_IMAGES,
            method::BREED_IMAGES,
            method::RANDOM_BREED_IMAGE,
            method::RANDOM_BREED_IMAGES,
            method::SUB_BREED_IMAGES,
            method::RANDOM_SUB_BREED_IMAGE,
            method::LIST_SUB_BREEDS,
        ] {
            assert!(names.contains(&name), "{name} not registered");
        }
        assert_eq!(names.len(), 10);
    }

    #[tokio::test]
    async fn test_call_without_params() {
        let module = server().build_module().unwrap();
        let result: serde_json::Value = module
            .call(method::RANDOM_IMAGE, EmptyServerParams::new())
            .await
            .unwrap();
        assert_eq!(result, serde_json::json!({"image_url": "https://x/y.jpg"}));
    }

    #[test]
    fn test_empty_params_decode_as_zero_values() {
        for raw in [None, Some("null"), Some("[]"), Some("{}")] {
            let req: BreedRequest = decode_params(&Params::new(raw)).unwrap();
            assert_eq!(req.breed, "", "{raw:?}");
        }

        let req: RandomBreedImagesRequest =
            decode_params(&Params::new(Some(r#"{"breed":"husky","count":3}"#))).unwrap();
        assert_eq!((req.breed.as_str(), req.count), ("husky", 3));

        let err = decode_params::<RandomImagesRequest>(&Params::new(Some(r#"{"count":"x"}"#)))
            .unwrap_err();
        assert_eq!(err.code(), INVALID_PARAMS_CODE);
    }

    #[test]
    fn test_default_config() {
        let config = RpcServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 50051);
    }
}
