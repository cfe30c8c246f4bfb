//! Daemon configuration (flags with environment fallbacks)

use anyhow::{bail, Result};
use clap::Parser;
use dogapi_api_rpc::RpcServerConfig;
use dogapi_infra_http::{DogCeoConfig, DEFAULT_BASE_URL};
use std::time::Duration;

#[derive(Parser, Debug, Clone)]
#[command(name = "dogapi-daemon")]
#[command(about = "JSON-RPC gateway for the dog.ceo image API", long_about = None)]
#[command(version)]
pub struct DaemonConfig {
    /// Address the RPC listener binds to
    #[arg(long, env = "DOGAPI_RPC_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// The server port
    #[arg(short, long, env = "DOGAPI_RPC_PORT", default_value_t = 50051)]
    pub port: u16,

    /// Upstream API base URL
    #[arg(long, env = "DOGAPI_UPSTREAM_URL", default_value = DEFAULT_BASE_URL)]
    pub upstream_url: String,

    /// Timeout for each upstream HTTP request, in seconds
    #[arg(long, env = "DOGAPI_UPSTREAM_TIMEOUT_SECS", default_value_t = 10)]
    pub upstream_timeout_secs: u64,

    /// Deadline for each RPC call's upstream work, in seconds
    #[arg(long, env = "DOGAPI_CALL_DEADLINE_SECS", default_value_t = 10)]
    pub call_deadline_secs: u64,

    /// Log format: "pretty" or "json"
    #[arg(long, env = "DOGAPI_LOG_FORMAT", default_value = "pretty")]
    pub log_format: String,
}

impl DaemonConfig {
    /// Reject values that would leave the gateway unusable
    pub fn validate(&self) -> Result<()> {
        if self.upstream_timeout_secs == 0 {
            bail!("upstream timeout must be at least 1 second");
        }
        if self.call_deadline_secs == 0 {
            bail!("call deadline must be at least 1 second");
        }
        if !matches!(self.log_format.as_str(), "pretty" | "json") {
            bail!("unknown log format '{}' (expected pretty or json)", self.log_format);
        }
        Ok(())
    }

    pub fn rpc(&self) -> RpcServerConfig {
        RpcServerConfig {
            host: self.host.clone(),
            port: self.port,
        }
    }

    pub fn upstream(&self) -> DogCeoConfig {
        DogCeoConfig {
            base_url: self.upstream_url.clone(),
            timeout: Duration::from_secs(self.upstream_timeout_secs),
        }
    }

    pub fn call_deadline(&self) -> Duration {
        Duration::from_secs(self.call_deadline_secs)
    }
}
