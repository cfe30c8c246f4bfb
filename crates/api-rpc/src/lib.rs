//! JSON-RPC API Layer
//!
//! Implements the JSON-RPC 2.0 surface of the Dog API gateway: one method
//! per upstream operation, typed params/results, and a two-code error scheme.

pub mod error;
pub mod handler;
pub mod server;
pub mod types;

pub use server::{RpcServer, RpcServerConfig};
