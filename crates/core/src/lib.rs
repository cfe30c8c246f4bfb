// Dog API Core - Domain Logic & Ports
// NO infrastructure dependencies (hexagonal layout: adapters live in sibling crates)

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use error::{AppError, Result};
