pub mod endpoint;

pub use crate::config::endpoint::ServerConfig;
