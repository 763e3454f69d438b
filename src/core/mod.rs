// src/core/mod.rs
//! Configuration, file helpers and the remote tool façade

pub mod config_manager;
pub mod fs_ops;
pub mod service_client;
pub mod tools;

pub use config_manager::ConfigManager;
pub use fs_ops::FsOps;
pub use service_client::ServiceClient;
pub use tools::PortfolioTools;
