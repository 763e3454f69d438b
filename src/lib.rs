// src/lib.rs
//! Portfolio builder: session state, remote tools and the step workflow that
//! turns an uploaded CV into a deployed portfolio site.

pub mod cli;
pub mod core;
pub mod store;
pub mod types;
pub mod utils;
pub mod workflow;

pub use crate::core::{ConfigManager, PortfolioTools, ServiceClient};
pub use crate::store::SessionStore;
pub use crate::workflow::{Notice, NoticeLevel, Wizard, WorkflowError};

/// Log through `tracing` with the level given as the first token.
///
/// `app_log!(info, "Calling {}", url)` expands to `tracing::info!("Calling {}", url)`.
#[macro_export]
macro_rules! app_log {
    ($level:ident, $($arg:tt)+) => {
        ::tracing::$level!($($arg)+)
    };
}
