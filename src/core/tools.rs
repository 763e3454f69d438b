// src/core/tools.rs
//! Named remote operations the wizard invokes at step transitions

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::types::{
    response::{DeployResponse, EditSiteResponse, StoreStateAck, UploadCvResponse},
    DeploymentPlatform, Theme,
};

/// Remote tool façade. Every call is one request with no retry, queuing or timeout;
/// callers sequence them (no deploy before generation).
#[async_trait]
pub trait PortfolioTools: Send + Sync {
    /// Upload a CV document and receive structured data plus a new session identity.
    async fn parse_cv(&self, file_path: &Path) -> Result<UploadCvResponse>;

    /// Persist an arbitrary snapshot for the session. Best-effort.
    async fn store_user_state(
        &self,
        user_id: &str,
        state: &serde_json::Value,
    ) -> Result<StoreStateAck>;

    /// Generate the site for the session and return its preview URL.
    async fn generate_site(&self, user_id: &str, theme: Theme) -> Result<String>;

    /// Preview URL for the session. Derived from the identity, never fails remotely.
    async fn preview_site(&self, user_id: &str) -> Result<String>;

    /// Apply a partial update to the generated site.
    async fn update_site(
        &self,
        user_id: &str,
        updates: &serde_json::Value,
    ) -> Result<EditSiteResponse>;

    /// Deploy the generated site to `platform`.
    async fn deploy_site(
        &self,
        user_id: &str,
        platform: DeploymentPlatform,
    ) -> Result<DeployResponse>;
}
