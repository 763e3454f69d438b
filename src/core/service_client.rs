// src/core/service_client.rs
//! HTTP implementation of the portfolio tools against the site backend

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use std::path::{Path, PathBuf};

use crate::app_log;
use crate::core::{FsOps, PortfolioTools};
use crate::types::{
    response::{DeployResponse, EditSiteResponse, PreviewResponse, StoreStateAck, UploadCvResponse},
    DeploymentPlatform, Theme,
};
use crate::utils;

const UPLOAD_CV_ENDPOINT: &str = "/upload-cv";
const GENERATE_SITE_ENDPOINT: &str = "/generate-site";
const EDIT_SITE_ENDPOINT: &str = "/edit-site";
const DEPLOY_ENDPOINT: &str = "/deploy";

const UPLOAD_FIELD: &str = "file";
const STATE_RECORD_PREFIX: &str = "portfolio_agent_state_";

pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
    preview_base_url: String,
    state_dir: PathBuf,
}

impl ServiceClient {
    /// Create new service client. No request timeout is set.
    pub fn new(base_url: String, preview_base_url: String, state_dir: PathBuf) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url,
            preview_base_url,
            state_dir,
        })
    }

    /// Local record written by `store_user_state` for `user_id`.
    /// Ids are limited to ASCII letters, digits, `-` and `_` so the record stays in the state directory.
    pub fn state_record_path(&self, user_id: &str) -> Result<PathBuf> {
        let valid = !user_id.is_empty()
            && user_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            anyhow::bail!("Invalid session id for state record: {:?}", user_id);
        }
        Ok(self
            .state_dir
            .join(format!("{}{}.json", STATE_RECORD_PREFIX, user_id)))
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Turn a response into `R`, or an error carrying the status and body
    async fn read_json<R>(response: reqwest::Response, operation: &str) -> Result<R>
    where
        R: serde::de::DeserializeOwned,
    {
        let status = response.status();
        app_log!(trace, "{} response status: {}", operation, status);

        if status.is_success() {
            response
                .json::<R>()
                .await
                .with_context(|| format!("Failed to parse {} response", operation))
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            app_log!(error, "{} error response: {}", operation, error_text);
            anyhow::bail!("{} failed with status {}: {}", operation, status, error_text)
        }
    }
}

#[async_trait]
impl PortfolioTools for ServiceClient {
    async fn parse_cv(&self, file_path: &Path) -> Result<UploadCvResponse> {
        let file_name = file_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| anyhow::anyhow!("Invalid file name: {}", file_path.display()))?;
        let content_type = utils::content_type_for(file_name)?;
        let url = self.url(UPLOAD_CV_ENDPOINT);

        let file_content = tokio::fs::read(file_path)
            .await
            .with_context(|| format!("Failed to read file: {}", file_path.display()))?;

        let form = Form::new().part(
            UPLOAD_FIELD,
            Part::bytes(file_content)
                .file_name(file_name.to_string())
                .mime_str(content_type)
                .context("Failed to create multipart")?,
        );

        app_log!(info, "parse_cv starting for: {}", file_name);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .context("HTTP request failed")?;

        let parsed: UploadCvResponse = Self::read_json(response, "CV parsing").await?;
        app_log!(info, "parse_cv completed for user {}", parsed.user_id);
        Ok(parsed)
    }

    async fn store_user_state(
        &self,
        user_id: &str,
        state: &serde_json::Value,
    ) -> Result<StoreStateAck> {
        app_log!(info, "store_user_state starting for user: {}", user_id);

        let record_path = self.state_record_path(user_id)?;
        let content =
            serde_json::to_string(state).context("Failed to serialize user state")?;
        FsOps::write_file_safe(&record_path, &content).await?;

        let reference_id = format!("ref-{}", &uuid::Uuid::new_v4().simple().to_string()[..8]);
        app_log!(info, "store_user_state completed: {}", reference_id);

        Ok(StoreStateAck {
            status: "success".to_string(),
            reference_id,
        })
    }

    async fn generate_site(&self, user_id: &str, theme: Theme) -> Result<String> {
        let url = self.url(GENERATE_SITE_ENDPOINT);
        app_log!(
            info,
            "generate_site starting for user: {} theme: {}",
            user_id,
            theme
        );

        let response = self
            .client
            .post(&url)
            .query(&[("user_id", user_id), ("theme", theme.as_str())])
            .send()
            .await
            .context("Failed to call site generation service")?;

        let preview: PreviewResponse = Self::read_json(response, "Site generation").await?;
        Ok(preview.preview_url)
    }

    async fn preview_site(&self, user_id: &str) -> Result<String> {
        app_log!(debug, "preview_site for user: {}", user_id);
        Ok(format!("{}/preview/{}", self.preview_base_url, user_id))
    }

    async fn update_site(
        &self,
        user_id: &str,
        updates: &serde_json::Value,
    ) -> Result<EditSiteResponse> {
        let url = self.url(EDIT_SITE_ENDPOINT);
        app_log!(info, "update_site starting for user: {}", user_id);

        let response = self
            .client
            .post(&url)
            .query(&[("user_id", user_id)])
            .json(updates)
            .send()
            .await
            .context("Failed to call site update service")?;

        Self::read_json(response, "Site update").await
    }

    async fn deploy_site(
        &self,
        user_id: &str,
        platform: DeploymentPlatform,
    ) -> Result<DeployResponse> {
        let url = self.url(DEPLOY_ENDPOINT);
        app_log!(
            info,
            "deploy_site starting for user: {} platform: {}",
            user_id,
            platform
        );

        let response = self
            .client
            .post(&url)
            .query(&[("user_id", user_id), ("platform", platform.as_str())])
            .send()
            .await
            .context("Failed to call deployment service")?;

        let deployed: DeployResponse = Self::read_json(response, "Deployment").await?;
        app_log!(info, "deploy_site completed: {}", deployed.live_url);
        Ok(deployed)
    }
}

#[cfg(test)]
#[path = "tests/service_client_tests.rs"]
mod tests;
