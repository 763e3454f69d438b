// src/workflow/mod.rs
//! Step workflow: landing → upload → review → preview → deploy.
//!
//! Each step action calls at most one remote tool, mutates the session store only
//! after the call succeeds, and records a [`Notice`] for the user either way.

mod deploy;
mod preview;
mod review;
mod upload;

use std::sync::Arc;
use thiserror::Error;

use crate::app_log;
use crate::core::PortfolioTools;
use crate::store::SessionStore;
use crate::types::{BuilderStep, DeploymentStatus};

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("No session identity; the CV must be uploaded again")]
    MissingSession,
    #[error("No CV data loaded")]
    MissingCvData,
    #[error("{0}")]
    InvalidFile(String),
    #[error("Deployment is {0}")]
    DeploymentLocked(DeploymentStatus),
    #[error("Failed to {action}: {cause:#}")]
    Tool {
        action: &'static str,
        cause: anyhow::Error,
    },
}

const DEPLOY_ACTION: &str = "deploy your site";

impl WorkflowError {
    fn tool(action: &'static str, cause: anyhow::Error) -> Self {
        WorkflowError::Tool { action, cause }
    }

    /// Text shown to the user when this error ends an action
    pub fn user_message(&self) -> String {
        match self {
            WorkflowError::MissingSession => {
                "Session expired. Please re-upload your CV.".to_string()
            }
            WorkflowError::MissingCvData => {
                "No CV data found. Please upload your CV first.".to_string()
            }
            WorkflowError::InvalidFile(message) => message.clone(),
            WorkflowError::DeploymentLocked(DeploymentStatus::Deploying) => {
                "A deployment is already in progress.".to_string()
            }
            WorkflowError::DeploymentLocked(_) => {
                "Already deployed. Use Edit & Redeploy to deploy again.".to_string()
            }
            WorkflowError::Tool {
                action: DEPLOY_ACTION,
                ..
            } => "Deployment failed. Please try again.".to_string(),
            WorkflowError::Tool { action, .. } => {
                format!("Failed to {}. Please try again.", action)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

/// Transient user-facing notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Drives the step views over one session. Owns the store; the tools are shared.
pub struct Wizard {
    store: SessionStore,
    tools: Arc<dyn PortfolioTools>,
    notices: Vec<Notice>,
    preview_url: Option<String>,
}

impl Wizard {
    pub fn new(store: SessionStore, tools: Arc<dyn PortfolioTools>) -> Self {
        Self {
            store,
            tools,
            notices: Vec::new(),
            preview_url: None,
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut SessionStore {
        &mut self.store
    }

    pub fn into_store(self) -> SessionStore {
        self.store
    }

    /// Last preview URL handed out by the backend in this session
    pub fn preview_url(&self) -> Option<&str> {
        self.preview_url.as_deref()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Show `step`, redirecting to upload when it needs CV data that is not loaded.
    /// Returns the step actually shown.
    pub fn enter(&mut self, step: BuilderStep) -> BuilderStep {
        if step.requires_cv_data() && self.store.cv_data().is_none() {
            app_log!(info, "Redirecting {} to upload: no CV data", step);
            self.store.set_current_step(BuilderStep::Upload);
            self.notify(
                NoticeLevel::Info,
                WorkflowError::MissingCvData.user_message(),
            );
            return BuilderStep::Upload;
        }
        self.store.set_current_step(step);
        step
    }

    /// Explicit backward navigation by one step
    pub fn back(&mut self) -> BuilderStep {
        let current = self.store.current_step();
        let previous = current.previous().unwrap_or(current);
        self.store.set_current_step(previous);
        previous
    }

    fn notify(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.notices.push(Notice {
            level,
            message: message.into(),
        });
    }

    /// Surface `error` as a notice and hand it back to the caller
    fn fail(&mut self, error: WorkflowError) -> WorkflowError {
        app_log!(error, "{}", error);
        self.notify(NoticeLevel::Error, error.user_message());
        error
    }

    fn require_session(&mut self) -> Result<String, WorkflowError> {
        if let Some(user_id) = self.store.user_id().map(str::to_string) {
            return Ok(user_id);
        }
        Err(self.fail(WorkflowError::MissingSession))
    }

    fn require_cv_data(&mut self) -> Result<(), WorkflowError> {
        if self.store.cv_data().is_some() {
            return Ok(());
        }
        self.store.set_current_step(BuilderStep::Upload);
        Err(self.fail(WorkflowError::MissingCvData))
    }

    /// Best-effort remote copy of `state`. Failures are logged and otherwise ignored.
    async fn persist_remote(&self, user_id: &str, state: serde_json::Value) {
        match self.tools.store_user_state(user_id, &state).await {
            Ok(ack) => app_log!(debug, "Stored user state: {}", ack.reference_id),
            Err(e) => app_log!(warn, "Failed to store user state for {}: {:#}", user_id, e),
        }
    }

    /// The mirrored snapshot as a JSON value for the persistence tool
    fn snapshot_value(&self) -> Option<serde_json::Value> {
        match serde_json::to_value(self.store.snapshot()) {
            Ok(value) => Some(value),
            Err(e) => {
                app_log!(warn, "Skipping remote persistence: cannot serialize snapshot: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/wizard_tests.rs"]
mod tests;
