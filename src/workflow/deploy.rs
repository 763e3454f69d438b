// src/workflow/deploy.rs
use serde_json::json;

use super::{NoticeLevel, Wizard, WorkflowError, DEPLOY_ACTION};
use crate::app_log;
use crate::types::{BuilderStep, DeploymentPlatform, DeploymentStatus};

const DEPLOY_FAILED: &str = "Failed to deploy site.";

impl Wizard {
    /// Choose the hosting platform. Ignored while a deployment is running.
    pub fn select_platform(&mut self, platform: DeploymentPlatform) {
        if self.store.deployment().is_in_flight() {
            return;
        }
        self.store.set_deployment_platform(platform);
    }

    /// Deploy the generated site to the selected platform.
    ///
    /// Allowed from idle or error. The outcome lands in the deployment state,
    /// the wizard step is left on deploy.
    pub async fn deploy(&mut self) -> Result<String, WorkflowError> {
        self.require_cv_data()?;
        let user_id = self.require_session()?;

        let status = self.store.deployment().status;
        if matches!(status, DeploymentStatus::Deploying | DeploymentStatus::Success) {
            return Err(self.fail(WorkflowError::DeploymentLocked(status)));
        }

        if self.store.current_step() != BuilderStep::Deploy {
            self.store.set_current_step(BuilderStep::Deploy);
        }

        let platform = self.store.deployment().platform;
        self.store
            .set_deployment_status(DeploymentStatus::Deploying, None, None);

        let deployed = match self.tools.deploy_site(&user_id, platform).await {
            Ok(deployed) => deployed,
            Err(e) => {
                self.store.set_deployment_status(
                    DeploymentStatus::Error,
                    None,
                    Some(DEPLOY_FAILED.to_string()),
                );
                return Err(self.fail(WorkflowError::tool(DEPLOY_ACTION, e)));
            }
        };

        app_log!(
            info,
            "Deployed session {} to {}: {}",
            user_id,
            platform,
            deployed.live_url
        );

        self.store.set_deployment_status(
            DeploymentStatus::Success,
            Some(deployed.live_url.clone()),
            None,
        );

        let metadata = json!({
            "cvData": self.store.cv_data(),
            "websiteConfig": self.store.website_config(),
            "deployment": self.store.deployment(),
            "currentStep": BuilderStep::Deploy,
            "deployedAt": chrono::Utc::now().to_rfc3339(),
        });
        self.persist_remote(&user_id, metadata).await;

        self.notify(NoticeLevel::Success, "Your portfolio has been deployed!");
        Ok(deployed.live_url)
    }

    /// Edit & Redeploy: back to idle on the same platform, step unchanged.
    pub fn edit_and_redeploy(&mut self) {
        self.store
            .set_deployment_status(DeploymentStatus::Idle, None, None);
    }
}
