// src/workflow/preview.rs
use super::{NoticeLevel, Wizard, WorkflowError};
use crate::types::BuilderStep;

impl Wizard {
    /// Fetch the preview URL for the current session.
    pub async fn refresh_preview(&mut self) -> Result<String, WorkflowError> {
        let user_id = self.require_session()?;
        match self.tools.preview_site(&user_id).await {
            Ok(url) => {
                self.preview_url = Some(url.clone());
                Ok(url)
            }
            Err(e) => Err(self.fail(WorkflowError::tool("load the preview", e))),
        }
    }

    /// Push a partial update to the generated site and pick up the refreshed preview.
    pub async fn apply_edit(
        &mut self,
        updates: serde_json::Value,
    ) -> Result<String, WorkflowError> {
        let user_id = self.require_session()?;
        match self.tools.update_site(&user_id, &updates).await {
            Ok(response) => {
                self.preview_url = Some(response.preview_url.clone());
                self.notify(NoticeLevel::Success, "Section updated!");
                Ok(response.preview_url)
            }
            Err(e) => Err(self.fail(WorkflowError::tool("update your site", e))),
        }
    }

    /// Preview → deploy
    pub fn open_deploy(&mut self) -> Result<(), WorkflowError> {
        self.require_cv_data()?;
        self.store.set_current_step(BuilderStep::Deploy);
        Ok(())
    }
}
