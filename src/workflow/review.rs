// src/workflow/review.rs
use super::{NoticeLevel, Wizard, WorkflowError};
use crate::types::{BuilderStep, CvPatch};

impl Wizard {
    /// Save one section edit form.
    pub fn save_section(&mut self, patch: CvPatch) -> Result<(), WorkflowError> {
        self.require_cv_data()?;
        let section = patch.section();
        self.store.update_cv(patch);
        self.notify(NoticeLevel::Success, format!("{} updated!", section));
        Ok(())
    }

    /// Review → preview. Generates the site with the current theme.
    ///
    /// On failure the step stays on review.
    pub async fn continue_to_preview(&mut self) -> Result<String, WorkflowError> {
        self.require_cv_data()?;
        let user_id = self.require_session()?;
        let theme = self.store.website_config().theme;

        let preview_url = match self.tools.generate_site(&user_id, theme).await {
            Ok(url) => url,
            Err(e) => return Err(self.fail(WorkflowError::tool("generate your site", e))),
        };

        self.preview_url = Some(preview_url.clone());
        self.store.set_current_step(BuilderStep::Preview);
        self.notify(NoticeLevel::Success, "Your portfolio is ready to preview!");

        if let Some(snapshot) = self.snapshot_value() {
            self.persist_remote(&user_id, snapshot).await;
        }
        Ok(preview_url)
    }
}
