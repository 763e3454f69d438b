// src/workflow/upload.rs
use std::path::Path;

use super::{NoticeLevel, Wizard, WorkflowError};
use crate::app_log;
use crate::store::UploadedFile;
use crate::types::BuilderStep;
use crate::utils::{self, ACCEPTED_CV_EXTENSIONS};

impl Wizard {
    /// Landing → upload
    pub fn start(&mut self) -> BuilderStep {
        self.enter(BuilderStep::Upload)
    }

    /// Upload → review. Parses the CV remotely and loads the result into the session.
    ///
    /// On failure the step stays on upload and CV data, session and step are untouched.
    pub async fn upload_cv(&mut self, path: &Path) -> Result<(), WorkflowError> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        if let Err(e) = utils::validate_file_extension(&name, ACCEPTED_CV_EXTENSIONS) {
            return Err(self.fail(WorkflowError::InvalidFile(e.to_string())));
        }

        let size = match tokio::fs::metadata(path).await {
            Ok(metadata) => metadata.len(),
            Err(e) => {
                app_log!(debug, "Cannot stat {}: {}", path.display(), e);
                return Err(self.fail(WorkflowError::InvalidFile(format!(
                    "Cannot read {}",
                    path.display()
                ))));
            }
        };

        self.store.set_uploaded_file(Some(UploadedFile {
            name: name.clone(),
            path: path.to_path_buf(),
            size,
        }));
        self.store.set_is_extracting(true);
        self.store.set_current_step(BuilderStep::Upload);

        let result = self.tools.parse_cv(path).await;
        self.store.set_is_extracting(false);

        let parsed = match result {
            Ok(parsed) => parsed,
            Err(e) => return Err(self.fail(WorkflowError::tool("process your CV", e))),
        };

        app_log!(
            info,
            "Parsed {} for {} (session {})",
            name,
            parsed.cv_data.display_name(),
            parsed.user_id
        );

        let user_id = parsed.user_id;
        self.store.set_cv_data(parsed.cv_data);
        self.store.set_user_id(Some(user_id.clone()));
        self.store.set_current_step(BuilderStep::Review);
        self.preview_url = None;
        self.notify(NoticeLevel::Success, "CV processed successfully!");

        if let Some(snapshot) = self.snapshot_value() {
            self.persist_remote(&user_id, snapshot).await;
        }
        Ok(())
    }
}
