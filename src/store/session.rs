// src/store/session.rs
//! Session state container: the single owner of CV data, site configuration,
//! deployment progress and the current wizard step

use std::path::PathBuf;

use crate::app_log;
use crate::store::snapshot::{PersistedSnapshot, SnapshotFile};
use crate::types::{
    BuilderStep, CvData, CvPatch, DeploymentPlatform, DeploymentState, DeploymentStatus,
    Education, Experience, PersonalInfoPatch, Project, SectionConfig, Skills, Theme,
    WebsiteConfig,
};

/// The CV document chosen for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub current_step: BuilderStep,
    pub user_id: Option<String>,
    pub cv_data: Option<CvData>,
    pub website_config: WebsiteConfig,
    pub deployment: DeploymentState,
    // transient, never mirrored
    pub uploaded_file: Option<UploadedFile>,
    pub is_extracting: bool,
}

impl SessionState {
    /// Defaults overlaid with whatever the snapshot carries
    pub fn rehydrate(snapshot: PersistedSnapshot) -> Self {
        let defaults = Self::default();
        Self {
            current_step: snapshot.current_step.unwrap_or(defaults.current_step),
            user_id: snapshot.user_id.or(defaults.user_id),
            cv_data: snapshot.cv_data.or(defaults.cv_data),
            website_config: snapshot
                .website_config
                .unwrap_or(defaults.website_config),
            ..defaults
        }
    }

    pub fn snapshot(&self) -> PersistedSnapshot {
        PersistedSnapshot {
            user_id: self.user_id.clone(),
            cv_data: self.cv_data.clone(),
            website_config: Some(self.website_config.clone()),
            current_step: Some(self.current_step),
        }
    }
}

/// Synchronous, infallible mutators over a [`SessionState`], each mirrored
/// to the snapshot file (and its deployment sidecar) when one is attached.
#[derive(Debug, Default)]
pub struct SessionStore {
    state: SessionState,
    mirror: Option<SnapshotFile>,
}

impl SessionStore {
    /// In-memory store with defaults and no durable mirror
    pub fn new() -> Self {
        Self::default()
    }

    /// Store rehydrated from `mirror`, writing back to it after every mutation.
    ///
    /// Deployment progress comes from the mirror's sidecar record. A deployment left
    /// `deploying` by an earlier process is settled back to idle.
    pub fn open(mirror: SnapshotFile) -> Self {
        let mut state = match mirror.load() {
            Some(snapshot) => {
                app_log!(debug, "Rehydrated session from {}", mirror.path().display());
                SessionState::rehydrate(snapshot)
            }
            None => SessionState::default(),
        };
        if let Some(mut deployment) = mirror.load_deployment() {
            if deployment.is_in_flight() {
                app_log!(warn, "Previous deployment never finished; marking it idle");
                deployment.status = DeploymentStatus::Idle;
            }
            state.deployment = deployment;
        }
        Self {
            state,
            mirror: Some(mirror),
        }
    }

    // ===== Reads =====

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn current_step(&self) -> BuilderStep {
        self.state.current_step
    }

    pub fn user_id(&self) -> Option<&str> {
        self.state.user_id.as_deref()
    }

    pub fn cv_data(&self) -> Option<&CvData> {
        self.state.cv_data.as_ref()
    }

    pub fn website_config(&self) -> &WebsiteConfig {
        &self.state.website_config
    }

    pub fn deployment(&self) -> &DeploymentState {
        &self.state.deployment
    }

    pub fn uploaded_file(&self) -> Option<&UploadedFile> {
        self.state.uploaded_file.as_ref()
    }

    pub fn is_extracting(&self) -> bool {
        self.state.is_extracting
    }

    pub fn snapshot(&self) -> PersistedSnapshot {
        self.state.snapshot()
    }

    // ===== Progress and session =====

    pub fn set_current_step(&mut self, step: BuilderStep) {
        self.state.current_step = step;
        self.persist();
    }

    pub fn set_user_id(&mut self, user_id: Option<String>) {
        self.state.user_id = user_id;
        self.persist();
    }

    // ===== CV data =====

    pub fn set_cv_data(&mut self, data: CvData) {
        self.state.cv_data = Some(data);
        self.persist();
    }

    /// Apply a section edit. Skipped entirely when no CV data is loaded.
    pub fn update_cv(&mut self, patch: CvPatch) {
        let Some(cv_data) = self.state.cv_data.as_mut() else {
            app_log!(debug, "Ignoring {} update: no CV data loaded", patch.section());
            return;
        };
        cv_data.apply(patch);
        self.persist();
    }

    pub fn update_personal_info(&mut self, info: PersonalInfoPatch) {
        self.update_cv(CvPatch::PersonalInfo(info));
    }

    pub fn update_summary(&mut self, summary: String) {
        self.update_cv(CvPatch::Summary(summary));
    }

    pub fn update_skills(&mut self, skills: Skills) {
        self.update_cv(CvPatch::Skills(skills));
    }

    pub fn update_experience(&mut self, experience: Vec<Experience>) {
        self.update_cv(CvPatch::Experience(experience));
    }

    pub fn update_projects(&mut self, projects: Vec<Project>) {
        self.update_cv(CvPatch::Projects(projects));
    }

    pub fn update_education(&mut self, education: Vec<Education>) {
        self.update_cv(CvPatch::Education(education));
    }

    pub fn update_certifications(&mut self, certifications: Vec<String>) {
        self.update_cv(CvPatch::Certifications(certifications));
    }

    pub fn update_achievements(&mut self, achievements: Vec<String>) {
        self.update_cv(CvPatch::Achievements(achievements));
    }

    // ===== Website config =====

    pub fn set_theme(&mut self, theme: Theme) {
        self.state.website_config.theme = theme;
        self.persist();
    }

    /// Flip visibility of the section with `section_id`. Unknown ids are ignored.
    pub fn toggle_section_visibility(&mut self, section_id: &str) {
        let Some(section) = self
            .state
            .website_config
            .sections
            .iter_mut()
            .find(|s| s.id == section_id)
        else {
            return;
        };
        section.visible = !section.visible;
        self.persist();
    }

    /// Replace the section list as given; ids and order keys are the caller's concern.
    pub fn reorder_sections(&mut self, sections: Vec<SectionConfig>) {
        self.state.website_config.sections = sections;
        self.persist();
    }

    // ===== Deployment =====

    pub fn set_deployment_platform(&mut self, platform: DeploymentPlatform) {
        self.state.deployment.platform = platform;
        self.persist();
    }

    pub fn set_deployment_status(
        &mut self,
        status: DeploymentStatus,
        url: Option<String>,
        error: Option<String>,
    ) {
        let deployment = &mut self.state.deployment;
        deployment.status = status;
        deployment.url = url;
        deployment.error = error;
        self.persist();
    }

    // ===== Upload =====

    pub fn set_uploaded_file(&mut self, file: Option<UploadedFile>) {
        self.state.uploaded_file = file;
        self.persist();
    }

    pub fn set_is_extracting(&mut self, extracting: bool) {
        self.state.is_extracting = extracting;
        self.persist();
    }

    /// Back to landing with every field at its default
    pub fn reset(&mut self) {
        self.state = SessionState::default();
        self.persist();
    }

    fn persist(&self) {
        let Some(mirror) = &self.mirror else {
            return;
        };
        if let Err(e) = mirror.write(&self.state.snapshot()) {
            app_log!(warn, "Failed to mirror session snapshot: {:#}", e);
        }
        if let Err(e) = mirror.write_deployment(&self.state.deployment) {
            app_log!(warn, "Failed to mirror deployment record: {:#}", e);
        }
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
