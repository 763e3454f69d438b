// src/types/mod.rs
pub mod cv_data;
pub mod deployment;
pub mod response;
pub mod step;
pub mod website;

pub use cv_data::{
    CvData, CvPatch, Education, Experience, PersonalInfo, PersonalInfoPatch, Project, Skills,
};
pub use deployment::{DeploymentPlatform, DeploymentState, DeploymentStatus};
pub use step::{BuilderStep, StepProgress};
pub use website::{SectionConfig, Theme, WebsiteConfig};
