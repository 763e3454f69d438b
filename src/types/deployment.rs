// src/types/deployment.rs
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentPlatform {
    #[default]
    Vercel,
    Netlify,
}

impl DeploymentPlatform {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentPlatform::Vercel => "vercel",
            DeploymentPlatform::Netlify => "netlify",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DeploymentPlatform::Vercel => "Vercel",
            DeploymentPlatform::Netlify => "Netlify",
        }
    }
}

impl fmt::Display for DeploymentPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentStatus {
    #[default]
    Idle,
    Deploying,
    Success,
    Error,
}

impl fmt::Display for DeploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DeploymentStatus::Idle => "idle",
            DeploymentStatus::Deploying => "deploying",
            DeploymentStatus::Success => "success",
            DeploymentStatus::Error => "error",
        };
        f.write_str(s)
    }
}

/// Deployment progress. `url` is only meaningful on success, `error` only on error;
/// the store does not enforce this, callers pass consistent combinations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentState {
    pub platform: DeploymentPlatform,
    pub status: DeploymentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DeploymentState {
    pub fn is_consistent(&self) -> bool {
        let url_ok = self.url.is_none() || self.status == DeploymentStatus::Success;
        let error_ok = self.error.is_none() || self.status == DeploymentStatus::Error;
        url_ok && error_ok
    }

    pub fn is_in_flight(&self) -> bool {
        self.status == DeploymentStatus::Deploying
    }
}
