// src/types/response.rs
use serde::{Deserialize, Serialize};

use crate::types::cv_data::CvData;

// ===== Service Response Types =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadCvResponse {
    pub cv_data: CvData,
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewResponse {
    pub preview_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditSiteResponse {
    #[serde(default = "default_status")]
    pub status: String,
    pub preview_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployResponse {
    #[serde(default = "default_status")]
    pub status: String,
    pub live_url: String,
}

/// Acknowledgement of a persisted state snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreStateAck {
    pub status: String,
    pub reference_id: String,
}

fn default_status() -> String {
    "success".to_string()
}
