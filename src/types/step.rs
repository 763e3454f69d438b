// src/types/step.rs
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wizard progress marker. Variant order is the step order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum BuilderStep {
    #[default]
    Landing,
    Upload,
    Review,
    Preview,
    Deploy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepProgress {
    Completed,
    Active,
    Pending,
}

impl BuilderStep {
    /// Steps shown in the progress indicator (landing is not one of them).
    pub const INDICATOR: [BuilderStep; 4] = [
        BuilderStep::Upload,
        BuilderStep::Review,
        BuilderStep::Preview,
        BuilderStep::Deploy,
    ];

    pub fn number(&self) -> u8 {
        match self {
            BuilderStep::Landing => 0,
            BuilderStep::Upload => 1,
            BuilderStep::Review => 2,
            BuilderStep::Preview => 3,
            BuilderStep::Deploy => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BuilderStep::Landing => "Welcome",
            BuilderStep::Upload => "Upload CV",
            BuilderStep::Review => "Review",
            BuilderStep::Preview => "Preview",
            BuilderStep::Deploy => "Deploy",
        }
    }

    pub fn previous(&self) -> Option<BuilderStep> {
        match self {
            BuilderStep::Landing => None,
            BuilderStep::Upload => Some(BuilderStep::Landing),
            BuilderStep::Review => Some(BuilderStep::Upload),
            BuilderStep::Preview => Some(BuilderStep::Review),
            BuilderStep::Deploy => Some(BuilderStep::Preview),
        }
    }

    /// Whether this step needs parsed CV data to be shown.
    pub fn requires_cv_data(&self) -> bool {
        *self > BuilderStep::Upload
    }

    /// Where `self` stands relative to the `current` step.
    pub fn progress(&self, current: BuilderStep) -> StepProgress {
        match current.number().cmp(&self.number()) {
            std::cmp::Ordering::Greater => StepProgress::Completed,
            std::cmp::Ordering::Equal => StepProgress::Active,
            std::cmp::Ordering::Less => StepProgress::Pending,
        }
    }
}

impl fmt::Display for BuilderStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BuilderStep::Landing => "landing",
            BuilderStep::Upload => "upload",
            BuilderStep::Review => "review",
            BuilderStep::Preview => "preview",
            BuilderStep::Deploy => "deploy",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_order() {
        assert!(BuilderStep::Landing < BuilderStep::Upload);
        assert!(BuilderStep::Review < BuilderStep::Preview);
        assert!(BuilderStep::Preview < BuilderStep::Deploy);
        assert_eq!(BuilderStep::Deploy.previous(), Some(BuilderStep::Preview));
        assert_eq!(BuilderStep::Landing.previous(), None);
    }

    #[test]
    fn test_progress_relative_to_current() {
        let current = BuilderStep::Preview;
        assert_eq!(BuilderStep::Upload.progress(current), StepProgress::Completed);
        assert_eq!(BuilderStep::Preview.progress(current), StepProgress::Active);
        assert_eq!(BuilderStep::Deploy.progress(current), StepProgress::Pending);
    }

    #[test]
    fn test_cv_data_gate() {
        assert!(!BuilderStep::Upload.requires_cv_data());
        assert!(BuilderStep::Review.requires_cv_data());
        assert!(BuilderStep::Deploy.requires_cv_data());
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&BuilderStep::Review).unwrap(),
            "\"review\""
        );
    }
}
