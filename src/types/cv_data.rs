// src/types/cv_data.rs
//! Structured CV data as returned by the parsing service and edited during review

use serde::{Deserialize, Deserializer, Serialize};

// The parser is LLM-backed and emits `null` for anything it could not find.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ===== CV structure =====

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CvData {
    #[serde(deserialize_with = "null_as_default")]
    pub personal_info: PersonalInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Skills,
    #[serde(deserialize_with = "null_as_default")]
    pub experience: Vec<Experience>,
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "null_as_default")]
    pub certifications: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub headline: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub linkedin: String,
    #[serde(deserialize_with = "null_as_default")]
    pub github: String,
    #[serde(deserialize_with = "null_as_default")]
    pub portfolio: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    #[serde(deserialize_with = "null_as_default")]
    pub technical: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub tools: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub soft: Vec<String>,
}

impl Skills {
    pub fn is_empty(&self) -> bool {
        self.technical.is_empty() && self.tools.is_empty() && self.soft.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    #[serde(alias = "position", deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub duration: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub technologies: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    #[serde(deserialize_with = "null_as_default")]
    pub degree: String,
    #[serde(deserialize_with = "null_as_default")]
    pub institution: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
}

// ===== Section edits =====

/// Partial personal info. Every `Some` field overwrites, `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfoPatch {
    pub full_name: Option<String>,
    pub headline: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub portfolio: Option<String>,
}

impl PersonalInfoPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Field-wise merge into `info`.
    pub fn merge_into(self, info: &mut PersonalInfo) {
        let fields = [
            (self.full_name, &mut info.full_name),
            (self.headline, &mut info.headline),
            (self.email, &mut info.email),
            (self.phone, &mut info.phone),
            (self.location, &mut info.location),
            (self.linkedin, &mut info.linkedin),
            (self.github, &mut info.github),
            (self.portfolio, &mut info.portfolio),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

/// One section-level edit of a [`CvData`].
///
/// `PersonalInfo` merges field by field; every other variant replaces its
/// sub-field wholesale.
#[derive(Debug, Clone, PartialEq)]
pub enum CvPatch {
    PersonalInfo(PersonalInfoPatch),
    Summary(String),
    Skills(Skills),
    Experience(Vec<Experience>),
    Projects(Vec<Project>),
    Education(Vec<Education>),
    Certifications(Vec<String>),
    Achievements(Vec<String>),
}

impl CvPatch {
    /// Section name used in notices and logs.
    pub fn section(&self) -> &'static str {
        match self {
            CvPatch::PersonalInfo(_) => "Personal information",
            CvPatch::Summary(_) => "Summary",
            CvPatch::Skills(_) => "Skills",
            CvPatch::Experience(_) => "Experience",
            CvPatch::Projects(_) => "Projects",
            CvPatch::Education(_) => "Education",
            CvPatch::Certifications(_) => "Certifications",
            CvPatch::Achievements(_) => "Achievements",
        }
    }
}

impl CvData {
    pub fn apply(&mut self, patch: CvPatch) {
        match patch {
            CvPatch::PersonalInfo(partial) => partial.merge_into(&mut self.personal_info),
            CvPatch::Summary(summary) => self.summary = summary,
            CvPatch::Skills(skills) => self.skills = skills,
            CvPatch::Experience(experience) => self.experience = experience,
            CvPatch::Projects(projects) => self.projects = projects,
            CvPatch::Education(education) => self.education = education,
            CvPatch::Certifications(certifications) => self.certifications = certifications,
            CvPatch::Achievements(achievements) => self.achievements = achievements,
        }
    }

    /// Display name, falling back when the parser found none.
    pub fn display_name(&self) -> &str {
        let name = self.personal_info.full_name.trim();
        if name.is_empty() {
            "Unknown"
        } else {
            name
        }
    }
}
