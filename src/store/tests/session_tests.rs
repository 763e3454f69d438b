use super::*;
use crate::types::PersonalInfo;

fn sample_cv() -> CvData {
    CvData {
        personal_info: PersonalInfo {
            full_name: "Ada Lovelace".to_string(),
            headline: "Analyst".to_string(),
            email: "ada@example.com".to_string(),
            ..Default::default()
        },
        summary: "Wrote the first program.".to_string(),
        skills: Skills {
            technical: vec!["Rust".to_string()],
            tools: vec!["git".to_string()],
            soft: vec!["Writing".to_string()],
        },
        experience: vec![Experience {
            role: "Programmer".to_string(),
            company: "Analytical Engines".to_string(),
            location: "London".to_string(),
            duration: "1842 - 1843".to_string(),
            description: vec!["Annotated the engine".to_string()],
        }],
        certifications: vec!["Royal Society".to_string()],
        ..Default::default()
    }
}

fn store_with_cv() -> SessionStore {
    let mut store = SessionStore::new();
    store.set_cv_data(sample_cv());
    store
}

#[test]
fn personal_info_updates_merge_successive_partials() {
    let mut store = store_with_cv();

    store.update_personal_info(PersonalInfoPatch {
        headline: Some("Engineer".to_string()),
        ..Default::default()
    });
    store.update_personal_info(PersonalInfoPatch {
        email: Some("lovelace@example.com".to_string()),
        github: Some("github.com/ada".to_string()),
        ..Default::default()
    });
    store.update_personal_info(PersonalInfoPatch {
        headline: Some("Principal Engineer".to_string()),
        ..Default::default()
    });

    let info = &store.cv_data().unwrap().personal_info;
    assert_eq!(info.full_name, "Ada Lovelace");
    assert_eq!(info.headline, "Principal Engineer");
    assert_eq!(info.email, "lovelace@example.com");
    assert_eq!(info.github, "github.com/ada");
}

#[test]
fn cv_updates_without_cv_data_leave_state_unchanged() {
    let mut store = SessionStore::new();
    let before = store.state().clone();

    store.update_personal_info(PersonalInfoPatch {
        full_name: Some("Nobody".to_string()),
        ..Default::default()
    });
    store.update_summary("ignored".to_string());
    store.update_skills(Skills::default());
    store.update_experience(Vec::new());
    store.update_projects(Vec::new());
    store.update_education(Vec::new());
    store.update_certifications(vec!["x".to_string()]);
    store.update_achievements(vec!["y".to_string()]);

    assert_eq!(store.state(), &before);
    assert!(store.cv_data().is_none());
}

#[test]
fn list_updates_replace_their_section() {
    let mut store = store_with_cv();

    store.update_summary("New summary".to_string());
    store.update_projects(vec![Project {
        title: "Difference Engine".to_string(),
        technologies: vec!["Brass".to_string()],
        ..Default::default()
    }]);
    store.update_certifications(Vec::new());
    store.update_achievements(vec!["First algorithm".to_string()]);

    let cv = store.cv_data().unwrap();
    assert_eq!(cv.summary, "New summary");
    assert_eq!(cv.projects.len(), 1);
    assert_eq!(cv.projects[0].title, "Difference Engine");
    assert!(cv.certifications.is_empty());
    assert_eq!(cv.achievements, vec!["First algorithm".to_string()]);
    // untouched sections stay as they were
    assert_eq!(cv.experience, sample_cv().experience);
}

#[test]
fn toggle_twice_restores_visibility() {
    let mut store = SessionStore::new();
    let initial = store.website_config().sections.clone();

    store.toggle_section_visibility("skills");
    assert!(!store.website_config().section("skills").unwrap().visible);
    assert_eq!(store.website_config().section("skills").unwrap().order, 2);

    store.toggle_section_visibility("skills");
    assert_eq!(store.website_config().sections, initial);
}

#[test]
fn toggle_unknown_section_is_noop() {
    let mut store = SessionStore::new();
    let before = store.website_config().clone();

    store.toggle_section_visibility("testimonials");

    assert_eq!(store.website_config(), &before);
}

#[test]
fn reorder_replaces_sections_without_validation() {
    let mut store = SessionStore::new();
    let reordered = vec![
        SectionConfig::new("contact", "Contact", 10),
        SectionConfig::new("hero", "Hero", 20),
        SectionConfig::new("hero", "Hero again", 20),
    ];

    store.reorder_sections(reordered.clone());

    assert_eq!(store.website_config().sections, reordered);
}

#[test]
fn deployment_status_overwrites_url_and_error() {
    let mut store = SessionStore::new();
    store.set_deployment_platform(DeploymentPlatform::Netlify);

    store.set_deployment_status(
        DeploymentStatus::Success,
        Some("https://x.netlify.app".to_string()),
        None,
    );
    store.set_deployment_status(DeploymentStatus::Idle, None, None);

    let deployment = store.deployment();
    assert_eq!(deployment.platform, DeploymentPlatform::Netlify);
    assert_eq!(deployment.status, DeploymentStatus::Idle);
    assert!(deployment.url.is_none());
}

#[test]
fn reset_restores_documented_defaults() {
    let mut store = store_with_cv();
    store.set_user_id(Some("u1".to_string()));
    store.set_current_step(BuilderStep::Deploy);
    store.set_theme(Theme::Dark);
    store.toggle_section_visibility("hero");
    store.set_deployment_platform(DeploymentPlatform::Netlify);
    store.set_deployment_status(DeploymentStatus::Error, None, Some("boom".to_string()));
    store.set_is_extracting(true);

    store.reset();

    assert_eq!(store.current_step(), BuilderStep::Landing);
    assert!(store.cv_data().is_none());
    assert!(store.user_id().is_none());
    assert_eq!(store.website_config().theme, Theme::Modern);
    assert_eq!(
        store.website_config().sections,
        WebsiteConfig::default_sections()
    );
    assert_eq!(store.deployment().status, DeploymentStatus::Idle);
    assert_eq!(store.deployment().platform, DeploymentPlatform::Vercel);
    assert!(store.uploaded_file().is_none());
    assert!(!store.is_extracting());
}

#[test]
fn snapshot_round_trip_through_mirror() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = SessionStore::open(SnapshotFile::in_dir(dir.path()));
    store.set_cv_data(sample_cv());
    store.set_user_id(Some("u1".to_string()));
    store.set_theme(Theme::Minimal);
    store.toggle_section_visibility("projects");
    store.set_current_step(BuilderStep::Preview);
    store.set_uploaded_file(Some(UploadedFile {
        name: "cv.pdf".to_string(),
        path: dir.path().join("cv.pdf"),
        size: 42,
    }));
    store.set_is_extracting(true);
    store.set_deployment_status(
        DeploymentStatus::Success,
        Some("https://x.vercel.app".to_string()),
        None,
    );

    let reopened = SessionStore::open(SnapshotFile::in_dir(dir.path()));

    assert_eq!(reopened.user_id(), Some("u1"));
    assert_eq!(reopened.cv_data(), store.cv_data());
    assert_eq!(reopened.website_config(), store.website_config());
    assert_eq!(reopened.current_step(), BuilderStep::Preview);
    // transient fields are not mirrored
    assert!(reopened.uploaded_file().is_none());
    assert!(!reopened.is_extracting());
    // deployment comes back from its sidecar, not from the snapshot record
    assert_eq!(reopened.deployment(), store.deployment());
    let record = std::fs::read_to_string(SnapshotFile::in_dir(dir.path()).path()).unwrap();
    let raw: serde_json::Value = serde_json::from_str(&record).unwrap();
    assert!(raw.get("deployment").is_none());
}

#[test]
fn deployment_platform_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = SessionStore::open(SnapshotFile::in_dir(dir.path()));
    store.set_deployment_platform(DeploymentPlatform::Netlify);
    drop(store);

    let reopened = SessionStore::open(SnapshotFile::in_dir(dir.path()));
    assert_eq!(reopened.deployment().platform, DeploymentPlatform::Netlify);
    assert_eq!(reopened.deployment().status, DeploymentStatus::Idle);
}

#[test]
fn unfinished_deployment_reopens_as_idle() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = SessionStore::open(SnapshotFile::in_dir(dir.path()));
    store.set_deployment_platform(DeploymentPlatform::Netlify);
    store.set_deployment_status(DeploymentStatus::Deploying, None, None);
    drop(store);

    let reopened = SessionStore::open(SnapshotFile::in_dir(dir.path()));
    assert_eq!(reopened.deployment().status, DeploymentStatus::Idle);
    assert_eq!(reopened.deployment().platform, DeploymentPlatform::Netlify);
}

#[test]
fn rehydration_merges_partial_snapshot_over_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let file = SnapshotFile::in_dir(dir.path());
    std::fs::write(file.path(), r#"{"currentStep":"review","userId":"u9"}"#).unwrap();

    let store = SessionStore::open(file);

    assert_eq!(store.current_step(), BuilderStep::Review);
    assert_eq!(store.user_id(), Some("u9"));
    assert!(store.cv_data().is_none());
    assert_eq!(store.website_config(), &WebsiteConfig::default());
}

#[test]
fn corrupt_snapshot_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let file = SnapshotFile::in_dir(dir.path());
    std::fs::write(file.path(), "][").unwrap();

    let store = SessionStore::open(file);

    assert_eq!(store.state(), &SessionState::default());
}

#[test]
fn reset_is_mirrored() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = SessionStore::open(SnapshotFile::in_dir(dir.path()));
    store.set_cv_data(sample_cv());
    store.set_current_step(BuilderStep::Review);

    store.reset();

    let reopened = SessionStore::open(SnapshotFile::in_dir(dir.path()));
    assert_eq!(reopened.state(), &SessionState::default());
}
