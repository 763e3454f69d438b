// src/cli.rs
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use crate::app_log;
use crate::store::SessionStore;
use crate::types::{
    BuilderStep, CvData, CvPatch, DeploymentPlatform, DeploymentStatus, PersonalInfoPatch,
    SectionConfig, StepProgress, Theme,
};
use crate::utils;
use crate::workflow::{Notice, NoticeLevel, Wizard};

#[derive(Parser)]
#[command(name = "portfolio-builder")]
#[command(about = "Turn a CV into a deployed portfolio website")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start building a portfolio
    Start,
    /// Upload a CV (.pdf or .docx) and extract its content
    Upload { file: PathBuf },
    /// Show progress, CV content, site settings and deployment
    Show,
    /// Update personal information fields
    EditPersonal(PersonalInfoArgs),
    /// Replace the summary text
    EditSummary { text: String },
    /// Replace a CV section with the JSON content of a file
    EditSection {
        #[arg(value_enum)]
        section: CvSection,
        file: PathBuf,
    },
    /// Generate the site and move on to the preview
    Generate,
    /// Print the preview URL
    Preview,
    /// Pick the site theme
    Theme {
        #[arg(value_enum)]
        theme: Theme,
    },
    /// Show or hide a site section
    ToggleSection { id: String },
    /// Put sections in the given order (comma separated ids)
    Reorder {
        #[arg(value_delimiter = ',', required = true)]
        ids: Vec<String>,
    },
    /// Send a JSON partial update to the generated site
    ApplyEdit { updates: String },
    /// Move from preview to deployment
    OpenDeploy,
    /// Pick the hosting platform
    Platform {
        #[arg(value_enum)]
        platform: DeploymentPlatform,
    },
    /// Deploy the site
    Deploy {
        #[arg(long, value_enum)]
        platform: Option<DeploymentPlatform>,
    },
    /// Set deployment back to idle so the site can be deployed again
    Redeploy,
    /// Go back one step
    Back,
    /// Discard the session and start over
    Reset,
}

#[derive(Args, Default)]
pub struct PersonalInfoArgs {
    #[arg(long)]
    pub full_name: Option<String>,
    #[arg(long)]
    pub headline: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub linkedin: Option<String>,
    #[arg(long)]
    pub github: Option<String>,
    #[arg(long)]
    pub portfolio: Option<String>,
}

impl From<PersonalInfoArgs> for PersonalInfoPatch {
    fn from(args: PersonalInfoArgs) -> Self {
        Self {
            full_name: args.full_name,
            headline: args.headline,
            email: args.email,
            phone: args.phone,
            location: args.location,
            linkedin: args.linkedin,
            github: args.github,
            portfolio: args.portfolio,
        }
    }
}

/// CV sections replaced wholesale from a JSON file
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CvSection {
    Skills,
    Experience,
    Projects,
    Education,
    Certifications,
    Achievements,
}

impl CvSection {
    /// Parse `json` into the patch for this section
    pub fn parse_patch(&self, json: &str) -> Result<CvPatch> {
        let patch = match self {
            CvSection::Skills => CvPatch::Skills(serde_json::from_str(json)?),
            CvSection::Experience => CvPatch::Experience(serde_json::from_str(json)?),
            CvSection::Projects => CvPatch::Projects(serde_json::from_str(json)?),
            CvSection::Education => CvPatch::Education(serde_json::from_str(json)?),
            CvSection::Certifications => CvPatch::Certifications(serde_json::from_str(json)?),
            CvSection::Achievements => CvPatch::Achievements(serde_json::from_str(json)?),
        };
        Ok(patch)
    }
}

pub async fn handle_command(command: Command, wizard: &mut Wizard) -> Result<()> {
    match command {
        Command::Start => {
            wizard.start();
            println!("📄 Upload your CV to begin: portfolio-builder upload <file.pdf|file.docx>");
        }

        Command::Upload { file } => {
            wizard.upload_cv(&file).await?;
            if let Some(cv) = wizard.store().cv_data() {
                print_cv(cv);
            }
        }

        Command::Show => print_session(wizard),

        Command::EditPersonal(args) => {
            let patch = PersonalInfoPatch::from(args);
            if patch.is_empty() {
                anyhow::bail!("Nothing to update: pass at least one --field");
            }
            wizard.save_section(CvPatch::PersonalInfo(patch))?;
        }

        Command::EditSummary { text } => {
            wizard.save_section(CvPatch::Summary(text))?;
        }

        Command::EditSection { section, file } => {
            let patch = read_section_patch(section, &file)?;
            wizard.save_section(patch)?;
        }

        Command::Generate => {
            let url = wizard.continue_to_preview().await?;
            println!("🔗 Preview: {}", url);
        }

        Command::Preview => {
            let url = wizard.refresh_preview().await?;
            println!("🔗 Preview: {}", url);
        }

        Command::Theme { theme } => {
            wizard.store_mut().set_theme(theme);
            println!("🎨 Theme: {} ({})", theme, theme.description());
        }

        Command::ToggleSection { id } => {
            let store = wizard.store_mut();
            if store.website_config().section(&id).is_none() {
                anyhow::bail!("Unknown section: {}", id);
            }
            store.toggle_section_visibility(&id);
            print_sections(store);
        }

        Command::Reorder { ids } => {
            let store = wizard.store_mut();
            let sections = reorder_by_ids(&store.website_config().sections, &ids)?;
            store.reorder_sections(sections);
            print_sections(store);
        }

        Command::ApplyEdit { updates } => {
            let updates: serde_json::Value =
                serde_json::from_str(&updates).context("Updates must be valid JSON")?;
            let url = wizard.apply_edit(updates).await?;
            println!("🔗 Preview: {}", url);
        }

        Command::OpenDeploy => {
            wizard.open_deploy()?;
            let platform = wizard.store().deployment().platform;
            println!(
                "🚀 Ready to deploy to {}: portfolio-builder deploy [--platform vercel|netlify]",
                platform.display_name()
            );
        }

        Command::Platform { platform } => {
            wizard.select_platform(platform);
            let selected = wizard.store().deployment().platform;
            println!("🚀 Platform: {}", selected.display_name());
        }

        Command::Deploy { platform } => {
            if let Some(platform) = platform {
                wizard.select_platform(platform);
            }
            let url = wizard.deploy().await?;
            println!("🌐 Live at: {}", url);
        }

        Command::Redeploy => {
            wizard.edit_and_redeploy();
            println!("Deployment reset; edit your site and deploy again.");
        }

        Command::Back => {
            let step = wizard.back();
            println!("← {}", step.label());
        }

        Command::Reset => {
            wizard.store_mut().reset();
            println!("Session cleared.");
        }
    }

    Ok(())
}

fn read_section_patch(section: CvSection, file: &Path) -> Result<CvPatch> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read file: {}", file.display()))?;
    section
        .parse_patch(&json)
        .with_context(|| format!("Invalid {:?} JSON in {}", section, file.display()))
}

/// Sections in the order of `ids`, followed by the unlisted ones in their current order.
/// Order keys are renumbered from zero.
pub fn reorder_by_ids(current: &[SectionConfig], ids: &[String]) -> Result<Vec<SectionConfig>> {
    let mut ordered = Vec::with_capacity(current.len());

    for id in ids {
        if ordered.iter().any(|s: &SectionConfig| &s.id == id) {
            anyhow::bail!("Section listed twice: {}", id);
        }
        let section = current
            .iter()
            .find(|s| &s.id == id)
            .ok_or_else(|| anyhow::anyhow!("Unknown section: {}", id))?;
        ordered.push(section.clone());
    }

    let mut rest: Vec<&SectionConfig> = current
        .iter()
        .filter(|s| !ids.contains(&s.id))
        .collect();
    rest.sort_by_key(|s| s.order);
    ordered.extend(rest.into_iter().cloned());

    for (order, section) in (0..).zip(ordered.iter_mut()) {
        section.order = order;
    }
    Ok(ordered)
}

pub fn print_notices(notices: Vec<Notice>) {
    for notice in notices {
        match notice.level {
            NoticeLevel::Success => println!("✅ {}", notice.message),
            NoticeLevel::Info => println!("ℹ️  {}", notice.message),
            NoticeLevel::Error => eprintln!("❌ {}", notice.message),
        }
    }
}

fn print_session(wizard: &Wizard) {
    let store = wizard.store();
    print_steps(store.current_step());

    match store.user_id() {
        Some(user_id) => println!("Session: {}", user_id),
        None => println!("Session: none"),
    }
    if let Some(file) = store.uploaded_file() {
        println!(
            "File: {} ({})",
            file.name,
            utils::format_size_mb(file.size)
        );
    }

    match store.cv_data() {
        Some(cv) => print_cv(cv),
        None => println!("No CV data yet."),
    }

    let config = store.website_config();
    println!();
    println!("🎨 Theme: {} ({})", config.theme, config.theme.description());
    print_sections(store);

    let deployment = store.deployment();
    println!();
    println!(
        "🚀 Deployment: {} on {}",
        deployment.status,
        deployment.platform.display_name()
    );
    match deployment.status {
        DeploymentStatus::Success => {
            if let Some(url) = &deployment.url {
                println!("   Live at: {}", url);
            }
        }
        DeploymentStatus::Error => {
            if let Some(error) = &deployment.error {
                println!("   {}", error);
            }
        }
        _ => {}
    }
    if let Some(url) = wizard.preview_url() {
        println!("🔗 Preview: {}", url);
    }
}

fn print_steps(current: BuilderStep) {
    let line = BuilderStep::INDICATOR
        .iter()
        .map(|step| {
            let marker = match step.progress(current) {
                StepProgress::Completed => "✓",
                StepProgress::Active => "●",
                StepProgress::Pending => "○",
            };
            format!("{} {}. {}", marker, step.number(), step.label())
        })
        .collect::<Vec<_>>()
        .join("  ─  ");
    println!("{}", line);
}

fn print_cv(cv: &CvData) {
    let info = &cv.personal_info;
    println!();
    println!("👤 {}", cv.display_name());
    if !info.headline.is_empty() {
        println!("   {}", info.headline);
    }
    let contacts: Vec<&str> = [
        &info.email,
        &info.phone,
        &info.location,
        &info.linkedin,
        &info.github,
        &info.portfolio,
    ]
    .into_iter()
    .map(String::as_str)
    .filter(|s| !s.is_empty())
    .collect();
    if !contacts.is_empty() {
        println!("   {}", contacts.join(" · "));
    }
    if !cv.summary.is_empty() {
        println!("   {}", cv.summary);
    }

    if !cv.skills.is_empty() {
        println!(
            "   Skills: {}",
            cv.skills
                .technical
                .iter()
                .chain(&cv.skills.tools)
                .chain(&cv.skills.soft)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    for exp in &cv.experience {
        println!("   💼 {} at {} ({})", exp.role, exp.company, exp.duration);
    }
    for project in &cv.projects {
        println!("   🛠  {}", project.title);
    }
    for edu in &cv.education {
        println!("   🎓 {}, {}", edu.degree, edu.institution);
    }
    if !cv.certifications.is_empty() {
        println!("   Certifications: {}", cv.certifications.join(", "));
    }
    if !cv.achievements.is_empty() {
        println!("   Achievements: {}", cv.achievements.join(", "));
    }
}

fn print_sections(store: &SessionStore) {
    for section in store.website_config().ordered_sections() {
        let marker = if section.visible { "👁 " } else { "  " };
        println!("   {} {:<12} ({})", marker, section.name, section.id);
    }
    app_log!(
        debug,
        "{} of {} sections visible",
        store.website_config().visible_sections().len(),
        store.website_config().sections.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WebsiteConfig;

    fn ids(sections: &[SectionConfig]) -> Vec<&str> {
        sections.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_reorder_by_ids_moves_listed_first() {
        let current = WebsiteConfig::default_sections();
        let reordered =
            reorder_by_ids(&current, &["contact".to_string(), "skills".to_string()]).unwrap();

        assert_eq!(
            ids(&reordered),
            vec!["contact", "skills", "hero", "about", "experience", "projects", "education"]
        );
        let orders: Vec<i32> = reordered.iter().map(|s| s.order).collect();
        assert_eq!(orders, (0..7).collect::<Vec<_>>());
    }

    #[test]
    fn test_reorder_by_ids_keeps_visibility() {
        let mut current = WebsiteConfig::default_sections();
        current[2].visible = false;

        let reordered = reorder_by_ids(&current, &["skills".to_string()]).unwrap();
        assert_eq!(reordered[0].id, "skills");
        assert!(!reordered[0].visible);
    }

    #[test]
    fn test_reorder_by_ids_rejects_unknown_and_duplicates() {
        let current = WebsiteConfig::default_sections();
        assert!(reorder_by_ids(&current, &["blog".to_string()]).is_err());
        assert!(reorder_by_ids(&current, &["hero".to_string(), "hero".to_string()]).is_err());
    }

    #[test]
    fn test_section_patch_from_json() {
        let patch = CvSection::Experience
            .parse_patch(r#"[{"role":"Engineer","company":"Acme","description":["Built things"]}]"#)
            .unwrap();
        match patch {
            CvPatch::Experience(entries) => {
                assert_eq!(entries[0].company, "Acme");
                assert_eq!(entries[0].description, vec!["Built things".to_string()]);
            }
            other => panic!("unexpected patch: {:?}", other),
        }

        assert!(CvSection::Certifications.parse_patch("{}").is_err());
    }

    #[test]
    fn test_personal_args_into_patch() {
        let patch = PersonalInfoPatch::from(PersonalInfoArgs {
            email: Some("ada@example.com".to_string()),
            ..Default::default()
        });
        assert_eq!(patch.email.as_deref(), Some("ada@example.com"));
        assert!(patch.full_name.is_none());
        assert!(PersonalInfoPatch::from(PersonalInfoArgs::default()).is_empty());
    }

    #[test]
    fn test_cli_parses_deploy_platform() {
        let cli = Cli::try_parse_from(["portfolio-builder", "deploy", "--platform", "netlify"])
            .unwrap();
        match cli.command {
            Command::Deploy { platform } => {
                assert_eq!(platform, Some(DeploymentPlatform::Netlify))
            }
            _ => panic!("expected deploy"),
        }
    }

    #[test]
    fn test_cli_parses_comma_separated_reorder() {
        let cli = Cli::try_parse_from(["portfolio-builder", "reorder", "contact,hero"]).unwrap();
        match cli.command {
            Command::Reorder { ids } => assert_eq!(ids, vec!["contact", "hero"]),
            _ => panic!("expected reorder"),
        }
    }
}
