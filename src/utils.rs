// src/utils.rs
use anyhow::Result;

/// CV document extensions accepted for upload
pub const ACCEPTED_CV_EXTENSIONS: &[&str] = &["pdf", "docx"];

/// Get file extension in lowercase
pub fn get_file_extension(filename: &str) -> Option<String> {
    std::path::Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Validate file extension against allowed types
pub fn validate_file_extension(filename: &str, allowed: &[&str]) -> Result<()> {
    let ext = get_file_extension(filename).unwrap_or_default();

    if !allowed.contains(&ext.as_str()) {
        anyhow::bail!(
            "Please upload a {} file",
            allowed
                .iter()
                .map(|e| format!(".{}", e))
                .collect::<Vec<_>>()
                .join(" or ")
        );
    }

    Ok(())
}

/// MIME type for an accepted CV document
pub fn content_type_for(file_name: &str) -> Result<&'static str> {
    match get_file_extension(file_name).as_deref() {
        Some("pdf") => Ok("application/pdf"),
        Some("docx") => {
            Ok("application/vnd.openxmlformats-officedocument.wordprocessingml.document")
        }
        _ => anyhow::bail!("Unsupported file format: {}", file_name),
    }
}

/// Size in megabytes with two decimals, as shown next to an uploaded file
pub fn format_size_mb(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}
