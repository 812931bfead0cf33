use anyhow::Result;
use std::path::Path;

/// Check that `path` names a `.csv` table. The file itself may not exist yet.
pub fn validate_csv_extension<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    match ext.as_deref() {
        Some("csv") => Ok(()),
        _ => anyhow::bail!("Performance table must have a .csv extension: {}", path.display()),
    }
}

/// Check that `path` names an `.html` report.
pub fn validate_html_extension<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    match ext.as_deref() {
        Some("html") | Some("htm") => Ok(()),
        _ => anyhow::bail!("Report file must have a .html extension: {}", path.display()),
    }
}
