use anyhow::Result;
use std::path::Path;

pub fn validate_json_file(path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    match ext.as_deref() {
        Some("json") => {}
        _ => anyhow::bail!("Config file must have a .json extension: {}", path.display()),
    }

    if !path.exists() {
        anyhow::bail!("Config file does not exist: {}", path.display());
    }

    Ok(())
}
