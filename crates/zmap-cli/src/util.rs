use anyhow::{Context, Result};
use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

/// Output files must be `.html`.
pub fn validate_html_path(path: &str) -> Result<PathBuf> {
    let pb = PathBuf::from(path);

    let ext = pb
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    match ext.as_deref() {
        Some("html") | Some("htm") => {}
        _ => anyhow::bail!("Output file must have a .html extension: {}", path),
    }

    Ok(pb)
}

/// Create `dir` (and parents) if missing.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))
}

pub fn write_bytes_to_file(path: &str, bytes: &[u8]) -> std::io::Result<()> {
    let path = Path::new(path);
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_html_path() {
        assert!(validate_html_path("out.html").is_ok());
        assert!(validate_html_path("OUT.HTM").is_ok());
        assert!(validate_html_path("out.png").is_err());
        assert!(validate_html_path("out").is_err());
    }
}
