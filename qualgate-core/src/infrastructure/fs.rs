use crate::infrastructure::error::InfrastructureError;
use std::io::Write;
use std::path::Path;

/// Replace `path` with `content` in one step.
///
/// Content goes to a temporary file next to the target, which is then renamed
/// over it. Readers see either the previous artifact or the new one, never a
/// truncated file. Missing parent directories are created.
pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(
    path: P,
    content: C,
) -> Result<(), InfrastructureError> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    // Same directory, so the rename never crosses a filesystem boundary
    let mut staged = tempfile::NamedTempFile::new_in(parent)?;
    staged.write_all(content.as_ref())?;
    staged.as_file().sync_all()?;

    staged
        .persist(path)
        .map_err(|e| InfrastructureError::Io(e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_atomic_write_creates_missing_parents() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("metrics").join("dev").join("out.json");

        atomic_write(&file_path, "{}")?;

        assert_eq!(fs::read_to_string(file_path)?, "{}");
        Ok(())
    }

    #[test]
    fn test_atomic_write_replaces_previous_content() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("out.json");

        atomic_write(&file_path, "first")?;
        atomic_write(&file_path, "second")?;

        assert_eq!(fs::read_to_string(&file_path)?, "second");
        // No staged temp file left behind
        assert_eq!(fs::read_dir(dir.path())?.count(), 1);
        Ok(())
    }
}
