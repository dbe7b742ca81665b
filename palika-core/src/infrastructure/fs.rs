// palika-core/src/infrastructure/fs.rs

use crate::infrastructure::error::InfrastructureError;
use std::io::Write;
use std::path::Path;

/// Write content to a file atomically: write a sibling tempfile, then
/// persist (rename) over the target. Readers either see the previous chart
/// or the new one, never a half-written SVG.
pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(
    path: P,
    content: C,
) -> Result<(), InfrastructureError> {
    let path = path.as_ref();
    let parent = path.parent().unwrap_or_else(|| Path::new("."));

    let mut temp_file = tempfile::NamedTempFile::new_in(parent).map_err(InfrastructureError::Io)?;
    temp_file
        .write_all(content.as_ref())
        .map_err(InfrastructureError::Io)?;
    temp_file
        .persist(path)
        .map_err(|e| InfrastructureError::Io(e.error))?;

    Ok(())
}

/// Create a directory (and parents) when missing.
pub fn ensure_dir<P: AsRef<Path>>(dir: P) -> Result<(), InfrastructureError> {
    std::fs::create_dir_all(dir.as_ref()).map_err(InfrastructureError::Io)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_atomic_write_then_overwrite() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("chart.svg");

        atomic_write(&file_path, "<svg>v1</svg>")?;
        atomic_write(&file_path, "<svg>v2</svg>")?;

        assert_eq!(fs::read_to_string(&file_path)?, "<svg>v2</svg>");
        Ok(())
    }

    #[test]
    fn test_ensure_dir_nested() -> Result<()> {
        let dir = tempdir()?;
        let nested = dir.path().join("media").join("charts");
        ensure_dir(&nested)?;
        assert!(nested.is_dir());
        Ok(())
    }
}
