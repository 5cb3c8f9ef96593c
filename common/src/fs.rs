use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

pub trait FsExt: AsRef<Path> {
    // Relative paths are resolved against the current working directory, absolute paths are kept.
    fn relative_to_cwd(&self) -> Result<PathBuf> {
        let cwd_dir = std::env::current_dir()?;

        Ok(cwd_dir.join(self))
    }

    fn existing_file(&self) -> Result<PathBuf> {
        let path = self.relative_to_cwd()?;

        if path.is_file() {
            Ok(path)
        } else {
            Err(anyhow!("{:?} is not a valid file", path))
        }
    }
}

impl FsExt for String {}

impl FsExt for &str {}

impl FsExt for PathBuf {}

#[cfg(test)]
mod tests {
    use super::FsExt;

    #[test]
    fn test_absolute_path_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let absolute = dir.path().to_path_buf();

        assert_eq!(absolute.relative_to_cwd().unwrap(), absolute);
    }

    #[test]
    fn test_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("player.conf");
        std::fs::write(&file, "player {}").unwrap();

        assert_eq!(file.existing_file().unwrap(), file);
        assert!(dir.path().join("missing.conf").existing_file().is_err());
        assert!(dir.path().to_path_buf().existing_file().is_err());
    }
}
