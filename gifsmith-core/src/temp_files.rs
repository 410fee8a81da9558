//! Scoped temporary working directories.
//!
//! The extractor writes its frames into a directory that exists only for
//! the duration of one run. The tempfile crate removes it on `Drop`,
//! which covers every exit path, including early returns and failures.

use tempfile::{Builder as TempFileBuilder, TempDir};

use crate::error::CoreResult;

/// Creates the working directory for one pipeline run. Auto-cleaned when
/// dropped.
pub fn create_work_dir(prefix: &str) -> CoreResult<TempDir> {
    Ok(TempFileBuilder::new().prefix(prefix).tempdir()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn work_dir_is_removed_on_drop() {
        let dir = create_work_dir("gifsmith_test_").unwrap();
        let path = dir.path().to_path_buf();
        assert!(path.is_dir());
        std::fs::write(path.join("frames00001.png"), b"frame").unwrap();

        drop(dir);
        assert!(!path.exists());
    }

    #[test]
    fn work_dir_uses_the_given_prefix() {
        let dir = create_work_dir("gifsmith_").unwrap();
        let name = dir.path().file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("gifsmith_"));
    }
}
