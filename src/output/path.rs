//! Output path checks shared by the JSON and SVG writers.

use crate::utils::error::OutputError;
use log::debug;
use std::path::Path;

/// Make `path` ready to be created as a file
///
/// **Public** - called by every writer before `File::create`
///
/// # Errors
/// * `OutputError::InvalidPath` - Path is empty, names a directory, or its
///   parent directories cannot be created
pub fn prepare_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_rejected() {
        assert!(matches!(
            prepare_output_path(Path::new("")),
            Err(OutputError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_directory_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(prepare_output_path(temp_dir.path()).is_err());
    }

    #[test]
    fn test_missing_parents_created() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("a/b/out.json");

        prepare_output_path(&nested).unwrap();

        assert!(nested.parent().unwrap().is_dir());
        assert!(!nested.exists());
    }

    #[test]
    fn test_blocked_parent_reported() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file = temp_dir.path().join("plain");
        std::fs::write(&file, "x").unwrap();

        let result = prepare_output_path(&file.join("child.svg"));
        assert!(matches!(result, Err(OutputError::InvalidPath(_))));
    }
}
