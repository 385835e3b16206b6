use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::settings::Settings;

/// Candidate documents of one event, in directory-listing order.
#[derive(Debug, Default)]
pub struct Scan {
    pub registrations: Vec<PathBuf>,
    pub demos: Vec<PathBuf>,
}

pub fn scan(base: &Path, settings: &Settings) -> Scan {
    Scan {
        registrations: scan_dir(&base.join(&settings.registration_dir), settings),
        demos: scan_dir(&base.join(&settings.demos_dir), settings),
    }
}

/// Files with the configured extension directly inside `dir`, minus the template.
/// A missing directory is reported and yields nothing.
pub fn scan_dir(dir: &Path, settings: &Settings) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "Directory not found");
            return Vec::new();
        }
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "Skipping unreadable entry");
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let ext_matches = path
            .extension()
            .is_some_and(|ext| ext.to_string_lossy() == settings.extension);
        if !ext_matches {
            continue;
        }
        if path.file_name().is_some_and(|n| n.to_string_lossy() == settings.template_file) {
            debug!(path = %path.display(), "Skipping template");
            continue;
        }
        files.push(path);
    }
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(paths: &[PathBuf]) -> Vec<String> {
        let mut names: Vec<String> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn fixture_event_excludes_templates() {
        let s = scan(Path::new("tests/fixtures"), &Settings::default());
        assert_eq!(names(&s.registrations), vec!["alice.md", "bob.md"]);
        assert_eq!(names(&s.demos), vec!["batch-signer.md"]);
    }

    #[test]
    fn missing_dirs_are_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let s = scan(dir.path(), &Settings::default());
        assert!(s.registrations.is_empty());
        assert!(s.demos.is_empty());
    }

    #[test]
    fn other_extensions_and_subdirs_ignored() {
        let dir = tempfile::TempDir::new().unwrap();
        let reg = dir.path().join("registration");
        std::fs::create_dir_all(reg.join("nested.md")).unwrap();
        std::fs::write(reg.join("carol.md"), "username: \"carol\"").unwrap();
        std::fs::write(reg.join("carol.txt"), "username: \"carol\"").unwrap();
        std::fs::write(reg.join("README"), "").unwrap();
        let files = scan_dir(&reg, &Settings::default());
        assert_eq!(names(&files), vec!["carol.md"]);
    }
}
