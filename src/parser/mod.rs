pub mod fields;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::records::{Demo, Record, Registration};
use fields::{extract_field, extract_list, has_marker};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unknown file type: {}", .0.display())]
    Unrecognized(PathBuf),
}

/// Read a document and classify it.
pub fn parse_file(path: &Path) -> Result<Record, ParseError> {
    let content = std::fs::read_to_string(path).map_err(|source| ParseError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    classify(&content, path).ok_or_else(|| ParseError::Unrecognized(path.to_path_buf()))
}

/// `username:` marks a registration, `project_name:` a demo; anything else is unrecognized.
pub fn classify(content: &str, path: &Path) -> Option<Record> {
    if has_marker(content, "username") {
        Some(Record::Registration(parse_registration(content, path)))
    } else if has_marker(content, "project_name") {
        Some(Record::Demo(parse_demo(content, path)))
    } else {
        None
    }
}

fn parse_registration(content: &str, path: &Path) -> Registration {
    Registration {
        username: extract_field(content, "username"),
        contact: extract_field(content, "contact"),
        wallet_address: extract_field(content, "wallet_address"),
        role: extract_field(content, "role"),
        team_name: extract_field(content, "team_name"),
        idea: extract_field(content, "idea"),
        support_needed: extract_field(content, "support_needed"),
        notes: extract_field(content, "notes"),
        path: path.to_path_buf(),
    }
}

fn parse_demo(content: &str, path: &Path) -> Demo {
    Demo {
        project_name: extract_field(content, "project_name"),
        description: extract_field(content, "description"),
        project_link: extract_field(content, "project_link"),
        team_members: extract_list(content, "team_members"),
        presentation_link: extract_field(content, "presentation_link"),
        notes: extract_field(content, "notes"),
        path: path.to_path_buf(),
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::NOT_AVAILABLE;

    fn fixture(name: &str) -> (String, PathBuf) {
        let path = PathBuf::from(format!("tests/fixtures/{}", name));
        (std::fs::read_to_string(&path).unwrap(), path)
    }

    #[test]
    fn registration_fixture() {
        let (md, path) = fixture("registration/alice.md");
        let Some(Record::Registration(r)) = classify(&md, &path) else {
            panic!("expected registration");
        };
        assert_eq!(r.username, "alice");
        assert_eq!(r.contact, "@alice_eth");
        assert_eq!(r.role, "Developer/Designer");
        assert_eq!(r.team_name, "Smart Accounts");
        assert_eq!(r.wallet_address, "0x1234567890abcdef1234567890abcdef12345678");
        assert_eq!(r.notes, NOT_AVAILABLE);
        assert_eq!(r.path, path);
    }

    #[test]
    fn demo_fixture() {
        let (md, path) = fixture("demos/batch-signer.md");
        let Some(Record::Demo(d)) = classify(&md, &path) else {
            panic!("expected demo");
        };
        assert_eq!(d.project_name, "Batch Signer");
        assert_eq!(d.project_link, "https://github.com/example/batch-signer");
        assert_eq!(d.team_members, vec!["alice", "bob"]);
        assert_eq!(d.presentation_link, NOT_AVAILABLE);
    }

    #[test]
    fn username_wins_over_project_name() {
        let md = "username: \"dave\"\nproject_name: \"Side Project\"";
        let record = classify(md, Path::new("x.md")).unwrap();
        assert_eq!(record.kind(), "registration");
    }

    #[test]
    fn unrecognized_is_none() {
        assert!(classify("# Notes\nnothing to see", Path::new("x.md")).is_none());
    }

    #[test]
    fn parse_file_unrecognized() {
        let (_, path) = fixture("unrecognized.md");
        assert!(matches!(parse_file(&path), Err(ParseError::Unrecognized(_))));
    }

    #[test]
    fn parse_file_missing_is_read_error() {
        let err = parse_file(Path::new("tests/fixtures/does-not-exist.md")).unwrap_err();
        assert!(matches!(err, ParseError::Read { .. }));
        assert!(err.to_string().contains("does-not-exist.md"));
    }

    #[test]
    fn parse_file_invalid_utf8_is_read_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("binary.md");
        std::fs::write(&path, b"\xff\xfe\x00\x80").unwrap();
        assert!(matches!(parse_file(&path), Err(ParseError::Read { .. })));
    }
}
