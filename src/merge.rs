use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// A hand-maintained `## heading` block carried across regenerations.
#[derive(Debug, Clone, Copy)]
pub struct Region {
    pub heading: &'static str,
    pub default: &'static str,
}

pub const EVENT_DETAILS: Region = Region {
    heading: "Event Details",
    default: "- **Date**: TBD\n- **Location**: TBD\n- **Theme**: TBD",
};

pub const RESOURCES: Region = Region {
    heading: "Resources",
    default: "- [Event Schedule](#)\n- [Judging Criteria](#)\n- [Prizes](#)",
};

pub const INTRODUCTION: Region = Region {
    heading: "Introduction",
    default: "Welcome! This repository tracks participant registrations and project demos for our hackathons.",
};

pub const HOW_TO_PARTICIPATE: Region = Region {
    heading: "How to Participate",
    default: "1. Pick a hackathon from the table above.\n\
              2. Copy `registration/template.md` to `registration/<your-username>.md` and fill it in.\n\
              3. When your project is ready, copy `demos/template.md` to `demos/<project-name>.md`.\n\
              4. Open a pull request.",
};

/// Region bodies read back from a previous document, defaults filled in.
#[derive(Debug, Clone, Default)]
pub struct Preserved {
    sections: HashMap<&'static str, String>,
}

impl Preserved {
    pub fn defaults(regions: &[Region]) -> Self {
        Preserved {
            sections: regions
                .iter()
                .map(|r| (r.heading, r.default.to_string()))
                .collect(),
        }
    }

    /// Body for `region`, or its default if the region was never read.
    pub fn get<'a>(&'a self, region: &Region) -> &'a str {
        self.sections
            .get(region.heading)
            .map(String::as_str)
            .unwrap_or(region.default)
    }
}

/// Read `regions` out of the document at `path`. A missing or unreadable
/// document, or a missing/blank region, falls back to the defaults.
pub fn read_back(path: &Path, regions: &[Region]) -> Preserved {
    let existing = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "No previous document, using defaults");
            return Preserved::defaults(regions);
        }
    };

    let sections = regions
        .iter()
        .map(|r| {
            let body = extract_section(&existing, r.heading)
                .filter(|b| !b.is_empty())
                .unwrap_or_else(|| r.default.to_string());
            (r.heading, body)
        })
        .collect();
    Preserved { sections }
}

/// Text under `## heading` up to the next `##` heading outside a code fence, trimmed.
pub fn extract_section(doc: &str, heading: &str) -> Option<String> {
    let mut lines = doc.lines();
    lines.find(|l| section_heading(l).is_some_and(|h| h == heading))?;

    let mut in_fence = false;
    let mut body = Vec::new();
    for line in lines {
        if is_fence(line) {
            in_fence = !in_fence;
        } else if !in_fence && section_heading(line).is_some() {
            break;
        }
        body.push(line);
    }
    Some(body.join("\n").trim().to_string())
}

/// `Some(text)` for a `## ` heading line.
fn section_heading(line: &str) -> Option<&str> {
    line.trim_end().strip_prefix("## ").map(str::trim)
}

fn is_fence(line: &str) -> bool {
    let line = line.trim_start();
    line.starts_with("```") || line.starts_with("~~~")
}

/// Replace the whole file. This is the only failure that aborts a run.
pub fn write_document(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "# 7702 Hackathon\n\nWelcome!\n\n## Event Details\n\n- **Date**: 2025-05-07\n- **Theme**: Account abstraction\n\n## Resources\n\n- [Docs](https://eips.ethereum.org/EIPS/eip-7702)\n\n### Workshops\n\n- Day 1: delegation\n\n## Participants\n\n| Username |\n";

    #[test]
    fn extracts_until_next_heading() {
        assert_eq!(
            extract_section(DOC, "Event Details").unwrap(),
            "- **Date**: 2025-05-07\n- **Theme**: Account abstraction"
        );
    }

    #[test]
    fn subheadings_stay_in_region() {
        assert_eq!(
            extract_section(DOC, "Resources").unwrap(),
            "- [Docs](https://eips.ethereum.org/EIPS/eip-7702)\n\n### Workshops\n\n- Day 1: delegation"
        );
    }

    #[test]
    fn runs_to_end_of_document() {
        let doc = "## Resources\n\ncustom\ntext\n";
        assert_eq!(extract_section(doc, "Resources").unwrap(), "custom\ntext");
    }

    #[test]
    fn absent_heading_is_none() {
        assert!(extract_section(DOC, "How to Participate").is_none());
        assert!(extract_section("### Resources\n\nx", "Resources").is_none());
    }

    #[test]
    fn code_fence_comments_stay_in_region() {
        let resources = "Setup:\n\n```sh\n# install foundry\ncurl -L https://foundry.paradigm.xyz | bash\n## not a heading either\n```\n\n- [Docs](#)";
        let doc = format!("# Hack\n\n## Resources\n\n{}\n\n## Participants\n\n| Username |\n", resources);
        assert_eq!(extract_section(&doc, "Resources").unwrap(), resources);
    }

    #[test]
    fn title_is_not_a_region() {
        let doc = "# Resources\n\nWelcome to the Resources!\n\n## Event Details\n\nTBD\n";
        assert!(extract_section(doc, "Resources").is_none());
        assert_eq!(extract_section(doc, "Event Details").unwrap(), "TBD");
    }

    #[test]
    fn missing_document_uses_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let p = read_back(&dir.path().join("README.md"), &[EVENT_DETAILS, RESOURCES]);
        assert_eq!(p.get(&EVENT_DETAILS), EVENT_DETAILS.default);
        assert_eq!(p.get(&RESOURCES), RESOURCES.default);
    }

    #[test]
    fn existing_document_preserved_blank_region_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("README.md");
        std::fs::write(&path, "## Event Details\n\n## Resources\n\nBring a laptop.\n").unwrap();
        let p = read_back(&path, &[EVENT_DETAILS, RESOURCES]);
        assert_eq!(p.get(&EVENT_DETAILS), EVENT_DETAILS.default);
        assert_eq!(p.get(&RESOURCES), "Bring a laptop.");
    }

    #[test]
    fn write_replaces_content() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("README.md");
        std::fs::write(&path, "old content that is much longer than the new one").unwrap();
        write_document(&path, "new").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn write_into_missing_dir_fails_with_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nope").join("README.md");
        let err = write_document(&path, "x").unwrap_err();
        assert!(err.to_string().contains("README.md"));
    }
}
