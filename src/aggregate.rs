use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use regex::Regex;
use tracing::{info, warn};

use crate::merge::{self, HOW_TO_PARTICIPATE, INTRODUCTION};
use crate::pipeline;
use crate::render::{self, EventRow};
use crate::settings::Settings;

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*Date\*\*:[ \t]*(.+)").unwrap());
static THEME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*Theme\*\*:[ \t]*(.+)").unwrap());

const UNKNOWN: &str = "TBD";

pub struct IndexReport {
    pub readme: PathBuf,
    pub events: Vec<EventRow>,
}

/// Regenerate every event under `events_root`, then the top-level README
/// next to it.
pub fn run_all(events_root: &Path, settings: &Settings) -> Result<IndexReport> {
    let dirs = event_dirs(events_root);
    let root_name = events_root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| settings.events_dir.clone());

    let pb = ProgressBar::new(dirs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} {msg}")?
            .progress_chars("=> "),
    );

    let mut events = Vec::with_capacity(dirs.len());
    for dir in &dirs {
        let slug = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        pb.set_message(slug.clone());
        let name = display_name(&slug);

        let report = match pipeline::run_event(dir, &name, settings) {
            Ok(r) => r,
            Err(e) => {
                pb.abandon();
                return Err(e);
            }
        };
        let (date, theme) = scrape_details(&report.readme);
        events.push(EventRow {
            name: report.name,
            link: format!("{}/{}/{}", root_name, slug, settings.readme_file),
            date,
            theme,
            participants: report.participants,
            projects: report.projects,
        });
        pb.inc(1);
    }
    pb.finish_and_clear();

    let readme = events_root
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(&settings.readme_file);
    let preserved = merge::read_back(&readme, &[INTRODUCTION, HOW_TO_PARTICIPATE]);
    let doc = render::index_document(&preserved, &events, &render::timestamp());
    merge::write_document(&readme, &doc)?;

    info!(path = %readme.display(), hackathons = events.len(), "Updated main README");
    Ok(IndexReport { readme, events })
}

/// Immediate, non-hidden subdirectories, sorted by name.
fn event_dirs(root: &Path) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(root) {
        Ok(e) => e,
        Err(e) => {
            warn!(dir = %root.display(), error = %e, "Hackathons directory not found");
            return Vec::new();
        }
    };
    let mut dirs: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .filter(|p| {
            p.file_name()
                .is_some_and(|n| !n.to_string_lossy().starts_with('.'))
        })
        .collect();
    dirs.sort();
    dirs
}

/// "eip-7702_hackathon" -> "Eip 7702 Hackathon"
pub fn display_name(slug: &str) -> String {
    slug.split(&['-', '_', ' '][..])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Date and theme as written under the event's `Event Details`.
fn scrape_details(readme: &Path) -> (String, String) {
    let doc = match std::fs::read_to_string(readme) {
        Ok(d) => d,
        Err(e) => {
            warn!(path = %readme.display(), error = %e, "Could not re-read README");
            String::new()
        }
    };
    (scrape_label(&doc, &DATE_RE), scrape_label(&doc, &THEME_RE))
}

fn scrape_label(doc: &str, re: &Regex) -> String {
    re.captures(doc)
        .map(|c| c[1].trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string())
}
