use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::merge::{self, EVENT_DETAILS, RESOURCES};
use crate::parser;
use crate::records::{Demo, Record, Registration};
use crate::render;
use crate::scanner::{self, Scan};
use crate::settings::Settings;
use crate::summary::EventSummary;

/// Outcome of regenerating one event's README.
#[derive(Debug, Clone)]
pub struct EventReport {
    pub name: String,
    pub readme: PathBuf,
    pub participants: usize,
    pub projects: usize,
}

/// Scan and parse one event directory. Bad documents are logged and skipped.
pub fn collect(dir: &Path, settings: &Settings) -> EventSummary {
    let Scan {
        registrations: reg_files,
        demos: demo_files,
    } = scanner::scan(dir, settings);

    let mut registrations: Vec<Registration> = Vec::new();
    for path in &reg_files {
        match load(path) {
            Some(Record::Registration(r)) => registrations.push(r),
            Some(other) => warn_misplaced(path, &other, "registration"),
            None => {}
        }
    }

    let mut demos: Vec<Demo> = Vec::new();
    for path in &demo_files {
        match load(path) {
            Some(Record::Demo(d)) => demos.push(d),
            Some(other) => warn_misplaced(path, &other, "demo"),
            None => {}
        }
    }

    debug!(
        dir = %dir.display(),
        registrations = registrations.len(),
        demos = demos.len(),
        "Collected records"
    );
    EventSummary::new(registrations, demos)
}

fn load(path: &Path) -> Option<Record> {
    match parser::parse_file(path) {
        Ok(record) => Some(record),
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}

fn warn_misplaced(path: &Path, record: &Record, expected: &str) {
    warn!(
        path = %path.display(),
        found = record.kind(),
        expected,
        "Skipping document in the wrong directory"
    );
}

/// Regenerate `{dir}/README.md`, keeping its Event Details and Resources.
pub fn run_event(dir: &Path, name: &str, settings: &Settings) -> Result<EventReport> {
    let summary = collect(dir, settings);
    let readme = dir.join(&settings.readme_file);

    let preserved = merge::read_back(&readme, &[EVENT_DETAILS, RESOURCES]);
    let doc = render::event_document(name, &preserved, &summary, &render::timestamp());
    merge::write_document(&readme, &doc)?;

    info!(
        path = %readme.display(),
        participants = summary.stats.participants,
        projects = summary.stats.projects,
        "Updated README"
    );

    Ok(EventReport {
        name: name.to_string(),
        readme,
        participants: summary.stats.participants,
        projects: summary.stats.projects,
    })
}
