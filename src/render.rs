use chrono::Local;

use crate::merge::{Preserved, EVENT_DETAILS, HOW_TO_PARTICIPATE, INTRODUCTION, RESOURCES};
use crate::records::{Demo, Registration};
use crate::summary::EventSummary;

/// One row of the top-level hackathon listing.
#[derive(Debug, Clone)]
pub struct EventRow {
    pub name: String,
    pub link: String,
    pub date: String,
    pub theme: String,
    pub participants: usize,
    pub projects: usize,
}

pub fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Keep a field value inside its table cell.
fn cell(value: &str) -> String {
    value
        .replace('|', "\\|")
        .replace("\r\n", " ")
        .replace('\n', " ")
}

fn table(headers: &[&str], rows: impl IntoIterator<Item = Vec<String>>) -> String {
    let rule: Vec<String> = headers.iter().map(|h| "-".repeat(h.len() + 2)).collect();
    let mut out = format!("| {} |\n|{}|", headers.join(" | "), rule.join("|"));
    for row in rows {
        let cells: Vec<String> = row.iter().map(|c| cell(c)).collect();
        out.push_str(&format!("\n| {} |", cells.join(" | ")));
    }
    out
}

pub fn participants_table(registrations: &[Registration]) -> String {
    table(
        &["Username", "Contact", "Role", "Team"],
        registrations.iter().map(|r| {
            vec![
                r.username.clone(),
                r.contact.clone(),
                r.role.clone(),
                r.team_name.clone(),
            ]
        }),
    )
}

pub fn projects_table(demos: &[Demo]) -> String {
    table(
        &["Project Name", "Description", "Link", "Team Members"],
        demos.iter().map(|d| {
            vec![
                d.project_name.clone(),
                d.description.clone(),
                d.project_link.clone(),
                d.team_members.join(", "),
            ]
        }),
    )
}

/// Full README for one hackathon.
pub fn event_document(
    name: &str,
    preserved: &Preserved,
    summary: &EventSummary,
    updated: &str,
) -> String {
    let s = &summary.stats;
    let content = [
        format!("# {}", name),
        String::new(),
        format!("Welcome to the {}!", name),
        String::new(),
        "## Event Details".to_string(),
        String::new(),
        preserved.get(&EVENT_DETAILS).to_string(),
        String::new(),
        "## Resources".to_string(),
        String::new(),
        preserved.get(&RESOURCES).to_string(),
        String::new(),
        "## Participants".to_string(),
        String::new(),
        participants_table(&summary.registrations),
        String::new(),
        "## Projects".to_string(),
        String::new(),
        projects_table(&summary.demos),
        String::new(),
        "## Statistics".to_string(),
        String::new(),
        format!("- **Total Participants**: {}", s.participants),
        format!("- **Teams**: {}", s.teams),
        format!("- **Developers**: {}", s.developers),
        format!("- **Designers**: {}", s.designers),
        format!("- **Projects**: {}", s.projects),
        String::new(),
        format!("*Last updated: {}*", updated),
    ];
    content.join("\n") + "\n"
}

/// Top-level README listing every hackathon.
pub fn index_document(preserved: &Preserved, events: &[EventRow], updated: &str) -> String {
    let participants: usize = events.iter().map(|e| e.participants).sum();
    let projects: usize = events.iter().map(|e| e.projects).sum();

    let listing = table(
        &["Hackathon", "Date", "Theme", "Participants", "Projects"],
        events.iter().map(|e| {
            vec![
                format!("[{}]({})", e.name, e.link),
                e.date.clone(),
                e.theme.clone(),
                e.participants.to_string(),
                e.projects.to_string(),
            ]
        }),
    );

    let content = [
        "# Hackathons".to_string(),
        String::new(),
        "## Introduction".to_string(),
        String::new(),
        preserved.get(&INTRODUCTION).to_string(),
        String::new(),
        "## Hackathons".to_string(),
        String::new(),
        listing,
        String::new(),
        "## How to Participate".to_string(),
        String::new(),
        preserved.get(&HOW_TO_PARTICIPATE).to_string(),
        String::new(),
        "## Statistics".to_string(),
        String::new(),
        format!("- **Total Hackathons**: {}", events.len()),
        format!("- **Total Participants**: {}", participants),
        format!("- **Total Projects**: {}", projects),
        String::new(),
        format!("*Last updated: {}*", updated),
    ];
    content.join("\n") + "\n"
}
