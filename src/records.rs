use std::path::PathBuf;

use serde::Serialize;

/// Placeholder for a field the document does not carry.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub username: String,
    pub contact: String,
    pub wallet_address: String,
    pub role: String,
    pub team_name: String,
    pub idea: String,
    pub support_needed: String,
    pub notes: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize)]
pub struct Demo {
    pub project_name: String,
    pub description: String,
    pub project_link: String,
    pub team_members: Vec<String>,
    pub presentation_link: String,
    pub notes: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub enum Record {
    Registration(Registration),
    Demo(Demo),
}

impl Record {
    pub fn kind(&self) -> &'static str {
        match self {
            Record::Registration(_) => "registration",
            Record::Demo(_) => "demo",
        }
    }
}
