use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

/// Names of the directories and files the pipeline reads and writes.
///
/// Loaded from `hackathon.toml` (optional) and `HACKATHON_*` env vars,
/// falling back to the layout every hackathon repo uses.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub hackathon_name: String,
    pub registration_dir: String,
    pub demos_dir: String,
    pub extension: String,
    pub template_file: String,
    pub readme_file: String,
    pub events_dir: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            hackathon_name: "7702 Hackathon".into(),
            registration_dir: "registration".into(),
            demos_dir: "demos".into(),
            extension: "md".into(),
            template_file: "template.md".into(),
            readme_file: "README.md".into(),
            events_dir: "hackathons".into(),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        Config::builder()
            .add_source(File::with_name("hackathon").required(false))
            .add_source(Environment::with_prefix("HACKATHON"))
            .build()
            .context("failed to load settings")?
            .try_deserialize()
            .context("invalid settings")
    }
}
