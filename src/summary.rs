use std::collections::HashSet;

use serde::Serialize;

use crate::records::{Demo, Registration, NOT_AVAILABLE};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub participants: usize,
    pub teams: usize,
    pub developers: usize,
    pub designers: usize,
    pub projects: usize,
}

/// Everything one event's summary document is rendered from.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventSummary {
    pub registrations: Vec<Registration>,
    pub demos: Vec<Demo>,
    pub stats: Stats,
}

impl EventSummary {
    pub fn new(registrations: Vec<Registration>, demos: Vec<Demo>) -> Self {
        let stats = Stats::compute(&registrations, &demos);
        EventSummary {
            registrations,
            demos,
            stats,
        }
    }
}

impl Stats {
    /// Roles are bucketed by case-insensitive substring, so "Developer/Designer"
    /// counts as both and "PM" as neither.
    pub fn compute(registrations: &[Registration], demos: &[Demo]) -> Self {
        let teams: HashSet<&str> = registrations
            .iter()
            .map(|r| r.team_name.trim())
            .filter(|t| !t.is_empty() && *t != NOT_AVAILABLE)
            .collect();

        let roles: Vec<String> = registrations.iter().map(|r| r.role.to_lowercase()).collect();

        Stats {
            participants: registrations.len(),
            teams: teams.len(),
            developers: roles.iter().filter(|r| r.contains("developer")).count(),
            designers: roles.iter().filter(|r| r.contains("designer")).count(),
            projects: demos.len(),
        }
    }
}
