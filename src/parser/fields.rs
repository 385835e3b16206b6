use std::sync::LazyLock;

use regex::Regex;

use crate::records::NOT_AVAILABLE;

static QUOTED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""([^"]*)""#).unwrap());

/// `field: "value"` on a single line. Field names match as whole words.
fn field_pattern(name: &str) -> Option<Regex> {
    Regex::new(&format!(r#"\b{}\s*:\s*"([^"\n]*)""#, regex::escape(name))).ok()
}

/// True when the text carries `name:` anywhere, e.g. the `username:` marker.
pub fn has_marker(content: &str, name: &str) -> bool {
    Regex::new(&format!(r"\b{}\s*:", regex::escape(name)))
        .ok()
        .map(|re| re.is_match(content))
        .unwrap_or(false)
}

/// First `name: "value"` match, or `N/A`.
pub fn extract_field(content: &str, name: &str) -> String {
    field_pattern(name)
        .and_then(|re| re.captures(content).map(|c| c[1].to_string()))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Every quoted item of `name: [...]`, in order. Empty when there is no list.
pub fn extract_list(content: &str, name: &str) -> Vec<String> {
    let Ok(re) = Regex::new(&format!(r"\b{}\s*:\s*\[([^\]]*)\]", regex::escape(name))) else {
        return Vec::new();
    };
    let Some(caps) = re.captures(content) else {
        return Vec::new();
    };
    QUOTED_RE
        .captures_iter(&caps[1])
        .map(|c| c[1].to_string())
        .collect()
}
