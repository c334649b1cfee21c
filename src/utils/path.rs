//! Path utilities: expand ~, check input file suffixes.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Only `.html` and `.htm` inputs are accepted (case-sensitive, like the names
/// the timelog exporter produces).
pub fn is_html_file(name: &str) -> bool {
    name.ends_with(".html") || name.ends_with(".htm")
}
