//! Local JSON fixtures used by the debug search (`d:<name>`) and the demo
//! reference ids.
//!
//! Fixture names come straight from user input, so they are reduced to a
//! bare file stem before being joined onto the fixture directory.

use std::path::{Path, PathBuf};

/// Strip path components and control characters from a fixture name.
/// Returns `None` if nothing usable is left.
pub fn sanitize_fixture_name(name: &str) -> Option<String> {
    let name = name.rsplit(['/', '\\']).next().unwrap_or(name);

    let sanitized: String = name
        .chars()
        .filter(|c| !c.is_control() && *c != ':')
        .collect();
    let sanitized = sanitized.trim().trim_start_matches('.');

    if sanitized.is_empty() {
        return None;
    }
    Some(sanitized.to_string())
}

/// Resolve `<dir>/<name>.json`, refusing names that would escape `dir`.
pub fn fixture_path(dir: &Path, name: &str) -> Option<PathBuf> {
    let sanitized = sanitize_fixture_name(name)?;
    Some(dir.join(format!("{}.json", sanitized)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_fixture_name() {
        assert_eq!(sanitize_fixture_name("23345"), Some("23345".into()));
        assert_eq!(sanitize_fixture_name("../../etc/passwd"), Some("passwd".into()));
        assert_eq!(sanitize_fixture_name("..\\secret"), Some("secret".into()));
        assert_eq!(sanitize_fixture_name(".hidden"), Some("hidden".into()));
        assert_eq!(sanitize_fixture_name("..."), None);
        assert_eq!(sanitize_fixture_name(""), None);
        assert_eq!(sanitize_fixture_name("dir/"), None);
    }

    #[test]
    fn test_fixture_path_stays_in_dir() {
        let dir = Path::new("data");
        assert_eq!(fixture_path(dir, "n23345"), Some(PathBuf::from("data/n23345.json")));
        assert_eq!(fixture_path(dir, "../x"), Some(PathBuf::from("data/x.json")));
        assert_eq!(fixture_path(dir, "/"), None);
    }
}
