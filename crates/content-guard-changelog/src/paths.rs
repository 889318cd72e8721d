//! Normalisation of changed-path entries

/// Canonical repository-relative form of a changed path
///
/// Trims whitespace, turns `\` into `/` and drops leading `./`.
/// Blank entries yield `None`.
pub fn normalize_path(raw: &str) -> Option<String> {
    let unified = raw.replace('\\', "/");
    let mut path = unified.trim();
    while let Some(rest) = path.strip_prefix("./") {
        path = rest.trim_start();
    }
    if path.is_empty() {
        None
    } else {
        Some(path.to_string())
    }
}
