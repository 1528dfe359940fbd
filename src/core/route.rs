use super::artifacts::ArtifactKey;

/// Receiver of address changes (browser history in the web shell).
pub trait Navigator {
    fn push(&mut self, path: &str);
}

pub const ROOT_PATH: &str = "/";

/// Artifact named by the first non-empty segment of `path`, if any.
///
/// Query strings and fragments are ignored. Unknown segments yield `None` and
/// the caller falls back to the ring view.
pub fn parse_path(path: &str) -> Option<ArtifactKey> {
    let path = path.split(['?', '#']).next().unwrap_or("");
    let segment = path.split('/').find(|s| !s.is_empty())?;
    ArtifactKey::parse(segment)
}

/// Address that mirrors a selection.
pub fn path_for(selection: Option<ArtifactKey>) -> String {
    match selection {
        Some(key) => format!("/{}", key.as_str()),
        None => ROOT_PATH.to_string(),
    }
}
