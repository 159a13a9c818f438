use std::path::{Component, Path, PathBuf};

/// Normalizes a path that is meant to live under a project root.
///
/// `.` segments are dropped and `..` pops the previous segment. Returns `None` when the path
/// is absolute, empty once normalized, or would climb above the root.
pub fn normalize_relative(source: &Path) -> Option<PathBuf> {
    let mut new_path = PathBuf::new();

    for component in source.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => return None,

            // Skip the current-dir marker "."
            Component::CurDir => {}

            // For "..", pop the last component or bail out if there is nothing left to pop
            Component::ParentDir => {
                if !new_path.pop() {
                    return None;
                }
            }

            Component::Normal(segment) => new_path.push(segment),
        }
    }

    if new_path.as_os_str().is_empty() {
        None
    } else {
        Some(new_path)
    }
}
