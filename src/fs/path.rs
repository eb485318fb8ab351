//! Path resolution: pure segment algebra, no tree access.
//!
//! Turning a user-supplied path plus the current path into an absolute
//! segment list never inspects the tree; existence and type checks are the
//! caller's job, performed against the node model after resolution.

use super::types::FsError;

/// Resolve `input` against `current`, producing an absolute segment list.
///
/// An absent input returns `current` unchanged. Empty segments (leading,
/// trailing, doubled slashes) are dropped, `.` is a no-op, and `..` pops one
/// segment unless only the root segment remains, which fails with
/// [`FsError::AtRootBoundary`]. Other segments are pushed verbatim.
pub fn resolve(current: &[String], input: Option<&str>) -> Result<Vec<String>, FsError> {
    let mut segments: Vec<String> = current.to_vec();
    let Some(input) = input else {
        return Ok(segments);
    };

    for part in input.split('/').filter(|p| !p.is_empty()) {
        match part {
            "." => {}
            ".." => {
                if segments.len() == 1 {
                    return Err(FsError::AtRootBoundary);
                }
                segments.pop();
            }
            other => segments.push(other.to_string()),
        }
    }
    Ok(segments)
}
