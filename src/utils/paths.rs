use std::borrow::Cow;
use std::path::{Component, Path};

use crate::error::{Error, Result};

/// Formats a path with ~ substitution for the given home directory
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use findit::format_path_with_tilde;
///
/// let home = Path::new("/Users/alice");
/// let formatted = format_path_with_tilde(Path::new("/Users/alice/Desktop/app"), home);
/// assert_eq!(formatted, "~/Desktop/app");
/// ```
pub fn format_path_with_tilde(path: &Path, home: &Path) -> String {
    if let Ok(rest) = path.strip_prefix(home)
        && !home.as_os_str().is_empty()
    {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~/{}", rest.display());
    }

    // Avoid double allocation when converting Cow to String
    match path.to_string_lossy() {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}

/// Validates a workspace name before it is turned into a file name
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the name:
/// - is empty or only whitespace
/// - contains a path separator or is a `.`/`..` component
pub fn validate_workspace_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::InvalidInput("Please provide a workspace name".to_string()));
    }

    let mut components = Path::new(name).components();
    let single_normal = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if !single_normal || name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidInput(format!(
            "Invalid workspace name '{}': must be a plain file name",
            name
        )));
    }

    Ok(())
}
