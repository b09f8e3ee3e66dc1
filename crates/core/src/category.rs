use thiserror::Error;

use crate::task::Project;

/// Query value meaning "no category selected".
pub const NO_CATEGORY: &str = "null";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown category: {alias}")]
pub struct UnknownCategory {
    pub alias: String,
}

/// Resolve the `?category=` value against the user's projects.
///
/// `None` and `"null"` select nothing; an alias that no project carries is
/// an error.
pub fn select_category<'a>(
    projects: &'a [Project],
    requested: Option<&str>,
) -> Result<Option<&'a Project>, UnknownCategory> {
    let alias = match requested {
        None => return Ok(None),
        Some(alias) if alias == NO_CATEGORY => return Ok(None),
        Some(alias) => alias,
    };

    projects
        .iter()
        .find(|p| p.alias == alias)
        .map(Some)
        .ok_or_else(|| UnknownCategory {
            alias: alias.to_string(),
        })
}
