use chrono::NaiveDate;

use crate::task::Task;

/// URL prefix uploaded files are served under.
pub const UPLOADS_PREFIX: &str = "/uploads/";

/// Visual variant of a task row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    Completed,
    Important,
    Normal,
}

impl RowStyle {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Completed => "tasks__item task task--completed",
            Self::Important => "tasks__item task task--important",
            Self::Normal => "tasks__item task",
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Decide how a task is drawn. `None` means the row is not rendered at all.
pub fn classify(task: &Task, show_completed: bool, today: NaiveDate) -> Option<RowStyle> {
    if task.is_done() {
        return show_completed.then_some(RowStyle::Completed);
    }
    if task.deadline_date() == Some(today) {
        return Some(RowStyle::Important);
    }
    Some(RowStyle::Normal)
}

/// Whether the file cell gets a download link.
pub fn has_file_link(file: Option<&str>) -> bool {
    match file {
        None => false,
        Some(f) => !f.is_empty() && f != UPLOADS_PREFIX,
    }
}

/// Public URL of a stored upload. Accepts bare names and `/uploads/…` paths.
pub fn file_url(file: &str) -> String {
    let name = file.strip_prefix(UPLOADS_PREFIX).unwrap_or(file);
    format!("{UPLOADS_PREFIX}{}", urlencoding::encode(name))
}

/// Display name of a stored upload.
pub fn file_label(file: &str) -> &str {
    file.strip_prefix(UPLOADS_PREFIX).unwrap_or(file)
}
