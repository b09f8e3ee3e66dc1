/// Owner of every row the page reads. Threaded through each store call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl UserId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A project (category) the user groups tasks under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: i64,
    pub name: String,
    /// URL-safe identifier used in `?category=`.
    pub alias: String,
    pub user_id: i64,
}

/// A single task row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub project_id: i64,
    pub user_id: i64,
    /// `true` once the task is done.
    pub status: bool,
    pub created_at: String,
    /// Stored upload name, if a file is attached.
    pub file: Option<String>,
    /// `YYYY-MM-DD`, optionally followed by a time.
    pub deadline: Option<String>,
}

impl Task {
    pub fn is_done(&self) -> bool {
        self.status
    }

    /// Calendar date of the deadline, if one is set and well formed.
    pub fn deadline_date(&self) -> Option<chrono::NaiveDate> {
        self.deadline
            .as_deref()
            .and_then(crate::validate::deadline_date)
    }
}

/// Which tasks a category query returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Project(i64),
}

impl CategoryFilter {
    pub fn project_id(self) -> Option<i64> {
        match self {
            Self::All => None,
            Self::Project(id) => Some(id),
        }
    }
}

/// Negative ids (the legacy `-1` marker) mean "no filter".
impl From<i64> for CategoryFilter {
    fn from(id: i64) -> Self {
        if id < 0 {
            Self::All
        } else {
            Self::Project(id)
        }
    }
}

impl From<Option<&Project>> for CategoryFilter {
    fn from(project: Option<&Project>) -> Self {
        project.map_or(Self::All, |p| Self::Project(p.id))
    }
}

/// Count the tasks that belong to `project`.
pub fn count_tasks_in_category(tasks: &[Task], project: &Project) -> usize {
    tasks.iter().filter(|t| t.project_id == project.id).count()
}
