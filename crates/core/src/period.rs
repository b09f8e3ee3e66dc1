use chrono::{Days, NaiveDate};

use crate::task::Task;

/// Deadline window selected by the task switch above the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskPeriod {
    #[default]
    All,
    Today,
    Tomorrow,
    Overdue,
}

impl TaskPeriod {
    pub const ALL: [TaskPeriod; 4] = [Self::All, Self::Today, Self::Tomorrow, Self::Overdue];

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Today => "today",
            Self::Tomorrow => "tomorrow",
            Self::Overdue => "overdue",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "Все задачи",
            Self::Today => "Повестка дня",
            Self::Tomorrow => "Завтра",
            Self::Overdue => "Просроченные",
        }
    }

    /// Parse a query value; anything unrecognised falls back to `All`.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("today") => Self::Today,
            Some("tomorrow") => Self::Tomorrow,
            Some("overdue") => Self::Overdue,
            _ => Self::All,
        }
    }

    pub fn matches(&self, task: &Task, today: NaiveDate) -> bool {
        let deadline = task.deadline_date();
        match self {
            Self::All => true,
            Self::Today => deadline == Some(today),
            Self::Tomorrow => deadline.is_some() && deadline == today.checked_add_days(Days::new(1)),
            Self::Overdue => !task.is_done() && deadline.is_some_and(|d| d < today),
        }
    }
}

impl std::fmt::Display for TaskPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
