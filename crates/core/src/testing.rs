use crate::{Project, Task};

/// User every fixture belongs to.
pub const USER_ID: i64 = 3;

/// Project owned by [`USER_ID`].
pub fn project(id: i64, name: &str, alias: &str) -> Project {
    Project {
        id,
        name: name.to_string(),
        alias: alias.to_string(),
        user_id: USER_ID,
    }
}

/// Open task without deadline or file.
pub fn task(id: i64, title: &str, project_id: i64) -> Task {
    Task {
        id,
        title: title.to_string(),
        project_id,
        user_id: USER_ID,
        status: false,
        created_at: "2019-06-01 12:00:00".to_string(),
        file: None,
        deadline: None,
    }
}

/// Completed task without deadline or file.
pub fn done_task(id: i64, title: &str, project_id: i64) -> Task {
    Task {
        status: true,
        ..task(id, title, project_id)
    }
}
