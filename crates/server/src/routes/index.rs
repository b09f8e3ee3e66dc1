use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;

use dela_core::category::select_category;
use dela_core::period::TaskPeriod;
use dela_core::{CategoryFilter, Project, Task};

use crate::error::AppErr;
use crate::pages::TaskListPage;
use crate::render::Context;
use crate::storage;
use crate::{AppState, LAYOUT_TEMPLATE};

const PAGE_TITLE: &str = "Дела в порядке";

/// Query string of the task list page.
#[derive(Debug, Default, Deserialize)]
pub struct TaskListQuery {
    /// Project alias, or `"null"` for no filter.
    pub category: Option<String>,
    /// `1` shows completed tasks.
    pub show_complete_tasks: Option<String>,
    /// `all`, `today`, `tomorrow` or `overdue`.
    pub filter: Option<String>,
}

impl TaskListQuery {
    pub fn show_completed(&self) -> bool {
        matches!(
            self.show_complete_tasks.as_deref().map(str::trim),
            Some("1" | "true" | "on")
        )
    }

    pub fn period(&self) -> TaskPeriod {
        TaskPeriod::parse(self.filter.as_deref())
    }
}

struct PageData {
    projects: Vec<Project>,
    all_tasks: Vec<Task>,
    tasks: Vec<Task>,
    selected: Option<usize>,
}

/// GET / — the task list.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<TaskListQuery>,
) -> Result<Html<String>, AppErr> {
    let data = {
        let conn = state.db.conn();
        let user = state.config.user_id;

        let projects = storage::fetch_categories(&conn, user)
            .map_err(AppErr::from_db("fetch categories"))?;
        let selected = select_category(&projects, query.category.as_deref())?;
        let filter = CategoryFilter::from(selected);
        let selected = selected.and_then(|p| projects.iter().position(|q| q.id == p.id));

        let all_tasks =
            storage::fetch_all_tasks(&conn, user).map_err(AppErr::from_db("fetch tasks"))?;
        let tasks = match filter {
            CategoryFilter::All => all_tasks.clone(),
            CategoryFilter::Project(_) => storage::fetch_tasks_by_category(&conn, user, filter)
                .map_err(AppErr::from_db("fetch tasks by category"))?,
        };

        PageData {
            projects,
            all_tasks,
            tasks,
            selected,
        }
    };

    let page = TaskListPage {
        projects: &data.projects,
        all_tasks: &data.all_tasks,
        tasks: &data.tasks,
        selected: data.selected.map(|i| &data.projects[i]),
        show_completed: query.show_completed(),
        period: query.period(),
        today: chrono::Local::now().date_naive(),
    };

    let ctx = Context::new()
        .text("title", PAGE_TITLE)
        .html("sidebar", page.render_sidebar())
        .html("content", page.render_content());

    Ok(Html(state.templates.render(LAYOUT_TEMPLATE, &ctx)))
}
