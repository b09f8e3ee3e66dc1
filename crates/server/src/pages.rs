//! HTML fragments for the task list page.

use chrono::NaiveDate;
use dela_core::period::TaskPeriod;
use dela_core::plural;
use dela_core::row::{self, RowStyle};
use dela_core::{Project, Task, count_tasks_in_category};
use hypertext::prelude::*;

/// Link target of a task's attachment.
struct FileLink<'a> {
    url: String,
    label: &'a str,
}

struct RowView<'a> {
    task: &'a Task,
    style: RowStyle,
    file: Option<FileLink<'a>>,
}

struct NavItem<'a> {
    project: &'a Project,
    count: usize,
    active: bool,
    url: String,
}

/// Everything the task list page shows for one request.
pub struct TaskListPage<'a> {
    pub projects: &'a [Project],
    /// All of the user's tasks; used for the per-project counts.
    pub all_tasks: &'a [Task],
    /// Tasks of the selected category.
    pub tasks: &'a [Task],
    pub selected: Option<&'a Project>,
    pub show_completed: bool,
    pub period: TaskPeriod,
    pub today: NaiveDate,
}

impl<'a> TaskListPage<'a> {
    fn rows(&self) -> Vec<RowView<'a>> {
        self.tasks
            .iter()
            .filter(|task| self.period.matches(task, self.today))
            .filter_map(|task| {
                let style = row::classify(task, self.show_completed, self.today)?;
                let file = task
                    .file
                    .as_deref()
                    .filter(|f| row::has_file_link(Some(*f)))
                    .map(|f| FileLink {
                        url: row::file_url(f),
                        label: row::file_label(f),
                    });
                Some(RowView { task, style, file })
            })
            .collect()
    }

    fn selected_alias(&self) -> Option<&'a str> {
        self.selected.map(|p| p.alias.as_str())
    }

    /// Project list with task counts.
    pub fn render_sidebar(&self) -> String {
        let items: Vec<NavItem<'_>> = self
            .projects
            .iter()
            .map(|project| NavItem {
                project,
                count: count_tasks_in_category(self.all_tasks, project),
                active: self.selected.is_some_and(|s| s.id == project.id),
                url: page_url(Some(&project.alias), self.show_completed, self.period),
            })
            .collect();

        maud! {
            nav class="main-navigation" {
                ul class="main-navigation__list" {
                    @for item in &items {
                        @if item.active {
                            li class="main-navigation__list-item main-navigation__list-item--active" {
                                a class="main-navigation__list-item-link" href=(item.url) { (item.project.name) }
                                span class="main-navigation__list-item-count" { (item.count) }
                            }
                        } @else {
                            li class="main-navigation__list-item" {
                                a class="main-navigation__list-item-link" href=(item.url) { (item.project.name) }
                                span class="main-navigation__list-item-count" { (item.count) }
                            }
                        }
                    }
                }
            }
        }
        .render()
        .into_inner()
    }

    /// Heading, controls and the task table.
    pub fn render_content(&self) -> String {
        let rows = self.rows();
        let summary = format!("{} {}", rows.len(), plural::TASK.pick(rows.len() as u64));
        let category = self.selected_alias();
        let toggle_url = page_url(category, !self.show_completed, self.period);
        let switches: Vec<(String, &str, bool)> = TaskPeriod::ALL
            .iter()
            .map(|p| (page_url(category, self.show_completed, *p), p.label(), *p == self.period))
            .collect();

        maud! {
            h2 class="content__main-heading" { "Список задач" }

            form class="search-form" action="/" method="get" {
                input class="search-form__input" type="text" value="" placeholder="Поиск по задачам";
                input class="search-form__submit" type="submit" value="Искать";
            }

            div class="tasks-controls" {
                nav class="tasks-switch" {
                    @for (url, label, active) in &switches {
                        @if *active {
                            a href=(url) class="tasks-switch__item tasks-switch__item--active" { (label) }
                        } @else {
                            a href=(url) class="tasks-switch__item" { (label) }
                        }
                    }
                }

                a class="checkbox show-completed" href=(toggle_url) {
                    @if self.show_completed {
                        input class="checkbox__input visually-hidden show_completed" type="checkbox" checked;
                    } @else {
                        input class="checkbox__input visually-hidden show_completed" type="checkbox";
                    }
                    span class="checkbox__text" { "Показывать выполненные" }
                }
            }

            p class="tasks-summary" { (summary) }

            table class="tasks" {
                @for row in &rows {
                    tr class=(row.style.class()) {
                        td class="task__select" {
                            label class="checkbox task__checkbox" {
                                @if row.style.is_checked() {
                                    input class="checkbox__input visually-hidden task__checkbox" type="checkbox" checked;
                                } @else {
                                    input class="checkbox__input visually-hidden task__checkbox" type="checkbox" value="1";
                                }
                                span class="checkbox__text" { (row.task.title) }
                            }
                        }
                        td class="task__file" {
                            @if let Some(file) = &row.file {
                                a class="download-link" href=(file.url) { (file.label) }
                            } @else {
                                a href="#" {}
                            }
                        }
                        td class="task__date" { (row.task.deadline.as_deref().unwrap_or_default()) }
                    }
                }
            }
        }
        .render()
        .into_inner()
    }
}

/// `/?category=…&show_complete_tasks=…&filter=…`, omitting defaults.
pub fn page_url(category: Option<&str>, show_completed: bool, period: TaskPeriod) -> String {
    let mut params = Vec::new();
    if let Some(alias) = category {
        params.push(format!("category={}", urlencoding::encode(alias)));
    }
    if show_completed {
        params.push("show_complete_tasks=1".to_string());
    }
    if period != TaskPeriod::All {
        params.push(format!("filter={period}"));
    }
    if params.is_empty() {
        "/".to_string()
    } else {
        format!("/?{}", params.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dela_core::testing;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2019, 12, 25).unwrap()
    }

    fn fixtures() -> (Vec<Project>, Vec<Task>) {
        let projects = vec![
            testing::project(1, "Работа", "work"),
            testing::project(2, "Домашние дела", "home"),
        ];
        let mut interview = testing::task(1, "Собеседование в IT компании", 1);
        interview.deadline = Some("2019-12-01".into());
        let mut test_task = testing::task(2, "Выполнить тестовое задание", 1);
        test_task.deadline = Some("2019-12-25".into());
        test_task.file = Some("Home.psd".into());
        let mut done = testing::done_task(3, "Сделать задание первого раздела", 1);
        done.deadline = Some("2019-12-21".into());
        let mut food = testing::task(4, "Купить корм <для> кота", 2);
        food.file = Some("/uploads/".into());
        (projects, vec![interview, test_task, done, food])
    }

    fn page<'a>(projects: &'a [Project], tasks: &'a [Task], show_completed: bool) -> TaskListPage<'a> {
        TaskListPage {
            projects,
            all_tasks: tasks,
            tasks,
            selected: None,
            show_completed,
            period: TaskPeriod::All,
            today: today(),
        }
    }

    #[test]
    fn test_completed_rows_hidden_by_default() {
        let (projects, tasks) = fixtures();
        let html = page(&projects, &tasks, false).render_content();
        assert!(!html.contains("Сделать задание первого раздела"));
        assert!(!html.contains("task--completed"));
        assert!(html.contains("3 задачи"));
    }

    #[test]
    fn test_completed_rows_shown_with_flag() {
        let (projects, tasks) = fixtures();
        let html = page(&projects, &tasks, true).render_content();
        assert!(html.contains(r#"<tr class="tasks__item task task--completed">"#));
        assert!(html.contains("Сделать задание первого раздела"));
        assert!(html.contains("4 задачи"));
    }

    #[test]
    fn test_due_today_is_important() {
        let (projects, tasks) = fixtures();
        let html = page(&projects, &tasks, false).render_content();
        assert_eq!(html.matches("task--important").count(), 1);
        let important = html.find("task--important").unwrap();
        let title = html.find("Выполнить тестовое задание").unwrap();
        assert!(important < title);
        assert_eq!(html.matches(r#"<tr class="tasks__item task">"#).count(), 2);
    }

    #[test]
    fn test_file_links() {
        let (projects, tasks) = fixtures();
        let html = page(&projects, &tasks, false).render_content();
        assert!(html.contains(r#"href="/uploads/Home.psd""#));
        assert_eq!(html.matches("download-link").count(), 1);
        assert!(!html.contains(r#"href="/uploads/""#));
    }

    #[test]
    fn test_text_is_escaped() {
        let (projects, tasks) = fixtures();
        let html = page(&projects, &tasks, false).render_content();
        assert!(html.contains("Купить корм &lt;для"));
        assert!(!html.contains("<для>"));
    }

    #[test]
    fn test_period_filter() {
        let (projects, tasks) = fixtures();
        let mut page = page(&projects, &tasks, false);
        page.period = TaskPeriod::Overdue;
        let html = page.render_content();
        assert!(html.contains("Собеседование в IT компании"));
        assert!(!html.contains("Выполнить тестовое задание"));
        assert!(html.contains("1 задача"));
        assert!(html.contains("tasks-switch__item tasks-switch__item--active"));
    }

    #[test]
    fn test_sidebar_counts_and_active() {
        let (projects, tasks) = fixtures();
        let mut page = page(&projects, &tasks, false);
        page.selected = Some(&projects[1]);
        let html = page.render_sidebar();
        assert!(html.contains(r#"<span class="main-navigation__list-item-count">3</span>"#));
        assert!(html.contains(r#"<span class="main-navigation__list-item-count">1</span>"#));
        assert_eq!(html.matches("main-navigation__list-item--active").count(), 1);
        assert!(html.contains(r#"href="/?category=home""#));
    }

    #[test]
    fn test_page_url() {
        assert_eq!(page_url(None, false, TaskPeriod::All), "/");
        assert_eq!(
            page_url(Some("home"), true, TaskPeriod::Today),
            "/?category=home&show_complete_tasks=1&filter=today"
        );
        assert_eq!(page_url(Some("a b"), false, TaskPeriod::All), "/?category=a%20b");
    }
}
