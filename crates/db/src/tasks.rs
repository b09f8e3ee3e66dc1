//! Task query builders.

use dela_core::{CategoryFilter, UserId};
use sea_query::{Expr, Order, Query, SelectStatement, SqliteQueryBuilder};

use super::Built;
use super::tables::{Tasks, Users};

/// Column list for task SELECT queries; `task_from_row` reads this order.
fn task_columns(q: &mut SelectStatement) -> &mut SelectStatement {
    q.column((Tasks::Table, Tasks::Id))
        .column((Tasks::Table, Tasks::Title))
        .column((Tasks::Table, Tasks::ProjectId))
        .column((Tasks::Table, Tasks::UserId))
        .column((Tasks::Table, Tasks::Status))
        .column((Tasks::Table, Tasks::CreatedAt))
        .column((Tasks::Table, Tasks::File))
        .column((Tasks::Table, Tasks::Deadline))
}

/// Tasks of `user`, joined with their owner.
fn owned_by(user: UserId) -> SelectStatement {
    let mut q = Query::select().to_owned();
    task_columns(&mut q);
    q.from(Users::Table)
        .inner_join(
            Tasks::Table,
            Expr::col((Users::Table, Users::Id)).equals((Tasks::Table, Tasks::UserId)),
        )
        .and_where(Expr::col((Users::Table, Users::Id)).eq(user.get()))
        .order_by((Tasks::Table, Tasks::Id), Order::Asc)
        .to_owned()
}

/// All tasks of a user.
pub fn list_for_user(user: UserId) -> Built {
    owned_by(user).build(SqliteQueryBuilder)
}

/// Tasks of a user, optionally narrowed to one project.
pub fn list_by_category(user: UserId, filter: CategoryFilter) -> Built {
    let mut q = owned_by(user);
    if let Some(project_id) = filter.project_id() {
        q.and_where(Expr::col((Tasks::Table, Tasks::ProjectId)).eq(project_id));
    }
    q.build(SqliteQueryBuilder)
}

/// Point a task's `file` at a stored upload.
pub fn set_file(user: UserId, task_id: i64, file: &str) -> Built {
    Query::update()
        .table(Tasks::Table)
        .value(Tasks::File, file)
        .and_where(Expr::col(Tasks::Id).eq(task_id))
        .and_where(Expr::col(Tasks::UserId).eq(user.get()))
        .build(SqliteQueryBuilder)
}
