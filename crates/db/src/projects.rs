//! Project (category) query builders.

use dela_core::UserId;
use sea_query::{Expr, Order, Query, SqliteQueryBuilder};

use super::Built;
use super::tables::Projects;

/// Projects owned by a user, in creation order. Columns: id, name, alias, user_id.
pub fn list_for_user(user: UserId) -> Built {
    Query::select()
        .columns([
            Projects::Id,
            Projects::Name,
            Projects::Alias,
            Projects::UserId,
        ])
        .from(Projects::Table)
        .and_where(Expr::col(Projects::UserId).eq(user.get()))
        .order_by(Projects::Id, Order::Asc)
        .build(SqliteQueryBuilder)
}
