//! Compile-time–checked column identifiers for all tables.

use sea_query::Iden;

#[derive(Iden)]
pub enum Users {
    Table,
    Id,
    Email,
    Name,
    CreatedAt,
}

#[derive(Iden)]
pub enum Projects {
    Table,
    Id,
    Name,
    Alias,
    UserId,
}

#[derive(Iden)]
pub enum Tasks {
    Table,
    Id,
    Title,
    ProjectId,
    UserId,
    Status,
    CreatedAt,
    File,
    Deadline,
}
