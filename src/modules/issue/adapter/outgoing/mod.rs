pub mod issue_query_postgres;
pub mod issue_repository_postgres;
pub mod sea_orm_entity;
pub mod vote_repository_postgres;
