pub mod issue_type_repository_postgres;
pub mod sea_orm_entity;
