pub mod notification_repository_postgres;
pub mod sea_orm_entity;
