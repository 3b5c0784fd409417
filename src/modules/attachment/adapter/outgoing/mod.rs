pub mod attachment_repository_postgres;
pub mod attachment_store_gcs;
pub mod sea_orm_entity;
