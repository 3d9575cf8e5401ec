pub mod contact_query_postgres;
pub mod contact_repository_postgres;
pub mod sea_orm_entity;

pub use contact_query_postgres::ContactQueryPostgres;
pub use contact_repository_postgres::ContactRepositoryPostgres;
