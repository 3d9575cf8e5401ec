pub mod admin_query_postgres;
pub mod admin_repository_postgres;
pub mod jwt;
pub mod sea_orm_entity;
pub mod security;
pub mod token_revocation_redis;
