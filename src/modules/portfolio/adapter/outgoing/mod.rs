pub mod portfolio_repository_postgres;
pub mod sea_orm_entity;

pub use portfolio_repository_postgres::PortfolioRepositoryPostgres;
