pub mod admin_query;
pub mod admin_repository;
pub mod security;
pub mod token_revocation;

pub use admin_query::{AdminQuery, AdminQueryError};
pub use admin_repository::{AdminRepository, AdminRepositoryError};
pub use security::{
    hash_token, HashError, PasswordHasher, TokenClaims, TokenError, TokenProvider, TokenType,
};
pub use token_revocation::{TokenRevocationError, TokenRevocationStore};
