//! Database repositories
//!
//! Repositories handle all direct storage interactions.

pub mod in_memory_user_repo;
pub mod user_repo;

pub use in_memory_user_repo::InMemoryUserRepository;
pub use user_repo::{PgUserRepository, UserRepository};

#[cfg(test)]
pub use user_repo::MockUserRepository;
