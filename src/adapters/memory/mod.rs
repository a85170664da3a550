//! In-memory adapters.

mod in_memory_user_repository;

pub use in_memory_user_repository::InMemoryUserRepository;
