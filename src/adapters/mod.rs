//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - In-memory record store
//! - `http` - REST API, listing page and error boundary

pub mod http;
pub mod memory;

pub use memory::InMemoryUserRepository;
