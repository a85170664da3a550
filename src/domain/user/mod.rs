//! User profile domain.
//!
//! - `UserProfile` - the aggregate held by the record store
//! - `ProfilePatch` - typed partial update (name and emoji only)
//! - `sample_profiles` - seed data for a fresh store

mod patch;
mod profile;
mod sample;

pub use patch::ProfilePatch;
pub use profile::{fields, UserProfile};
pub use sample::sample_profiles;
