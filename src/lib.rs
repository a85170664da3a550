//! Users API - HTTP CRUD service for user profiles
//!
//! Profiles live in an in-memory store and are exposed as JSON under
//! `/api/v1/users` plus a server-rendered listing at `/`. Every failure,
//! including unknown routes, timeouts and panics, is answered with the same
//! JSON error envelope.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
