//! Infrastructure Layer
//!
//! Repository implementations: PostgreSQL for deployments, in-memory for
//! local runs without a database and for tests.

pub mod memory;
pub mod postgres;
