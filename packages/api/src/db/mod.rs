//! # Database module — storage seam and its backends
//!
//! Handlers never talk to SQLx directly. They hold an `Arc<dyn Store>` that is
//! handed to the router at construction time, so the same handlers run against
//! PostgreSQL in production and against [`MemoryStore`] in tests.
//!
//! ## Re-exports
//!
//! - [`Store`] / [`StoreError`] — the async storage trait and its error type.
//! - [`PgStore`] — parameterized single-statement SQL over a [`sqlx::PgPool`].
//! - [`MemoryStore`] — an in-process fake with the same observable behaviour.
//! - [`connect`] — builds the connection pool used by [`PgStore`].

mod memory;
mod pool;
mod postgres;
mod store;

pub use memory::MemoryStore;
pub use pool::connect;
pub use postgres::PgStore;
pub use store::{Store, StoreError};
