//! # API crate — users and profiles over HTTP
//!
//! This crate holds everything the HTTP service needs except the process
//! bootstrap, which lives in the `server` crate.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`db`] | The [`Store`](db::Store) seam, its PostgreSQL and in-memory implementations, and pool construction |
//! | [`error`] | [`ApiError`] and its mapping to bare HTTP status codes |
//! | [`extract`] | Typed path identifiers and lenient JSON bodies |
//! | [`models`] | Database rows (`User`, `Profile`) and request/response bodies |
//! | [`routes`] | The route table and the resource handlers |
//!
//! ## Endpoints
//!
//! | Method | Path | Success |
//! |--------|------|---------|
//! | `POST` | `/users` | `201 {"id": n}` |
//! | `GET` | `/users/{id}` | `200` user |
//! | `PUT` | `/users/{id}` | `204` |
//! | `DELETE` | `/users/{id}` | `204` |
//! | `POST` | `/profiles` | `201 {"id": n}` |
//! | `GET` | `/profiles/{id}` | `200` profile |
//!
//! Failures never carry a body: `400` for malformed input, `404` when no row
//! matches, `405` for methods a path does not serve and `500` for any storage error.

pub mod db;
pub mod error;
pub mod extract;
pub mod models;
pub mod routes;

pub use error::ApiError;
pub use routes::{router, AppState};
