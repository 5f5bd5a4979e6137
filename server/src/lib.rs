//! Process bootstrap for the users/profiles HTTP service.
//!
//! [`Settings`] gathers configuration, [`database::connection_pool`] opens and
//! checks the PostgreSQL pool, and [`launch`] serves the `api` router until
//! the process is asked to stop.

mod application;
pub mod database;
pub mod settings;

pub use application::launch;
pub use settings::Settings;
