//! RosterBox - desktop autocomplete front-end for roster search services
//!
//! Presents a student-name field and a teacher-name field, each backed by an
//! HTTP suggestion endpoint. Editing a field queries its endpoint and shows
//! clickable candidate rows; clicking a row copies the name into the field.
//! Startup alert banners are auto-dismissed after a configurable delay.
//!
//! # Features
//!
//! - **Remote autocomplete**: one parameterized component, two endpoints
//! - **Newest-wins sequencing**: slow stale responses never overwrite
//!   results of a newer query
//! - **Scheduled alert dismissal**: explicit bootstrap call with the delay
//!   and covered alerts as configuration
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use rosterbox::{SuggestClient, SuggestSource};
//!
//! fn main() -> rosterbox::Result<()> {
//!     let client = SuggestClient::new(
//!         "http://localhost:8000/search_student_name",
//!         Duration::from_secs(5),
//!     )?;
//!
//!     let names = client.suggest("Ali")?;
//!     for name in names {
//!         println!("{}", name);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod gui;
pub mod logging;
pub mod suggest;

// Re-export main types
pub use config::AppConfig;
pub use error::{Result, RosterError};
pub use suggest::{ResponseGate, SuggestClient, SuggestFetcher, SuggestSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
