//! Remote name suggestions
//!
//! `client` talks to the HTTP suggestion endpoints; `fetcher` runs requests
//! on background threads and guarantees newest-wins ordering when responses
//! complete out of order.

pub mod client;
pub mod fetcher;

pub use client::{SuggestClient, SuggestSource};
pub use fetcher::{ResponseGate, SuggestFetcher};
