//! HTTP API over a loaded job dataset.

pub mod app;
pub mod error;
pub mod handlers;
pub mod state;
