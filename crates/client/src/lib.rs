//! Headless demo client for the eldritch combat engine.
//!
//! The binary is a composition root: it reads [`ClientConfig`] from the
//! environment, loads content through `eldritch-content`, and drives one
//! encounter through `eldritch-core`.

pub mod config;
pub mod session;

pub use config::ClientConfig;
pub use session::{SessionReport, run};
