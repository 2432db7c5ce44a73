//! Runtime orchestration for the deterministic dungeon crawl.
//!
//! This crate wires the pure simulation in `delve-core` into an embeddable
//! session API. Consumers construct a [`GameSession`] from a
//! [`SessionConfig`], feed it directional input, and render from its
//! read-only projections; the session logs what each turn did.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the session driving the core engine
//! - [`config`] sources settings from the environment
//! - [`error`] is the thin failure surface of session construction

pub mod config;
pub mod error;
pub mod session;

pub use config::SessionConfig;
pub use error::{Result, SessionError};
pub use session::GameSession;

pub use delve_core::{Direction, GamePhase, GameState, StepOutcome};
