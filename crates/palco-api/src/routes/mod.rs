//! HTTP route modules.

pub mod health;
pub mod stage;
pub mod vote;
