//! Palco HTTP API.
//!
//! Two audiences share one server: the presenter screen drives the
//! narrative session through the stage routes, and the voters' phones cast
//! ballots through the vote routes. The vote session opens and closes in
//! lockstep with the narrative's choice points.

pub mod error;
pub mod routes;
pub mod state;
