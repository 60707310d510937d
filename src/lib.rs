//! POC3 hello-world demonstration API.
//!
//! A minimal web service exposing an HTML landing page, a hello-world JSON
//! endpoint, a static JSON info descriptor, and actuator-style health
//! endpoints. Configuration (application name, version, active environment)
//! is loaded once at startup and passed into the handler layer through
//! [`state::AppState`].

pub mod config;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;
