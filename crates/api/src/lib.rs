//! Message API server library.
//!
//! Exposes the building blocks (config, state, error handling, resource
//! representations, handlers, routes, router builder) so integration tests
//! and the binary entrypoint can both access them.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod links;
pub mod resource;
pub mod router;
pub mod routes;
pub mod state;
