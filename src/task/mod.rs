//! Task lifecycle management.
//!
//! Tasks are created from validated payloads, progress through completion
//! percentages with a derived done flag, and are queried by named due-date
//! windows. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Field rules in [`validation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
