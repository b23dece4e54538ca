//! Task-tracking backend.
//!
//! Clients create, read, update, and delete to-do records over HTTP and ask
//! which incomplete tasks fall due today, tomorrow, or this week.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, clock)
//!
//! # Modules
//!
//! - [`task`]: Task records, completion state, due windows, and the
//!   lifecycle service
//! - [`http`]: axum transport mapping requests to service calls
//! - [`config`]: Environment-driven process configuration
//! - [`telemetry`]: Tracing subscriber setup

pub mod config;
pub mod http;
pub mod task;
pub mod telemetry;
