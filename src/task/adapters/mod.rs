//! Adapter implementations for task lifecycle ports.

pub mod clock;
pub mod memory;
pub mod postgres;
