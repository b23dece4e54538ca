//! Step definitions for task completion scenarios.


mod given;
mod then;
mod when;
