//! Core library modules for the todod service.
//!
//! Centralized access point to the application's supporting components:
//! configuration, the task domain types, presentation helpers, session
//! cookies, and the messaging system.

pub mod config;
pub mod filter;
pub mod messages;
pub mod session;
pub mod task;
