//! Database layer for the todod service.
//!
//! Persistence is a single SQLite file in the working directory holding the
//! `tasks` table plus a `migrations` tracking table. The layer splits into
//! connection management, the migration system, and the task repository.

/// Core database connection and initialization module.
pub mod db;

/// Database schema migration system.
pub mod migrations;

/// Task CRUD operations over the shared connection.
pub mod tasks;
