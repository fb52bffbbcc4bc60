//! Display implementation for todod application messages.
//!
//! All user-facing message text lives here, keyed by the `Message` enum.
//! Parameterized variants interpolate their context (version numbers,
//! addresses, error strings) into the rendered line.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === DATABASE MESSAGES ===
            Message::DbConnected => "Connected to the SQLite database".to_string(),
            Message::DbOpenFailed(err) => format!("Error opening database: {}", err),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, err) => format!("Migration v{} failed: {}", version, err),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),
            Message::MigrationsSkipped => "Schema migration skipped; continuing with current schema".to_string(),

            // === TASK MESSAGES ===
            Message::UpdateEmpty => "No fields to update".to_string(),

            // === SERVER MESSAGES ===
            Message::ServerListening(addr) => format!("Server running on http://{}", addr),

            // === AUTH MESSAGES ===
            Message::OauthEnabled => "Google sign-in routes mounted at /auth/google".to_string(),
            Message::OauthConfigIncomplete => "Google OAuth configuration incomplete; sign-in routes disabled".to_string(),
            Message::SessionSecretMissing => "SESSION_SECRET is not set; sign-in routes disabled".to_string(),
            Message::OauthExchangeFailed(err) => format!("Google sign-in failed: {}", err),
            Message::OauthLoginSucceeded(email) => format!("Signed in as {}", email),
        };
        write!(f, "{}", text)
    }
}
