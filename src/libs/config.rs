//! Environment-driven configuration for the todod service.
//!
//! Everything the process needs arrives through environment variables (with
//! `.env` support at startup): the listen port, the session signing secret,
//! and the Google OAuth credentials for the optional sign-in front door.
//! Each integration is an `Option<T>` so a bare deployment runs with nothing
//! configured and the task API still works.

use crate::libs::messages::Message;
use crate::msg_warning;
use std::env;

/// Default HTTP listen port when `PORT` is unset or unparseable.
pub const DEFAULT_PORT: u16 = 3001;

/// Google OAuth credentials for the sign-in front door.
#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub client_id: String,
    pub client_secret: String,
    pub callback_url: String,
}

/// Session cookie configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Secret the session cookie cipher is keyed from.
    pub secret: String,
}

/// Main configuration container for the entire service.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP listen port (`PORT`, default 3001).
    pub port: u16,
    /// Session secret (`SESSION_SECRET`); sign-in is disabled without it.
    pub session: Option<SessionConfig>,
    /// Google OAuth credentials (`GOOGLE_CLIENT_ID`, `GOOGLE_CLIENT_SECRET`,
    /// `GOOGLE_CALLBACK_URL`); all three or nothing.
    pub google: Option<GoogleConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            session: None,
            google: None,
        }
    }
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// A partially supplied OAuth triple disables sign-in with a warning
    /// rather than failing startup; the task API never depends on it.
    pub fn from_env() -> Self {
        let port = env::var("PORT").ok().and_then(|value| value.parse().ok()).unwrap_or(DEFAULT_PORT);

        let session = env::var("SESSION_SECRET")
            .ok()
            .filter(|secret| !secret.is_empty())
            .map(|secret| SessionConfig { secret });

        let google = match (
            env::var("GOOGLE_CLIENT_ID"),
            env::var("GOOGLE_CLIENT_SECRET"),
            env::var("GOOGLE_CALLBACK_URL"),
        ) {
            (Ok(client_id), Ok(client_secret), Ok(callback_url)) => Some(GoogleConfig {
                client_id,
                client_secret,
                callback_url,
            }),
            (Err(_), Err(_), Err(_)) => None,
            _ => {
                msg_warning!(Message::OauthConfigIncomplete);
                None
            }
        };

        if google.is_some() && session.is_none() {
            msg_warning!(Message::SessionSecretMissing);
        }

        Config { port, session, google }
    }

    /// True when the sign-in front door can be mounted.
    pub fn oauth_ready(&self) -> bool {
        self.google.is_some() && self.session.is_some()
    }
}
