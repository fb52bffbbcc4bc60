//! # Todod - single-user task service
//!
//! An HTTP/JSON to-do API over a persistent SQLite store, plus the pieces
//! the browser UI leans on: static file serving, a date-range filter/sort
//! helper, and an optional Google sign-in front door.
//!
//! ## Features
//!
//! - **Task API**: create, edit, toggle, and delete tasks over REST
//! - **Persistent Store**: single-file SQLite database with startup migrations
//! - **History Filtering**: date-range filter and display ordering helpers
//! - **Static UI Serving**: ships the browser bundle from `public/`
//! - **Google Sign-In**: optional OAuth front door with sealed session cookies
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todod::api::{self, AppState};
//! use todod::db::tasks::Tasks;
//! use todod::libs::config::Config;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::from_env();
//! let app = api::router(AppState::new(Tasks::new().ok(), config));
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3001").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod db;
pub mod libs;
