use anyhow::Result;
use dotenv::dotenv;
use todod::api::{self, AppState};
use todod::db::tasks::Tasks;
use todod::libs::config::Config;
use todod::libs::messages::Message;
use todod::{msg_error, msg_info, msg_success};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env();

    // A store that fails to open is logged, not fatal: the server still
    // starts and task requests fail one at a time.
    let tasks = match Tasks::new() {
        Ok(tasks) => {
            msg_success!(Message::DbConnected);
            Some(tasks)
        }
        Err(err) => {
            msg_error!(Message::DbOpenFailed(err.to_string()));
            None
        }
    };

    let addr = format!("0.0.0.0:{}", config.port);
    let app = api::router(AppState::new(tasks, config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    msg_info!(Message::ServerListening(addr));
    axum::serve(listener, app).await?;

    Ok(())
}
