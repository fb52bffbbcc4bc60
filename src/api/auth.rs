//! Google sign-in front door.
//!
//! Mounted only when the OAuth credentials and a session secret are all
//! configured. A completed sign-in seals the user's email into a session
//! cookie and lands back on the site root; every failure path also lands on
//! the root, with a logged warning. The task API itself is not gated by any
//! of this; the service is single-user.

use super::AppState;
use crate::libs::messages::Message;
use crate::libs::session::SESSION_COOKIE;
use crate::{msg_error_anyhow, msg_info, msg_warning};
use anyhow::Result;
use axum::extract::{Query, State};
use axum::response::Redirect;
use axum::routing::get;
use axum::Router;
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;

const AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v2/userinfo";
const OAUTH_SCOPE: &str = "openid email profile";

/// Query parameters Google sends back to the callback.
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct UserInfo {
    email: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/google", get(login))
        .route("/auth/google/callback", get(callback))
}

/// GET /auth/google: redirects to Google's consent screen.
async fn login(State(state): State<AppState>) -> Redirect {
    let Some(google) = state.config.google.as_ref() else {
        return Redirect::to("/");
    };

    let url = reqwest::Url::parse_with_params(
        AUTH_URL,
        &[
            ("client_id", google.client_id.as_str()),
            ("redirect_uri", google.callback_url.as_str()),
            ("response_type", "code"),
            ("scope", OAUTH_SCOPE),
        ],
    );

    match url {
        Ok(url) => Redirect::to(url.as_str()),
        Err(_) => Redirect::to("/"),
    }
}

/// GET /auth/google/callback: exchanges the code and sets the session.
async fn callback(State(state): State<AppState>, Query(query): Query<CallbackQuery>, jar: CookieJar) -> (CookieJar, Redirect) {
    let sealed = match exchange(&state, query.code.as_deref()).await {
        Ok(email) => state
            .sessions
            .as_ref()
            .ok_or_else(|| msg_error_anyhow!("sessions are not configured"))
            .and_then(|sessions| sessions.seal(&email))
            .map(|value| (email, value)),
        Err(err) => Err(err),
    };

    match sealed {
        Ok((email, value)) => {
            msg_info!(Message::OauthLoginSucceeded(email));
            let cookie = Cookie::build((SESSION_COOKIE, value)).path("/").http_only(true).build();
            (jar.add(cookie), Redirect::to("/"))
        }
        Err(err) => {
            msg_warning!(Message::OauthExchangeFailed(err.to_string()));
            (jar, Redirect::to("/"))
        }
    }
}

/// Trades the authorization code for the signed-in user's email.
async fn exchange(state: &AppState, code: Option<&str>) -> Result<String> {
    let google = state.config.google.as_ref().ok_or_else(|| msg_error_anyhow!("OAuth is not configured"))?;
    let code = code.ok_or_else(|| msg_error_anyhow!("missing authorization code"))?;

    let token: TokenResponse = state
        .http
        .post(TOKEN_URL)
        .form(&[
            ("code", code),
            ("client_id", google.client_id.as_str()),
            ("client_secret", google.client_secret.as_str()),
            ("redirect_uri", google.callback_url.as_str()),
            ("grant_type", "authorization_code"),
        ])
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let info: UserInfo = state
        .http
        .get(USERINFO_URL)
        .bearer_auth(&token.access_token)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(info.email)
}
