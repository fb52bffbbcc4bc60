//! Sealed session cookies for the sign-in front door.
//!
//! A session is the signed-in user's email plus an expiry instant, encrypted
//! with AES-256-CBC under a key derived from `SESSION_SECRET` and carried as
//! a base64 cookie value. The cookie proves a completed sign-in; it does not
//! gate the task API.

use crate::{msg_bail_anyhow, msg_error_anyhow};
use aes::Aes256;
use anyhow::Result;
use base64::prelude::*;
use block_modes::block_padding::Pkcs7;
use block_modes::{BlockMode, Cbc};
use chrono::{Duration, Utc};

type Aes256Cbc = Cbc<Aes256, Pkcs7>;

/// Cookie name the front door sets after a successful sign-in.
pub const SESSION_COOKIE: &str = "todod_session";

/// Sessions expire a week after sign-in.
const SESSION_TTL_DAYS: i64 = 7;

#[derive(Clone)]
pub struct Sessions {
    key: Vec<u8>,
    iv: Vec<u8>,
}

impl Sessions {
    pub fn new(secret: &str) -> Self {
        Self {
            key: derive(secret.as_bytes(), 32),
            iv: derive(secret.as_bytes(), 16),
        }
    }

    /// Seals `email` with the default expiry into a cookie value.
    pub fn seal(&self, email: &str) -> Result<String> {
        let expires_at = (Utc::now() + Duration::days(SESSION_TTL_DAYS)).timestamp();
        self.seal_until(email, expires_at)
    }

    /// Seals `email` with an explicit expiry instant (unix seconds).
    pub fn seal_until(&self, email: &str, expires_at: i64) -> Result<String> {
        let payload = format!("{}|{}", email, expires_at);
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        let ciphertext = cipher.encrypt_vec(payload.as_bytes());
        Ok(BASE64_STANDARD.encode(&ciphertext))
    }

    /// Opens a cookie value back into the email it was sealed from.
    ///
    /// Tampered, undecipherable, and expired cookies are all rejected.
    pub fn open(&self, cookie: &str) -> Result<String> {
        let ciphertext = BASE64_STANDARD.decode(cookie)?;
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        let payload = String::from_utf8(cipher.decrypt_vec(&ciphertext)?)?;

        let (email, expires_at) = payload.rsplit_once('|').ok_or_else(|| msg_error_anyhow!("malformed session payload"))?;
        let expires_at: i64 = expires_at.parse()?;
        if Utc::now().timestamp() > expires_at {
            msg_bail_anyhow!("session expired");
        }

        Ok(email.to_string())
    }
}

/// Stretches the configured secret to the cipher's key/iv lengths.
fn derive(secret: &[u8], len: usize) -> Vec<u8> {
    if secret.is_empty() {
        return vec![0; len];
    }
    secret.iter().copied().cycle().take(len).collect()
}
