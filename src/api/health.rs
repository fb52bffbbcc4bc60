//! `/health` endpoint.

use axum::Json;
use serde::Serialize;

/// Health probe body; `ok` is true whenever the process is serving.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialization() {
        let json = serde_json::to_string(&HealthResponse { ok: true }).unwrap();
        assert_eq!(json, r#"{"ok":true}"#);
    }
}
