use thiserror::Error;

/// Unified error type for the entire event-chart-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Data Shape ──────────────────────────────────────────────────
    #[error("Invalid date '{0}': expected YYYY-MM-DD or a recognised day-first layout")]
    InvalidDate(String),

    #[error("Unknown event category: {0}")]
    UnknownCategory(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── API / Network ───────────────────────────────────────────────
    #[error("API error ({dataset}): {message}")]
    Api {
        dataset: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    // ── View State ──────────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("No annotated point at index {0}")]
    PointNotFound(usize),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // reqwest embeds the full request URL; drop the query string.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
