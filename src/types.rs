use chrono::{DateTime, Utc};
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use crate::codes::{HTTP_ERROR_DOMAIN, HTTP_RESPONSE_ERROR_NOT_FOUND};
use crate::context::UserInfo;

/// An error raised somewhere inside the Rexxar container, classified by a
/// string domain plus an integer code scoped to that domain.
///
/// The value is opaque to the reporting contract: handlers receive it by
/// reference and neither create nor destroy it.
#[derive(Error, Debug)]
#[error("{domain} error {code}: {message}")]
pub struct RexxarError {
    /// Per-instance correlation id, generated at construction.
    pub error_id: Uuid,
    /// Classification namespace, e.g. [`HTTP_ERROR_DOMAIN`].
    pub domain: String,
    /// Domain-scoped integer code.
    pub code: i64,
    pub message: String,
    pub occurred_at: DateTime<Utc>,
    /// Auxiliary contextual data; may hold a URL under
    /// [`ERROR_USER_INFO_URL_KEY`](crate::codes::ERROR_USER_INFO_URL_KEY).
    pub user_info: UserInfo,
    /// Wrapped upstream failure, when one triggered this error.
    pub cause: Option<anyhow::Error>,
}

impl RexxarError {
    pub fn new<D, M>(domain: D, code: i64, message: M) -> Self
    where
        D: Into<String>,
        M: Into<String>,
    {
        Self {
            error_id: Uuid::new_v4(),
            domain: domain.into(),
            code,
            message: message.into(),
            occurred_at: Utc::now(),
            user_info: UserInfo::new(),
            cause: None,
        }
    }

    /// An error in the HTTP domain.
    pub fn http<M: Into<String>>(code: i64, message: M) -> Self {
        Self::new(HTTP_ERROR_DOMAIN, code, message)
    }

    /// The "not found" error for `url`, tagged with the HTTP domain and the
    /// not-found sentinel code.
    pub fn http_not_found<U: Into<String>>(url: U) -> Self {
        Self::http(HTTP_RESPONSE_ERROR_NOT_FOUND, "resource not found").with_url(url)
    }

    pub fn with_user_info<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.user_info = self.user_info.add(key, value);
        self
    }

    pub fn with_url<U: Into<String>>(mut self, url: U) -> Self {
        self.user_info = self.user_info.with_url(url);
        self
    }

    pub fn with_cause(mut self, cause: anyhow::Error) -> Self {
        self.cause = Some(cause);
        self
    }

    /// The URL recorded under
    /// [`ERROR_USER_INFO_URL_KEY`](crate::codes::ERROR_USER_INFO_URL_KEY), if any.
    pub fn url(&self) -> Option<&str> {
        self.user_info.url()
    }

    /// Whether this error belongs to `domain` and carries `code`.
    pub fn matches(&self, domain: &str, code: i64) -> bool {
        self.domain == domain && self.code == code
    }

    pub fn is_http_not_found(&self) -> bool {
        self.matches(HTTP_ERROR_DOMAIN, HTTP_RESPONSE_ERROR_NOT_FOUND)
    }
}

/// Result type alias for Rexxar operations.
pub type Result<T> = std::result::Result<T, RexxarError>;

/// Logs an error with its classification fields under the given context tag.
pub fn log_error(context: &str, error: &RexxarError) {
    tracing::error!(
        context = context,
        error_id = %error.error_id,
        domain = %error.domain,
        code = error.code,
        "{}",
        error.message
    );
}
