//! Session state: server base URL and bearer token.
//!
//! [`Session`] is a plain value passed to every service operation, which
//! attaches the bearer header per request. [`SharedSession`] is the cell a
//! long-lived caller keeps it in: writers replace the whole value under a
//! lock, readers take a snapshot, so an operation sees either the old or the
//! new token and never a partial update.

use std::sync::{Arc, PoisonError, RwLock};

use url::Url;

use crate::error::{SemslaError, ValidationError};
use crate::models::LoginResult;

/// Base URL and bearer token of one client session.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Session {
    base_url: String,
    token: Option<String>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Session {
    /// Creates an unauthenticated session for `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut session = Self::default();
        session.set_base_url(base_url);
        session
    }

    /// Replaces the base URL. Surrounding whitespace and trailing slashes are dropped.
    pub fn set_base_url(&mut self, url: impl Into<String>) {
        self.base_url = url.into().trim().trim_end_matches('/').to_string();
    }

    /// Stores a bearer token; a blank token clears it.
    pub fn set_token(&mut self, token: impl Into<String>) {
        let token = token.into().trim().to_string();
        self.token = (!token.is_empty()).then_some(token);
    }

    /// Forgets the bearer token.
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// The configured base URL (possibly empty).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The current bearer token.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// `"Bearer <token>"`, if a token is set.
    pub fn authorization_header(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {}", token))
    }

    /// Checks that the base URL is a non-empty absolute http(s) URL.
    ///
    /// # Errors
    ///
    /// `MissingField("base_url")` when empty, `InvalidBaseUrl` when malformed.
    pub fn require_base_url(&self) -> Result<&str, SemslaError> {
        if self.base_url.is_empty() {
            return Err(SemslaError::missing("base_url"));
        }
        match Url::parse(&self.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {
                Ok(&self.base_url)
            }
            _ => Err(ValidationError::InvalidBaseUrl(self.base_url.clone()).into()),
        }
    }

    /// Returns the `Authorization` header value, or fails if no token is set.
    pub fn require_authorization(&self) -> Result<String, SemslaError> {
        self.authorization_header()
            .ok_or_else(|| SemslaError::missing("token"))
    }

    /// Absolute URL of an API path such as `/api/v1/login`.
    pub fn endpoint(&self, path: &str) -> Result<String, SemslaError> {
        Ok(format!("{}{}", self.require_base_url()?, path))
    }
}

/// Thread-safe session cell shared by a long-lived caller.
///
/// Cloning shares the same underlying session.
#[derive(Clone, Default)]
pub struct SharedSession {
    inner: Arc<RwLock<Session>>,
}

impl SharedSession {
    /// Wraps `session`.
    pub fn new(session: Session) -> Self {
        Self {
            inner: Arc::new(RwLock::new(session)),
        }
    }

    /// A copy of the current session.
    pub fn snapshot(&self) -> Session {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the base URL.
    pub fn set_base_url(&self, url: impl Into<String>) {
        self.update(|session| session.set_base_url(url));
    }

    /// Stores a bearer token; a blank token clears it.
    pub fn set_token(&self, token: impl Into<String>) {
        self.update(|session| session.set_token(token));
    }

    /// Forgets the bearer token.
    pub fn clear_token(&self) {
        self.update(Session::clear_token);
    }

    /// Stores the token carried by a login result, if any.
    ///
    /// Returns whether a token was stored.
    pub fn apply_login(&self, login: &LoginResult) -> bool {
        match &login.token {
            Some(token) => {
                self.set_token(token.as_str());
                true
            }
            None => false,
        }
    }

    fn update(&self, f: impl FnOnce(&mut Session)) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard);
    }
}

impl std::fmt::Debug for SharedSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.snapshot(), f)
    }
}
