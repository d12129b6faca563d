//! In-memory cookie sessions.
//!
//! Sessions live in a uuid-keyed map behind an HttpOnly cookie and do not
//! survive a restart. There is no expiry; logout is the only way out.

use std::collections::HashMap;
use std::sync::Arc;

use axum::http::{header, HeaderMap};
use tokio::sync::RwLock;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "kanban_session";

/// The identity attached to a session. Social logins fabricate all three
/// fields; email logins carry only the email.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub name: Option<String>,
    pub email: String,
    pub provider: Option<String>,
}

impl SessionUser {
    pub fn from_email(email: &str) -> Self {
        Self {
            name: None,
            email: email.to_string(),
            provider: None,
        }
    }
}

/// Shared registry of active sessions.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, SessionUser>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session and return its id.
    pub async fn create(&self, user: SessionUser) -> String {
        let id = Uuid::new_v4().to_string();
        self.sessions.write().await.insert(id.clone(), user);
        id
    }

    pub async fn get(&self, id: &str) -> Option<SessionUser> {
        self.sessions.read().await.get(id).cloned()
    }

    pub async fn destroy(&self, id: &str) {
        self.sessions.write().await.remove(id);
    }

    /// Resolve the request's session user from its Cookie header, if any.
    pub async fn user_from_headers(&self, headers: &HeaderMap) -> Option<SessionUser> {
        let id = session_id_from_headers(headers)?;
        self.get(&id).await
    }
}

/// Extract the session id from a request's Cookie header.
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

/// Set-Cookie value establishing a session.
pub fn session_cookie(id: &str) -> String {
    format!("{}={}; Path=/; HttpOnly", SESSION_COOKIE, id)
}

/// Set-Cookie value clearing the session cookie.
pub fn clear_session_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; Max-Age=0", SESSION_COOKIE)
}
