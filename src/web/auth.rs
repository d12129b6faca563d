//! Simulated authentication.
//!
//! There is no identity verification anywhere in this module: social login
//! fabricates a user for an allow-listed provider, and email login checks a
//! fixed code that is the same for every session. This is a UI gate, not a
//! security boundary.

use super::session::SessionUser;

/// Providers accepted by the simulated social login.
pub const ALLOWED_PROVIDERS: [&str; 3] = ["google", "apple", "microsoft"];

/// The one code email login accepts, for everyone.
pub const FIXED_LOGIN_CODE: &str = "808080";

/// Fabricate a session identity for an allow-listed provider. Unknown
/// providers get nothing.
pub fn social_identity(provider: &str) -> Option<SessionUser> {
    if !ALLOWED_PROVIDERS.contains(&provider) {
        return None;
    }

    Some(SessionUser {
        name: Some(format!("Usuario {}", provider)),
        email: format!("demo@{}.com", provider),
        provider: Some(provider.to_string()),
    })
}

/// Compare a submitted code (trimmed) against the fixed constant.
pub fn verify_code(code: &str) -> bool {
    code.trim() == FIXED_LOGIN_CODE
}
