//! Club usernames on top of an email-only auth provider.
//!
//! Members log in with a short club login (`marko.p`). The provider only
//! knows emails, so each login is registered as `<login>@<club domain>`.

use regex::Regex;
use std::sync::LazyLock;

static LOGIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9._-]{2,31}$").expect("valid login regex"));

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9._%+-]+@[a-z0-9-]+(\.[a-z0-9-]+)+$").expect("valid email regex")
});

/// Trim and lowercase a login; `None` if it is not a valid club login.
pub fn normalize_login(input: &str) -> Option<String> {
    let login = input.trim().to_lowercase();
    LOGIN_RE.is_match(&login).then_some(login)
}

fn normalize_domain(domain: &str) -> String {
    domain.trim().trim_start_matches('@').to_lowercase()
}

/// Email to register/sign in with for `input`.
///
/// A real email address passes through (lowercased); a club login is
/// mapped onto `domain`.
pub fn synthetic_email(input: &str, domain: &str) -> Option<String> {
    let candidate = input.trim().to_lowercase();
    if candidate.contains('@') {
        return EMAIL_RE.is_match(&candidate).then_some(candidate);
    }

    let login = normalize_login(&candidate)?;
    let email = format!("{login}@{}", normalize_domain(domain));
    EMAIL_RE.is_match(&email).then_some(email)
}

/// Club login behind a synthetic address, if `email` lives on `domain`.
pub fn login_from_email(email: &str, domain: &str) -> Option<String> {
    let email = email.trim().to_lowercase();
    let (local, host) = email.rsplit_once('@')?;
    if host != normalize_domain(domain) {
        return None;
    }
    normalize_login(local)
}
