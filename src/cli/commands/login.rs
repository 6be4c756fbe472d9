use crate::config::Config;
use crate::core::login::{normalize_login, synthetic_email};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::detail;

/// Resolve each username to its auth email. Lookups share one limiter
/// keyed by the auth domain, so a long roster is cut off at
/// `rate_limit_max` calls per `rate_limit_window_secs`.
pub fn handle(usernames: &[String], cfg: &Config) -> AppResult<()> {
    let mut limiter = cfg.rate_limiter();

    for username in usernames {
        let decision = limiter.check(&cfg.auth_email_domain);
        if !decision.success {
            return Err(AppError::RateLimited(
                cfg.auth_email_domain.clone(),
                decision.reset_ms.div_ceil(1000),
            ));
        }
        resolve(username, cfg)?;
    }

    Ok(())
}

fn resolve(username: &str, cfg: &Config) -> AppResult<()> {
    if username.contains('@') {
        let email = synthetic_email(username, &cfg.auth_email_domain)
            .ok_or_else(|| AppError::InvalidLogin(username.to_string()))?;
        detail("Email", email);
        return Ok(());
    }

    let login = normalize_login(username).ok_or_else(|| {
        AppError::InvalidLogin(format!(
            "{:?} (3-32 chars: a-z, 0-9, '.', '_', '-'; starts with a letter or digit)",
            username
        ))
    })?;
    let email = synthetic_email(&login, &cfg.auth_email_domain)
        .ok_or_else(|| AppError::Config(format!("bad auth_email_domain: {}", cfg.auth_email_domain)))?;

    detail("Login", &login);
    detail("Email", email);
    Ok(())
}
