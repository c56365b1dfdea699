//! Куда вернуть пользователя после входа

pub const DEFAULT_AFTER_SIGN_IN: &str = "/dashboard";

/// `/sign-in?redirect=<requested>` for a protected route the visitor could not open
pub fn sign_in_path(requested: &str) -> String {
    with_redirect("/sign-in", Some(requested))
}

/// Appends `?redirect=` to an auth page link when a safe target is known.
pub fn with_redirect(base: &str, redirect: Option<&str>) -> String {
    match redirect.and_then(safe_target) {
        Some(target) if target != DEFAULT_AFTER_SIGN_IN => {
            format!("{}?redirect={}", base, urlencoding::encode(target))
        }
        _ => base.to_owned(),
    }
}

/// Target page once the session is signed in.
pub fn after_sign_in(redirect: Option<&str>) -> String {
    redirect
        .and_then(safe_target)
        .unwrap_or(DEFAULT_AFTER_SIGN_IN)
        .to_owned()
}

/// Only same-origin paths, and never back to an auth page.
fn safe_target(target: &str) -> Option<&str> {
    let target = target.trim();
    if !target.starts_with('/') || target.starts_with("//") || target.contains('\\') {
        return None;
    }
    let path = target.split(['?', '#']).next().unwrap_or_default();
    if path == "/sign-in" || path == "/sign-up" {
        return None;
    }
    Some(target)
}
