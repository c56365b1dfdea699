//! Identity boundary. The hosted identity service is not part of this
//! repo; `LocalIdentityProvider` stands in for it and keeps the profile in
//! `localStorage`.

use contracts::system::auth::UserProfile;

use super::storage;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub const MIN_PASSWORD_LEN: usize = 8;

impl Credentials {
    /// Form-level checks; `require_name` is set for sign-up
    pub fn check(&self, require_name: bool) -> Result<(), String> {
        if require_name && self.name.trim().is_empty() {
            return Err("Enter your name".to_string());
        }
        let email = self.email.trim();
        let valid_email = email
            .split_once('@')
            .map(|(local, domain)| !local.is_empty() && domain.contains('.'))
            .unwrap_or(false);
        if !valid_email {
            return Err("Enter a valid email address".to_string());
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            ));
        }
        Ok(())
    }
}

/// "jane.doe@firm.com" -> "Jane Doe"
pub fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    let words: Vec<String> = local
        .split(|c: char| c == '.' || c == '_' || c == '-' || c == '+')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect();
    if words.is_empty() {
        email.to_string()
    } else {
        words.join(" ")
    }
}

pub trait IdentityProvider: Send + Sync {
    fn current_user(&self) -> Option<UserProfile>;
    fn sign_in(&self, credentials: &Credentials) -> Result<UserProfile, String>;
    fn sign_up(&self, credentials: &Credentials) -> Result<UserProfile, String>;
    fn sign_out(&self);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalIdentityProvider;

impl IdentityProvider for LocalIdentityProvider {
    fn current_user(&self) -> Option<UserProfile> {
        storage::load_profile()
    }

    fn sign_in(&self, credentials: &Credentials) -> Result<UserProfile, String> {
        credentials.check(false)?;
        let email = credentials.email.trim();
        let profile = storage::load_account(email).unwrap_or_else(|| {
            UserProfile::new(display_name_from_email(email), Some(email.to_string()))
        });
        storage::save_profile(&profile)?;
        log::info!("signed in as {}", profile.display_name);
        Ok(profile)
    }

    fn sign_up(&self, credentials: &Credentials) -> Result<UserProfile, String> {
        credentials.check(true)?;
        let profile = UserProfile::new(
            credentials.name.trim(),
            Some(credentials.email.trim().to_string()),
        );
        storage::save_account(&profile)?;
        storage::save_profile(&profile)?;
        log::info!("registered {}", profile.display_name);
        Ok(profile)
    }

    fn sign_out(&self) {
        storage::clear_profile();
        log::info!("signed out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds(name: &str, email: &str, password: &str) -> Credentials {
        Credentials {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn test_credentials_check() {
        assert!(creds("", "tim@clark.law", "hunter22").check(false).is_ok());
        assert_eq!(
            creds("", "tim@clark.law", "hunter22").check(true),
            Err("Enter your name".to_string())
        );
        assert_eq!(
            creds("Tim", "tim.clark.law", "hunter22").check(true),
            Err("Enter a valid email address".to_string())
        );
        assert_eq!(
            creds("Tim", "@clark.law", "hunter22").check(true),
            Err("Enter a valid email address".to_string())
        );
        assert_eq!(
            creds("Tim", "tim@clark.law", "short").check(true),
            Err("Password must be at least 8 characters".to_string())
        );
    }

    #[test]
    fn test_display_name_from_email() {
        assert_eq!(display_name_from_email("jane.doe@firm.com"), "Jane Doe");
        assert_eq!(display_name_from_email("rebecca_adams@uni.edu"), "Rebecca Adams");
        assert_eq!(display_name_from_email("tim@clark.law"), "Tim");
    }
}
