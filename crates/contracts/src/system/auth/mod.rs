use serde::{Deserialize, Serialize};

/// Signed-in user as shown in the header and dashboard greeting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub display_name: String,
    pub email: Option<String>,
}

impl UserProfile {
    pub fn new(display_name: impl Into<String>, email: Option<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            display_name: display_name.into(),
            email,
        }
    }

    /// Up to two letters for the avatar button
    pub fn initials(&self) -> String {
        let initials: String = self
            .display_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            "?".to_string()
        } else {
            initials
        }
    }

    /// First word of the display name, falls back to the email local part
    pub fn first_name(&self) -> String {
        if let Some(first) = self.display_name.split_whitespace().next() {
            return first.to_string();
        }
        self.email
            .as_deref()
            .and_then(|e| e.split('@').next())
            .filter(|s| !s.is_empty())
            .unwrap_or("there")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        let user = UserProfile::new("sarah mitchell", None);
        assert_eq!(user.initials(), "SM");
        assert_eq!(UserProfile::new("Rebecca Anne Adams", None).initials(), "RA");
        assert_eq!(UserProfile::new("   ", None).initials(), "?");
    }

    #[test]
    fn test_first_name_fallbacks() {
        assert_eq!(UserProfile::new("Timothy Clark", None).first_name(), "Timothy");
        assert_eq!(
            UserProfile::new("", Some("tim@example.com".into())).first_name(),
            "tim"
        );
        assert_eq!(UserProfile::new("", None).first_name(), "there");
    }

    #[test]
    fn test_profile_json_roundtrip() {
        let user = UserProfile::new("Sarah Mitchell", Some("sarah@example.com".into()));
        let json = serde_json::to_string(&user).unwrap();
        let back: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}
