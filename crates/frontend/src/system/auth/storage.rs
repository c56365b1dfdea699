use contracts::system::auth::UserProfile;
use web_sys::window;

const PROFILE_KEY: &str = "legal_brief_profile";
const ACCOUNT_KEY_PREFIX: &str = "legal_brief_account:";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn read_json(key: &str) -> Option<UserProfile> {
    let raw = get_local_storage()?.get_item(key).ok()??;
    match serde_json::from_str(&raw) {
        Ok(profile) => Some(profile),
        Err(e) => {
            log::warn!("discarding unreadable {}: {}", key, e);
            None
        }
    }
}

fn write_json(key: &str, profile: &UserProfile) -> Result<(), String> {
    let storage = get_local_storage().ok_or_else(|| "localStorage is unavailable".to_string())?;
    let raw = serde_json::to_string(profile).map_err(|e| format!("{e}"))?;
    storage.set_item(key, &raw).map_err(|e| format!("{e:?}"))
}

fn account_key(email: &str) -> String {
    format!("{}{}", ACCOUNT_KEY_PREFIX, email.trim().to_lowercase())
}

/// Signed-in user, if the session survived a reload
pub fn load_profile() -> Option<UserProfile> {
    read_json(PROFILE_KEY)
}

pub fn save_profile(profile: &UserProfile) -> Result<(), String> {
    write_json(PROFILE_KEY, profile)
}

pub fn clear_profile() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(PROFILE_KEY);
    }
}

/// Profile registered with this email on this browser
pub fn load_account(email: &str) -> Option<UserProfile> {
    read_json(&account_key(email))
}

pub fn save_account(profile: &UserProfile) -> Result<(), String> {
    let email = profile
        .email
        .as_deref()
        .ok_or_else(|| "account has no email".to_string())?;
    write_json(&account_key(email), profile)
}
