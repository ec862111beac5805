//! The only persisted local state: an opaque session token and a cached
//! user/tenant profile blob. Everything else lives in component state.

use contracts::system::auth::UserProfile;
use web_sys::window;

const SESSION_TOKEN_KEY: &str = "hrms_session_token";
const USER_PROFILE_KEY: &str = "hrms_user_profile";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn save_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(SESSION_TOKEN_KEY, token);
    }
}

pub fn get_token() -> Option<String> {
    get_local_storage()?.get_item(SESSION_TOKEN_KEY).ok()?
}

pub fn save_profile(profile: &UserProfile) {
    if let (Some(storage), Ok(raw)) = (get_local_storage(), serde_json::to_string(profile)) {
        let _ = storage.set_item(USER_PROFILE_KEY, &raw);
    }
}

pub fn get_profile() -> Option<UserProfile> {
    let raw = get_local_storage()?.get_item(USER_PROFILE_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

/// Clear both keys on logout.
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(SESSION_TOKEN_KEY);
        let _ = storage.remove_item(USER_PROFILE_KEY);
    }
}
