use contracts::system::auth::UserProfile;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub token: Option<String>,
    pub profile: Option<UserProfile>,
}

/// Session context provider component.
///
/// Loads the persisted session at startup and validates it against the
/// backend; pages read the session through `use_session` instead of ambient
/// localStorage reads.
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let (session, set_session) = signal(SessionState::default());

    // Restore session from localStorage on mount. The cached profile blob is
    // shown immediately; the token is then validated against /api/auth/me and
    // the session is cleared if it no longer holds.
    Effect::new(move |_| {
        spawn_local(async move {
            let Some(token) = storage::get_token() else {
                return;
            };
            if let Some(profile) = storage::get_profile() {
                set_session.set(SessionState {
                    token: Some(token.clone()),
                    profile: Some(profile),
                });
            }
            match api::get_current_user(&token).await {
                Ok(profile) => {
                    storage::save_profile(&profile);
                    set_session.set(SessionState {
                        token: Some(token),
                        profile: Some(profile),
                    });
                }
                Err(_) => {
                    storage::clear_session();
                    set_session.set(SessionState::default());
                }
            }
        });
    });

    provide_context(session);
    provide_context(set_session);

    children()
}

/// Hook to access session state
pub fn use_session() -> (ReadSignal<SessionState>, WriteSignal<SessionState>) {
    let session = use_context::<ReadSignal<SessionState>>()
        .expect("SessionProvider not found in component tree");
    let set_session = use_context::<WriteSignal<SessionState>>()
        .expect("SessionProvider not found in component tree");

    (session, set_session)
}

/// Helper: perform login and populate both persisted keys
pub async fn do_login(email: String, password: String, tenant: String) -> Result<(), String> {
    let response = api::login(email, password, tenant).await?;

    storage::save_token(&response.token);
    storage::save_profile(&response.user);

    let (_, set_session) = use_session();
    set_session.set(SessionState {
        token: Some(response.token),
        profile: Some(response.user),
    });

    Ok(())
}

/// Helper: perform logout and clear everything
pub async fn do_logout() -> Result<(), String> {
    if let Some(token) = storage::get_token() {
        let _ = api::logout(token).await;
    }

    storage::clear_session();

    let (_, set_session) = use_session();
    set_session.set(SessionState::default());

    Ok(())
}
