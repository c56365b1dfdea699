use std::sync::Arc;

use contracts::system::auth::UserProfile;
use leptos::prelude::*;

use super::provider::{Credentials, IdentityProvider, LocalIdentityProvider};

/// Session state shared by the whole app
#[derive(Clone, Copy)]
pub struct SessionContext {
    user: RwSignal<Option<UserProfile>>,
    provider: StoredValue<Arc<dyn IdentityProvider>>,
}

impl SessionContext {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        let user = provider.current_user();
        if let Some(profile) = &user {
            log::debug!("restored session for {}", profile.display_name);
        }
        Self {
            user: RwSignal::new(user),
            provider: StoredValue::new(provider),
        }
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.user.get()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.with(Option::is_some)
    }

    pub fn sign_in(&self, credentials: &Credentials) -> Result<(), String> {
        let profile = self.provider.with_value(|p| p.sign_in(credentials))?;
        self.user.set(Some(profile));
        Ok(())
    }

    pub fn sign_up(&self, credentials: &Credentials) -> Result<(), String> {
        let profile = self.provider.with_value(|p| p.sign_up(credentials))?;
        self.user.set(Some(profile));
        Ok(())
    }

    pub fn sign_out(&self) {
        self.provider.with_value(|p| p.sign_out());
        self.user.set(None);
    }
}

/// Provides [`SessionContext`] backed by the browser-local provider
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    provide_context(SessionContext::new(Arc::new(LocalIdentityProvider)));
    children()
}

/// Hook to access the session
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionProvider not found in component tree")
}
