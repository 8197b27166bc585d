//! Client-side auth state, provided to every screen as a context signal.

use api::user::AuthUser;
use api::user::UserRole;
use dioxus::prelude::*;
use dioxus_logger::tracing::warn;

/// Who is signed in, and whether that is still being determined.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn resolved(user: Option<AuthUser>) -> Self {
        Self {
            user,
            loading: false,
        }
    }

    pub fn uid(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.uid.as_str())
    }

    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().map(|u| u.role)
    }
}

/// Resolves the current user once on mount and provides `Signal<AuthState>`
/// to its children.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth = use_signal(AuthState::default);
    use_context_provider(|| auth);

    use_effect(move || {
        spawn(async move {
            let user = match api::current_user().await {
                Ok(user) => user,
                Err(e) => {
                    warn!("unable to resolve current user: {}", e);
                    None
                }
            };
            auth.set(AuthState::resolved(user));
        });
    });

    rsx! {
        {children}
    }
}

pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_loading_with_no_user() {
        let state = AuthState::default();
        assert!(state.loading);
        assert_eq!(state.uid(), None);
    }

    #[test]
    fn resolved_state_exposes_user() {
        let state = AuthState::resolved(Some(AuthUser {
            uid: "p1".into(),
            role: UserRole::Pharmacy,
            display_name: None,
        }));
        assert!(!state.loading);
        assert_eq!(state.uid(), Some("p1"));
        assert_eq!(state.role(), Some(UserRole::Pharmacy));
    }
}
