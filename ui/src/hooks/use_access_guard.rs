use crate::access::Access;
use crate::auth::use_auth;
use crate::auth::AuthState;
use dioxus::prelude::*;

/// Evaluates `policy` whenever the auth state changes and navigates to the
/// redirect target it returns.
///
/// The decision is memoized, so the redirect is pushed once per change of
/// decision rather than on every auth update.
pub fn use_access_guard(policy: fn(&AuthState) -> Access) -> Memo<Access> {
    let auth = use_auth();
    let navigator = use_navigator();
    let access = use_memo(move || policy(&auth.read()));

    use_effect(move || {
        if let Access::Redirect(target) = access() {
            navigator.push(target);
        }
    });

    access
}
