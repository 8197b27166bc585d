//! Access policies: map the auth state to "allowed" or a redirect target.
//!
//! Screens pass one of these to [`crate::hooks::use_access_guard`], which
//! performs the navigation.

use crate::auth::AuthState;
use crate::Route;
use api::user::UserRole;

#[derive(Debug, Clone, PartialEq, strum::EnumIs)]
pub enum Access {
    /// Auth is still resolving.
    Pending,
    Allowed,
    Redirect(Route),
}

/// Pharmacy-only screens.
pub fn pharmacy_access(auth: &AuthState) -> Access {
    if auth.loading {
        return Access::Pending;
    }
    match auth.role() {
        None => Access::Redirect(Route::Login {}),
        Some(UserRole::Pharmacy) => Access::Allowed,
        Some(_) => Access::Redirect(Route::Dashboard {}),
    }
}

/// Screens open to any signed-in user.
pub fn signed_in_access(auth: &AuthState) -> Access {
    if auth.loading {
        return Access::Pending;
    }
    match auth.user {
        None => Access::Redirect(Route::Login {}),
        Some(_) => Access::Allowed,
    }
}

/// The root path never renders content of its own; it sends the user to
/// their landing screen.
pub fn home_access(auth: &AuthState) -> Access {
    if auth.loading {
        return Access::Pending;
    }
    match auth.role() {
        None => Access::Redirect(Route::Login {}),
        Some(UserRole::Pharmacy) => Access::Redirect(Route::PharmacyDashboard {}),
        Some(_) => Access::Redirect(Route::Dashboard {}),
    }
}
