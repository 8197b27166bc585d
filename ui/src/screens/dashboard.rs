use crate::access::signed_in_access;
use crate::auth::use_auth;
use crate::auth::AuthState;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Spinner;
use crate::hooks::use_access_guard;
use crate::Route;
use api::user::UserRole;
use dioxus::prelude::*;
use dioxus_logger::tracing::warn;

/// Signs out on the server, then clears the local auth state. The access
/// guard of the current screen takes care of leaving it.
pub fn sign_out(mut auth: Signal<AuthState>) {
    spawn(async move {
        if let Err(e) = api::sign_out().await {
            warn!("sign out failed: {}", e);
        }
        auth.set(AuthState::resolved(None));
    });
}

/// Landing screen for any signed-in user.
#[allow(non_snake_case)]
#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let access = use_access_guard(signed_in_access);

    if !access().is_allowed() {
        return rsx! {
            Spinner {}
        };
    }

    let state = auth.read();
    let Some(user) = state.user.as_ref() else {
        return rsx! {
            Spinner {}
        };
    };
    let role: &'static str = user.role.into();

    rsx! {
        Card {
            h3 { "Welcome, {user.name()}" }
            p { "Signed in as ", strong { "{role}" } }
            if user.role == UserRole::Pharmacy {
                p {
                    Link { to: Route::PharmacyDashboard {}, "Go to pharmacy dashboard" }
                }
            }
            footer {
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| sign_out(auth),
                    "Sign out"
                }
            }
        }
    }
}
