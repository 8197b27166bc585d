use crate::access::pharmacy_access;
use crate::auth::use_auth;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Spinner;
use crate::components::stat_tile::AvailabilityTiles;
use crate::hooks::use_access_guard;
use crate::hooks::use_pharmacy_history;
use crate::screens::dashboard::sign_out;
use crate::Route;
use api::history::HistorySummary;
use dioxus::prelude::*;

#[allow(non_snake_case)]
#[component]
pub fn PharmacyDashboard() -> Element {
    let navigator = use_navigator();
    let auth = use_auth();
    let access = use_access_guard(pharmacy_access);

    let uid = use_memo(move || auth.read().uid().map(str::to_owned));
    let history = use_pharmacy_history(uid);

    if !access().is_allowed() {
        return rsx! {
            Spinner {}
        };
    }

    let name = auth
        .read()
        .user
        .as_ref()
        .map(|u| u.name().to_string())
        .unwrap_or_default();
    let summary = HistorySummary::from_items(&history.items.read());

    rsx! {
        Card {
            h3 { "{name}" }
            p { "Pharmacy dashboard" }
            if (history.loading)() {
                Spinner {}
            } else {
                AvailabilityTiles { summary }
            }
            footer {
                Button {
                    on_click: move |_| {
                        navigator.push(Route::PharmacyHistory {});
                    },
                    "View response history ({summary.total})"
                }
                " "
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
