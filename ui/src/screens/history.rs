//=============================================================================
// File: src/screens/history.rs
//=============================================================================
use crate::access::pharmacy_access;
use crate::auth::use_auth;
use crate::auth::AuthState;
use crate::components::empty_state::EmptyState;
use crate::components::pico::Spinner;
use crate::components::stat_tile::AvailabilityTiles;
use crate::hooks::use_access_guard;
use crate::hooks::use_pharmacy_history;
use crate::Route;
use api::history::HistoryItem;
use api::history::HistorySummary;
use api::medicine_request::MedicineRequest;
use api::timestamp::StoreTimestamp;
use chrono::Local;
use chrono::TimeZone;
use dioxus::prelude::*;
use std::fmt::Display;

const TITLE_MAX_CHARS: usize = 40;

/// What the area below the summary tiles shows.
#[derive(Debug, PartialEq)]
pub enum HistoryBody<'a> {
    Loading,
    Empty,
    Cards(&'a [HistoryItem]),
}

impl<'a> HistoryBody<'a> {
    pub fn select(loading: bool, items: &'a [HistoryItem]) -> Self {
        if loading {
            Self::Loading
        } else if items.is_empty() {
            Self::Empty
        } else {
            Self::Cards(items)
        }
    }
}

/// "Prescription Upload" for prescriptions, otherwise the first 40
/// characters of the medicine text as entered. Only absent or empty text
/// falls back to "Medicine Request".
pub fn card_title(request: &MedicineRequest) -> String {
    if request.request_type.is_prescription() {
        return "Prescription Upload".to_string();
    }
    match request.medicine_text.as_deref().filter(|s| !s.is_empty()) {
        Some(text) => text.chars().take(TITLE_MAX_CHARS).collect(),
        None => "Medicine Request".to_string(),
    }
}

pub fn card_subtitle(item: &HistoryItem) -> String {
    format!(
        "{} • {:.1} km",
        item.request.customer_name, item.response.distance
    )
}

pub fn badge_label(is_available: bool) -> &'static str {
    if is_available {
        "Marked Available"
    } else {
        "Marked Not Available"
    }
}

/// Formats a store timestamp like "5 Jan 2024, 02:30 pm". Empty when absent.
pub fn format_timestamp_in<Tz>(timestamp: Option<StoreTimestamp>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp
        .and_then(|ts| ts.to_date())
        .map(|date| {
            date.with_timezone(tz)
                .format("%-d %b %Y, %I:%M %P")
                .to_string()
        })
        .unwrap_or_default()
}

pub fn format_timestamp(timestamp: Option<StoreTimestamp>) -> String {
    format_timestamp_in(timestamp, &Local)
}

/// One clickable row in the history list.
#[component]
fn HistoryCard(item: HistoryItem) -> Element {
    let is_available = item.is_available();

    let icon = if item.request.request_type.is_prescription() {
        "📄"
    } else {
        "💊"
    };
    let title = card_title(&item.request);
    let subtitle = card_subtitle(&item);
    let date = format_timestamp(item.response.responded_at);
    let badge_class = if is_available {
        "badge available"
    } else {
        "badge not-available"
    };
    let badge = format!(
        "{} {}",
        if is_available { "✓" } else { "✕" },
        badge_label(is_available)
    );
    let request_id = item.request.request_id.clone();

    rsx! {
        button {
            class: "history-card",
            onclick: move |_| {
                navigator().push(Route::PharmacyRequest {
                    request_id: request_id.clone(),
                });
            },
            div { class: "history-card-icon", "{icon}" }
            div {
                class: "history-card-body",
                p { class: "history-card-title", "{title}" }
                p { class: "history-card-subtitle", "{subtitle}" }
                div {
                    class: "history-card-meta",
                    span {
                        class: badge_class,
                        "{badge}"
                    }
                    small { "{date}" }
                }
            }
            span { class: "history-card-chevron", "›" }
        }
    }
}

/// Spinner, empty state, or one card per history item.
#[component]
fn HistoryEntries(loading: bool, items: Vec<HistoryItem>) -> Element {
    match HistoryBody::select(loading, &items) {
        HistoryBody::Loading => rsx! {
            Spinner {}
        },
        HistoryBody::Empty => rsx! {
            EmptyState {
                icon: Some("🕒".to_string()),
                title: "No response history".to_string(),
                description: Some("Your responses to medicine requests will appear here.".to_string()),
            }
        },
        HistoryBody::Cards(cards) => rsx! {
            div {
                class: "history-list",
                for item in cards.iter() {
                    HistoryCard {
                        key: "{item.response.response_id}",
                        item: item.clone(),
                    }
                }
            }
        },
    }
}

/// The page body renders once auth has resolved to a signed-in user. Any
/// role mismatch is left to the access guard's redirect.
pub fn page_ready(auth: &AuthState) -> bool {
    !auth.loading && auth.user.is_some()
}

#[allow(non_snake_case)]
#[component]
pub fn PharmacyHistory() -> Element {
    let navigator = use_navigator();
    let auth = use_auth();
    use_access_guard(pharmacy_access);

    let uid = use_memo(move || auth.read().uid().map(str::to_owned));
    let history = use_pharmacy_history(uid);

    if !page_ready(&auth.read()) {
        return rsx! {
            Spinner {}
        };
    }

    let items = history.items.read().clone();
    let summary = HistorySummary::from_items(&items);

    rsx! {
        div {
            class: "history-screen",
            header {
                class: "screen-header",
                button {
                    class: "back-button",
                    "aria-label": "Back",
                    onclick: move |_| {
                        navigator.push(Route::PharmacyDashboard {});
                    },
                    "←"
                }
                div {
                    h1 { "Response History" }
                    p { "{summary.total} total responses" }
                }
            }

            AvailabilityTiles { summary }

            HistoryEntries {
                loading: (history.loading)(),
                items,
            }
        }
    }
}
