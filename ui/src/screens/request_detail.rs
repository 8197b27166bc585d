use crate::access::pharmacy_access;
use crate::auth::use_auth;
use crate::components::empty_state::EmptyState;
use crate::components::pico::Card;
use crate::components::pico::Spinner;
use crate::hooks::use_access_guard;
use crate::screens::history::card_title;
use crate::screens::history::format_timestamp;
use crate::Route;
use api::history::HistoryItem;
use dioxus::prelude::*;

#[component]
fn RequestDetails(item: HistoryItem) -> Element {
    let HistoryItem { request, response } = &item;
    let request_type: &'static str = request.request_type.into();
    let availability = if item.is_available() {
        "Available"
    } else {
        "Not available"
    };
    let responded = format_timestamp(response.responded_at);
    let requested = format_timestamp(request.created_at);
    let title = card_title(request);
    let distance = format!("{:.1} km", response.distance);

    rsx! {
        h3 { "{title}" }
        table {
            tbody {
                tr { th { "Customer" } td { "{request.customer_name}" } }
                tr { th { "Request type" } td { "{request_type}" } }
                if let Some(text) = request.medicine_text() {
                    tr { th { "Medicine" } td { "{text}" } }
                }
                if let Some(url) = &request.prescription_url {
                    tr {
                        th { "Prescription" }
                        td { a { href: "{url}", target: "_blank", "Open image" } }
                    }
                }
                if !requested.is_empty() {
                    tr { th { "Requested" } td { "{requested}" } }
                }
                tr { th { "Your response" } td { "{availability}" } }
                tr { th { "Distance" } td { "{distance}" } }
                if !responded.is_empty() {
                    tr { th { "Responded" } td { "{responded}" } }
                }
                if let Some(note) = &response.note {
                    tr { th { "Note" } td { "{note}" } }
                }
            }
        }
    }
}

/// Loads and shows one request. Keyed on the request id by its parent, so a
/// new id mounts a fresh panel with its own fetch.
#[component]
fn RequestPanel(request_id: String) -> Element {
    let auth = use_auth();

    let mut detail = use_resource(move || {
        let uid = auth.read().uid().map(str::to_owned);
        let request_id = request_id.clone();
        async move {
            match uid {
                Some(uid) => api::pharmacy_request(uid, request_id).await,
                None => Ok(None),
            }
        }
    });

    let view = match &*detail.read() {
        None => rsx! {
            Spinner {}
        },
        Some(Err(e)) => rsx! {
            h3 { "Error" }
            p { "Failed to load request: {e}" }
            button { onclick: move |_| detail.restart(), "Retry" }
        },
        Some(Ok(None)) => rsx! {
            EmptyState {
                icon: Some("🔍".to_string()),
                title: "Request not found".to_string(),
                description: Some("This request does not exist or was not answered by your pharmacy.".to_string()),
            }
        },
        Some(Ok(Some(item))) => rsx! {
            RequestDetails { item: item.clone() }
        },
    };
    view
}

/// Detail view for one request the signed-in pharmacy has answered.
#[allow(non_snake_case)]
#[component]
pub fn PharmacyRequest(request_id: String) -> Element {
    let access = use_access_guard(pharmacy_access);

    if !access().is_allowed() {
        return rsx! {
            Spinner {}
        };
    }

    rsx! {
        Card {
            p {
                Link { to: Route::PharmacyHistory {}, "← Response History" }
            }
            RequestPanel {
                key: "{request_id}",
                request_id: request_id.clone(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::medicine_request::MedicineRequest;
    use api::medicine_request::RequestType;
    use api::pharmacy_response::Availability;
    use api::pharmacy_response::PharmacyResponse;

    fn item(request_id: &str, medicine_text: &str) -> HistoryItem {
        HistoryItem {
            request: MedicineRequest {
                request_id: request_id.into(),
                request_type: RequestType::Text,
                medicine_text: Some(medicine_text.into()),
                customer_name: "Meera".into(),
                customer_id: None,
                prescription_url: None,
                created_at: None,
            },
            response: PharmacyResponse {
                response_id: format!("resp-{request_id}"),
                request_id: request_id.into(),
                pharmacy_id: "p1".into(),
                availability: Availability::NotAvailable,
                distance: 0.8,
                responded_at: None,
                note: Some("Back on Monday".into()),
            },
        }
    }

    #[test]
    fn details_show_the_given_request() {
        let html = dioxus_ssr::render_element(rsx! {
            RequestDetails { item: item("req-1003", "Cetirizine") }
        });
        assert!(html.contains("Cetirizine"));
        assert!(html.contains("Meera"));
        assert!(html.contains("Not available"));
        assert!(html.contains("0.8 km"));
        assert!(html.contains("Back on Monday"));
        assert!(!html.contains("Responded"));
    }
}
