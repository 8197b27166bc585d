use api::history::HistoryItem;
use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::error;
use std::fmt::Display;

/// Counts fetch attempts so a completed fetch can tell whether it has been
/// superseded by a newer one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FetchGeneration(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

impl FetchGeneration {
    /// Starts a new attempt, invalidating every earlier ticket.
    pub fn begin(&mut self) -> FetchTicket {
        self.0 += 1;
        FetchTicket(self.0)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        self.0 == ticket.0
    }
}

/// Turns a completed fetch into the `(items, loading)` pair to store.
///
/// `None` when the ticket has been superseded. A failure is logged and
/// yields an empty list, so nothing from an earlier fetch survives it.
pub fn settle_fetch<E: Display>(
    generation: &FetchGeneration,
    ticket: FetchTicket,
    result: Result<Vec<HistoryItem>, E>,
) -> Option<(Vec<HistoryItem>, bool)> {
    if !generation.is_current(ticket) {
        return None;
    }
    match result {
        Ok(data) => Some((data, false)),
        Err(e) => {
            error!("Error fetching history: {}", e);
            Some((Vec::new(), false))
        }
    }
}

/// The pharmacy's response history and whether a fetch is in flight.
#[derive(Clone, Copy)]
pub struct PharmacyHistoryState {
    pub items: Signal<Vec<HistoryItem>>,
    pub loading: Signal<bool>,
}

/// Fetches the response history for `uid` each time it changes.
///
/// A failed fetch is logged and leaves the list empty. Results from a fetch
/// started for an earlier uid are dropped.
pub fn use_pharmacy_history(uid: Memo<Option<String>>) -> PharmacyHistoryState {
    let mut items = use_signal(Vec::new);
    let mut loading = use_signal(|| true);
    let mut generation = use_signal(FetchGeneration::default);

    use_effect(move || {
        let Some(uid) = uid() else {
            return;
        };
        let ticket = generation.write().begin();
        items.set(Vec::new());
        loading.set(true);

        spawn(async move {
            let result = api::pharmacy_response_history(uid.clone()).await;

            let settled = settle_fetch(&generation.peek(), ticket, result);
            let Some((data, still_loading)) = settled else {
                debug!("discarding superseded history fetch for {}", uid);
                return;
            };
            items.set(data);
            loading.set(still_loading);
        });
    });

    PharmacyHistoryState { items, loading }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_ticket_is_current() {
        let mut generation = FetchGeneration::default();
        let ticket = generation.begin();
        assert!(generation.is_current(ticket));
    }

    #[test]
    fn newer_fetch_supersedes_older() {
        let mut generation = FetchGeneration::default();
        let first = generation.begin();
        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    fn sample_item() -> HistoryItem {
        use api::medicine_request::MedicineRequest;
        use api::medicine_request::RequestType;
        use api::pharmacy_response::Availability;
        use api::pharmacy_response::PharmacyResponse;

        HistoryItem {
            request: MedicineRequest {
                request_id: "r1".into(),
                request_type: RequestType::Text,
                medicine_text: Some("Cetirizine".into()),
                customer_name: "Alice".into(),
                customer_id: None,
                prescription_url: None,
                created_at: None,
            },
            response: PharmacyResponse {
                response_id: "x1".into(),
                request_id: "r1".into(),
                pharmacy_id: "p1".into(),
                availability: Availability::Available,
                distance: 1.0,
                responded_at: None,
                note: None,
            },
        }
    }

    #[test]
    fn successful_fetch_stores_items_and_stops_loading() {
        let mut generation = FetchGeneration::default();
        let ticket = generation.begin();
        let settled = settle_fetch::<String>(&generation, ticket, Ok(vec![sample_item()]));
        assert_eq!(settled, Some((vec![sample_item()], false)));
    }

    #[test]
    fn failed_fetch_clears_items_and_stops_loading() {
        let mut generation = FetchGeneration::default();
        let ticket = generation.begin();
        let settled = settle_fetch(&generation, ticket, Err("store unavailable"));
        assert_eq!(settled, Some((Vec::new(), false)));
    }

    #[test]
    fn superseded_fetch_changes_nothing() {
        let mut generation = FetchGeneration::default();
        let stale = generation.begin();
        generation.begin();
        assert_eq!(settle_fetch::<String>(&generation, stale, Ok(vec![sample_item()])), None);
        assert_eq!(settle_fetch(&generation, stale, Err("boom")), None);
    }
}
