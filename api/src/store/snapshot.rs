//! The full document set and the queries the server functions run on it.

use crate::history::HistoryItem;
use crate::medicine_request::MedicineRequest;
use crate::pharmacy_response::PharmacyResponse;
use crate::user::AuthUser;
use dioxus_logger::tracing::warn;
use itertools::Itertools;
use serde::Deserialize;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    #[serde(default)]
    pub users: Vec<AuthUser>,
    #[serde(default)]
    pub requests: Vec<MedicineRequest>,
    #[serde(default)]
    pub responses: Vec<PharmacyResponse>,
}

impl StoreSnapshot {
    pub fn user(&self, uid: &str) -> Option<&AuthUser> {
        self.users.iter().find(|u| u.uid == uid)
    }

    /// All responses given by `pharmacy_id`, newest first, each paired with
    /// its request. Responses without a timestamp sort last. Responses whose
    /// request no longer exists are skipped.
    pub fn pharmacy_response_history(&self, pharmacy_id: &str) -> Vec<HistoryItem> {
        let requests: HashMap<&str, &MedicineRequest> = self
            .requests
            .iter()
            .map(|r| (r.request_id.as_str(), r))
            .collect();

        self.responses
            .iter()
            .filter(|resp| resp.pharmacy_id == pharmacy_id)
            .sorted_by(|a, b| b.responded_at.cmp(&a.responded_at))
            .filter_map(|resp| match requests.get(resp.request_id.as_str()) {
                Some(request) => Some(HistoryItem {
                    request: (*request).clone(),
                    response: resp.clone(),
                }),
                None => {
                    warn!(
                        "response {} refers to missing request {}",
                        resp.response_id, resp.request_id
                    );
                    None
                }
            })
            .collect()
    }

    /// The request `request_id` together with `pharmacy_id`'s latest response to it.
    pub fn pharmacy_request(&self, pharmacy_id: &str, request_id: &str) -> Option<HistoryItem> {
        self.pharmacy_response_history(pharmacy_id)
            .into_iter()
            .find(|item| item.request.request_id == request_id)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::medicine_request::RequestType;
    use crate::pharmacy_response::Availability;
    use crate::timestamp::StoreTimestamp;
    use crate::user::UserRole;

    fn request(id: &str) -> MedicineRequest {
        MedicineRequest {
            request_id: id.into(),
            request_type: RequestType::Text,
            medicine_text: Some(format!("medicine for {id}")),
            customer_name: "Alice".into(),
            customer_id: None,
            prescription_url: None,
            created_at: None,
        }
    }

    fn response(id: &str, request_id: &str, pharmacy: &str, at: Option<i64>) -> PharmacyResponse {
        PharmacyResponse {
            response_id: id.into(),
            request_id: request_id.into(),
            pharmacy_id: pharmacy.into(),
            availability: Availability::Available,
            distance: 1.5,
            responded_at: at.map(|s| StoreTimestamp::new(s, 0)),
            note: None,
        }
    }

    pub(crate) fn sample() -> StoreSnapshot {
        StoreSnapshot {
            users: vec![
                AuthUser {
                    uid: "p1".into(),
                    role: UserRole::Pharmacy,
                    display_name: Some("City Pharmacy".into()),
                },
                AuthUser {
                    uid: "c1".into(),
                    role: UserRole::Customer,
                    display_name: None,
                },
            ],
            requests: vec![request("r1"), request("r2"), request("r3")],
            responses: vec![
                response("x1", "r1", "p1", Some(100)),
                response("x2", "r2", "p1", Some(300)),
                response("x3", "r3", "p1", None),
                response("x4", "r1", "p2", Some(200)),
                response("x5", "gone", "p1", Some(400)),
            ],
        }
    }

    #[test]
    fn history_is_newest_first_and_scoped_to_pharmacy() {
        let ids: Vec<_> = sample()
            .pharmacy_response_history("p1")
            .into_iter()
            .map(|item| item.response.response_id)
            .collect();
        assert_eq!(ids, vec!["x2", "x1", "x3"]);
    }

    #[test]
    fn history_pairs_each_response_with_its_request() {
        for item in sample().pharmacy_response_history("p1") {
            assert_eq!(item.request.request_id, item.response.request_id);
        }
    }

    #[test]
    fn unknown_pharmacy_has_empty_history() {
        assert!(sample().pharmacy_response_history("nobody").is_empty());
    }

    #[test]
    fn finds_request_answered_by_pharmacy() {
        let snapshot = sample();
        let item = snapshot.pharmacy_request("p1", "r2").unwrap();
        assert_eq!(item.response.response_id, "x2");

        // r1 was answered by p2 as well, but p1 only sees its own response.
        let item = snapshot.pharmacy_request("p1", "r1").unwrap();
        assert_eq!(item.response.response_id, "x1");

        assert!(snapshot.pharmacy_request("p2", "r2").is_none());
    }

    #[test]
    fn looks_up_users() {
        let snapshot = sample();
        assert_eq!(snapshot.user("p1").unwrap().role, UserRole::Pharmacy);
        assert!(snapshot.user("p9").is_none());
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let snapshot: StoreSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(snapshot, StoreSnapshot::default());
    }
}
