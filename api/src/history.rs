//! Request/response pairs shown on the pharmacy history screen.

use crate::medicine_request::MedicineRequest;
use crate::pharmacy_response::Availability;
use crate::pharmacy_response::PharmacyResponse;
use serde::Deserialize;
use serde::Serialize;

/// One request paired with the pharmacy's response to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub request: MedicineRequest,
    pub response: PharmacyResponse,
}

impl HistoryItem {
    pub fn is_available(&self) -> bool {
        self.response.availability.is_available()
    }
}

/// Counts derived from a history list.
///
/// `available + not_available == total` always holds, since every response
/// carries exactly one availability value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HistorySummary {
    pub total: usize,
    pub available: usize,
    pub not_available: usize,
}

impl HistorySummary {
    pub fn from_items(items: &[HistoryItem]) -> Self {
        items.iter().fold(Self::default(), |mut acc, item| {
            acc.total += 1;
            match item.response.availability {
                Availability::Available => acc.available += 1,
                Availability::NotAvailable => acc.not_available += 1,
            }
            acc
        })
    }
}
