//! A pharmacy's answer to a medicine request.

use crate::timestamp::StoreTimestamp;
use serde::Deserialize;
use serde::Serialize;

/// Whether the pharmacy has the requested medicine.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIs,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Availability {
    Available,
    NotAvailable,
}

/// A response document. Read-only on the pharmacy side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PharmacyResponse {
    pub response_id: String,
    pub request_id: String,
    pub pharmacy_id: String,
    pub availability: Availability,
    /// Distance between pharmacy and customer, in kilometers.
    pub distance: f64,
    #[serde(default)]
    pub responded_at: Option<StoreTimestamp>,
    #[serde(default)]
    pub note: Option<String>,
}
