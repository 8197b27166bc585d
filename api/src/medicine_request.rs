//! Customer requests for medicine, as stored in the document store.

use crate::timestamp::StoreTimestamp;
use serde::Deserialize;
use serde::Serialize;

/// How the customer asked for their medicine.
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
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RequestType {
    /// An uploaded image of a prescription.
    Prescription,
    /// A free-text medicine name or description.
    Text,
}

/// A medicine availability request. Read-only on the pharmacy side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicineRequest {
    pub request_id: String,
    pub request_type: RequestType,
    #[serde(default)]
    pub medicine_text: Option<String>,
    pub customer_name: String,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub prescription_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<StoreTimestamp>,
}

impl MedicineRequest {
    /// Medicine text with surrounding whitespace removed, `None` when blank.
    pub fn medicine_text(&self) -> Option<&str> {
        self.medicine_text
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn deserializes_store_document() {
        let json = r#"{
            "requestId": "r1",
            "requestType": "text",
            "medicineText": "Paracetamol 500mg",
            "customerName": "Bob"
        }"#;
        let req: MedicineRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.request_type, RequestType::Text);
        assert_eq!(req.medicine_text(), Some("Paracetamol 500mg"));
        assert!(req.prescription_url.is_none());
        assert!(req.created_at.is_none());
    }

    #[test]
    fn blank_medicine_text_is_absent() {
        let json = r#"{"requestId":"r2","requestType":"text","medicineText":"   ","customerName":"Eve"}"#;
        let req: MedicineRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.medicine_text(), None);
    }

    #[test]
    fn request_type_parses_case_insensitively() {
        assert_eq!(
            RequestType::from_str("Prescription").unwrap(),
            RequestType::Prescription
        );
        assert!(RequestType::from_str("fax").is_err());
        let s: &'static str = RequestType::Text.into();
        assert_eq!(s, "text");
    }
}
