//! Signed-in users and their roles.

use serde::Deserialize;
use serde::Serialize;

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
pub enum UserRole {
    Customer,
    Pharmacy,
    Admin,
}

/// The authenticated user as seen by the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub uid: String,
    pub role: UserRole,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl AuthUser {
    /// Display name, falling back to the user id.
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.uid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_falls_back_to_uid() {
        let mut user = AuthUser {
            uid: "p1".into(),
            role: UserRole::Pharmacy,
            display_name: None,
        };
        assert_eq!(user.name(), "p1");
        user.display_name = Some("Apollo Pharmacy".into());
        assert_eq!(user.name(), "Apollo Pharmacy");
    }

    #[test]
    fn unknown_role_is_rejected() {
        let json = r#"{"uid":"u1","role":"courier"}"#;
        assert!(serde_json::from_str::<AuthUser>(json).is_err());
    }
}
