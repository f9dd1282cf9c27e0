use serde::{Deserialize, Serialize};

/// The signed in user as returned by the application's API.
///
/// Persisted as JSON under [SessionKey::User](crate::keys::SessionKey::User). Optional
/// fields are omitted from the JSON when unset and unknown fields are ignored when
/// reading, so only the fields below survive a round-trip through this type.
#[derive(uniffi::Record, Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// RFC 3339 timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// RFC 3339 timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl User {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn minimal_user_encodes_without_optional_fields() {
        let json = serde_json::to_string(&User::new(1, "Ann")).unwrap();
        assert_eq!(json, r#"{"id":1,"name":"Ann"}"#);
    }

    #[test]
    fn decodes_api_payload() {
        let json = r#"{
            "id": 7,
            "name": "Ann Lee",
            "username": "ann",
            "email": "ann@example.com",
            "createdAt": "2024-03-01T10:00:00Z",
            "updatedAt": "2024-03-02T10:00:00Z",
            "role": "admin",
            "avatar": "ignored.png"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(
            user,
            User {
                id: 7,
                name: "Ann Lee".into(),
                username: Some("ann".into()),
                email: Some("ann@example.com".into()),
                role: Some("admin".into()),
                created_at: Some("2024-03-01T10:00:00Z".into()),
                updated_at: Some("2024-03-02T10:00:00Z".into()),
            }
        );
    }

    #[test]
    fn wrong_shape_is_rejected() {
        assert!(serde_json::from_str::<User>(r#"{"name":"Ann"}"#).is_err());
        assert!(serde_json::from_str::<User>(r#""Ann""#).is_err());
    }
}
