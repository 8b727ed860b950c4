use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public profile of an account, as returned by `GET /user/profile`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Backend identifier of the account.
    pub id: i64,

    /// Display handle.
    pub username: String,

    /// Contact address.
    pub email: String,

    /// Whether other travellers can find this profile.
    #[serde(default)]
    pub public: bool,

    /// When the account was created.
    pub created_at: DateTime<Utc>,

    /// Avatar location, empty when none was uploaded.
    #[serde(default)]
    pub image_src: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_profile_deserializes_snake_case() {
        let json = r#"{
            "id": 7,
            "username": "margaux",
            "email": "margaux@example.com",
            "public": true,
            "created_at": "2024-11-02T10:15:00Z",
            "image_src": "/avatars/7.png"
        }"#;

        let profile: UserProfile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.id, 7);
        assert_eq!(profile.username, "margaux");
        assert!(profile.public);
        assert_eq!(
            profile.created_at,
            Utc.with_ymd_and_hms(2024, 11, 2, 10, 15, 0).unwrap()
        );
        assert_eq!(profile.image_src, "/avatars/7.png");
    }

    #[test]
    fn test_profile_optional_fields_default() {
        let json = r#"{
            "id": 1,
            "username": "theo",
            "email": "theo@example.com",
            "created_at": "2024-01-01T00:00:00Z"
        }"#;

        let profile: UserProfile = serde_json::from_str(json).unwrap();

        assert!(!profile.public);
        assert!(profile.image_src.is_empty());
    }
}
