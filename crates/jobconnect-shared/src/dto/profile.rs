use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use jobconnect_core::domain::{NewProfile, Profile, ProfilePatch};

/// `skills`, `experience` and `education` are stored as JSON text. Clients may
/// send either that text or the JSON document itself.
fn json_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileRequest {
    pub user_id: Option<i64>,
    pub headline: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<Value>,
    pub experience: Option<Value>,
    pub education: Option<Value>,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
    pub banner_url: Option<String>,
}

impl CreateProfileRequest {
    /// Build the profile input; `userId` falls back to the caller.
    pub fn into_new(self, caller_id: i64) -> NewProfile {
        NewProfile {
            user_id: self.user_id.unwrap_or(caller_id),
            headline: self.headline,
            bio: self.bio,
            skills: json_text(self.skills),
            experience: json_text(self.experience),
            education: json_text(self.education),
            location: self.location,
            avatar_url: self.avatar_url,
            banner_url: self.banner_url,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub headline: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<Value>,
    pub experience: Option<Value>,
    pub education: Option<Value>,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
    pub banner_url: Option<String>,
}

impl From<UpdateProfileRequest> for ProfilePatch {
    fn from(req: UpdateProfileRequest) -> Self {
        Self {
            headline: req.headline,
            bio: req.bio,
            skills: json_text(req.skills),
            experience: json_text(req.experience),
            education: json_text(req.education),
            location: req.location,
            avatar_url: req.avatar_url,
            banner_url: req.banner_url,
        }
    }
}

/// Body of the single-field endpoints. Only the field named by the route is
/// read; absent or `null` clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileFieldRequest {
    pub headline: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<Value>,
    pub experience: Option<Value>,
    pub education: Option<Value>,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
    pub banner_url: Option<String>,
}

impl ProfileFieldRequest {
    pub fn skills(self) -> Option<String> {
        json_text(self.skills)
    }

    pub fn experience(self) -> Option<String> {
        json_text(self.experience)
    }

    pub fn education(self) -> Option<String> {
        json_text(self.education)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileSearchQuery {
    pub skills: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: i64,
    pub user_id: i64,
    pub headline: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<String>,
    pub experience: Option<String>,
    pub education: Option<String>,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
    pub banner_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id,
            user_id: profile.user_id,
            headline: profile.headline,
            bio: profile.bio,
            skills: profile.skills,
            experience: profile.experience,
            education: profile.education,
            location: profile.location,
            avatar_url: profile.avatar_url,
            banner_url: profile.banner_url,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_documents_are_stored_as_text() {
        let req: CreateProfileRequest = serde_json::from_str(
            r#"{"skills":["rust","sql"],"experience":"[]","education":null}"#,
        )
        .unwrap();
        let profile = req.into_new(5);
        assert_eq!(profile.user_id, 5);
        assert_eq!(profile.skills.as_deref(), Some(r#"["rust","sql"]"#));
        assert_eq!(profile.experience.as_deref(), Some("[]"));
        assert!(profile.education.is_none());
    }

    #[test]
    fn field_request_reads_avatar_url() {
        let req: ProfileFieldRequest =
            serde_json::from_str(r#"{"avatarUrl":"https://cdn.example.com/a.png"}"#).unwrap();
        assert_eq!(
            req.avatar_url.as_deref(),
            Some("https://cdn.example.com/a.png")
        );
    }
}
