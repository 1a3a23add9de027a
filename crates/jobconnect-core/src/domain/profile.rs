use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::patch_optional;

/// Profile entity - the public résumé of a user; one per user.
///
/// `skills`, `experience` and `education` hold JSON documents as text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
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

/// Input for creating a profile.
#[derive(Debug, Clone, Default)]
pub struct NewProfile {
    pub user_id: i64,
    pub headline: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<String>,
    pub experience: Option<String>,
    pub education: Option<String>,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
    pub banner_url: Option<String>,
}

impl Profile {
    pub fn new(input: NewProfile) -> Self {
        let now = Utc::now();
        Self {
            id: super::UNSAVED_ID,
            user_id: input.user_id,
            headline: input.headline,
            bio: input.bio,
            skills: input.skills,
            experience: input.experience,
            education: input.education,
            location: input.location,
            avatar_url: input.avatar_url,
            banner_url: input.banner_url,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update; fields left `None` keep their value.
    pub fn apply(&mut self, patch: ProfilePatch) {
        patch_optional(&mut self.headline, patch.headline);
        patch_optional(&mut self.bio, patch.bio);
        patch_optional(&mut self.skills, patch.skills);
        patch_optional(&mut self.experience, patch.experience);
        patch_optional(&mut self.education, patch.education);
        patch_optional(&mut self.location, patch.location);
        patch_optional(&mut self.avatar_url, patch.avatar_url);
        patch_optional(&mut self.banner_url, patch.banner_url);
        self.updated_at = Utc::now();
    }

    /// Overwrite exactly one field. Unlike [`Profile::apply`], `None` clears it.
    pub fn set_field(&mut self, field: ProfileField) {
        match field {
            ProfileField::Headline(v) => self.headline = v,
            ProfileField::Bio(v) => self.bio = v,
            ProfileField::Skills(v) => self.skills = v,
            ProfileField::Experience(v) => self.experience = v,
            ProfileField::Education(v) => self.education = v,
            ProfileField::Location(v) => self.location = v,
            ProfileField::Avatar(v) => self.avatar_url = v,
            ProfileField::Banner(v) => self.banner_url = v,
        }
        self.updated_at = Utc::now();
    }
}

/// Partial profile update.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub headline: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<String>,
    pub experience: Option<String>,
    pub education: Option<String>,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
    pub banner_url: Option<String>,
}

/// A single profile attribute and its new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileField {
    Headline(Option<String>),
    Bio(Option<String>),
    Skills(Option<String>),
    Experience(Option<String>),
    Education(Option<String>),
    Location(Option<String>),
    Avatar(Option<String>),
    Banner(Option<String>),
}

impl ProfileField {
    pub fn name(&self) -> &'static str {
        match self {
            ProfileField::Headline(_) => "headline",
            ProfileField::Bio(_) => "bio",
            ProfileField::Skills(_) => "skills",
            ProfileField::Experience(_) => "experience",
            ProfileField::Education(_) => "education",
            ProfileField::Location(_) => "location",
            ProfileField::Avatar(_) => "avatar",
            ProfileField::Banner(_) => "banner",
        }
    }
}
