use std::sync::Arc;

use crate::domain::{NewProfile, Profile, ProfileField, ProfilePatch};
use crate::error::{DomainError, DomainResult, RepoError};
use crate::pagination::{Page, PageRequest};
use crate::ports::ProfileRepository;

pub struct ProfileService {
    profiles: Arc<dyn ProfileRepository>,
}

impl ProfileService {
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }

    /// Create the profile of a user. Each user has at most one.
    pub async fn create_profile(&self, input: NewProfile) -> DomainResult<Profile> {
        if self.profiles.find_by_user_id(input.user_id).await?.is_some() {
            return Err(already_exists());
        }
        let saved = match self.profiles.save(Profile::new(input)).await {
            Ok(saved) => saved,
            Err(RepoError::Constraint(_)) => return Err(already_exists()),
            Err(e) => return Err(e.into()),
        };
        tracing::info!(profile_id = saved.id, user_id = saved.user_id, "Profile created");
        Ok(saved)
    }

    pub async fn profile(&self, id: i64) -> DomainResult<Profile> {
        self.profiles
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Profile", id))
    }

    pub async fn profile_by_user(&self, user_id: i64) -> DomainResult<Profile> {
        self.profiles
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| DomainError::NotFoundBy {
                entity_type: "Profile",
                field: "userID",
                value: user_id.to_string(),
            })
    }

    pub async fn profiles(&self, page: PageRequest) -> DomainResult<Page<Profile>> {
        Ok(self.profiles.find_page(page).await?)
    }

    pub async fn update_profile(&self, id: i64, patch: ProfilePatch) -> DomainResult<Profile> {
        let mut profile = self.profile(id).await?;
        profile.apply(patch);
        Ok(self.profiles.save(profile).await?)
    }

    /// Overwrite a single attribute of the profile.
    pub async fn update_field(&self, id: i64, field: ProfileField) -> DomainResult<Profile> {
        let mut profile = self.profile(id).await?;
        tracing::debug!(profile_id = id, field = field.name(), "Updating profile field");
        profile.set_field(field);
        Ok(self.profiles.save(profile).await?)
    }

    pub async fn delete_profile(&self, id: i64) -> DomainResult<()> {
        if !self.profiles.exists(id).await? {
            return Err(DomainError::not_found("Profile", id));
        }
        self.profiles.delete(id).await?;
        tracing::info!(profile_id = id, "Profile deleted");
        Ok(())
    }

    /// Search by skill and/or location. With neither, every profile is returned.
    pub async fn search_profiles(
        &self,
        skill: Option<&str>,
        location: Option<&str>,
    ) -> DomainResult<Vec<Profile>> {
        let skill = skill.map(str::trim).filter(|s| !s.is_empty());
        let location = location.map(str::trim).filter(|s| !s.is_empty());
        Ok(self.profiles.search(skill, location).await?)
    }

    pub async fn profiles_by_location(&self, location: &str) -> DomainResult<Vec<Profile>> {
        self.search_profiles(None, Some(location)).await
    }

    pub async fn profiles_by_skill(&self, skill: &str) -> DomainResult<Vec<Profile>> {
        self.search_profiles(Some(skill), None).await
    }
}

fn already_exists() -> DomainError {
    DomainError::InvalidState("Profile already exists for this user".to_string())
}
