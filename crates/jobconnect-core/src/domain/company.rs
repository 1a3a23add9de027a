use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{patch_field, patch_optional};

/// Description given to companies created implicitly by a job posting.
pub const AUTO_CREATED_DESCRIPTION: &str = "Auto-created company";

/// Company entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub industry: Option<String>,
    pub size: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a company.
#[derive(Debug, Clone, Default)]
pub struct NewCompany {
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub industry: Option<String>,
    pub size: Option<String>,
    pub location: Option<String>,
}

impl Company {
    pub fn new(input: NewCompany) -> Self {
        let now = Utc::now();
        Self {
            id: super::UNSAVED_ID,
            name: input.name,
            description: input.description,
            website: input.website,
            logo_url: input.logo_url,
            industry: input.industry,
            size: input.size,
            location: input.location,
            created_at: now,
            updated_at: now,
        }
    }

    /// Company created on the fly when a job names an unknown company.
    pub fn auto_created(name: String) -> Self {
        Self::new(NewCompany {
            name,
            description: Some(AUTO_CREATED_DESCRIPTION.to_string()),
            ..Default::default()
        })
    }

    pub fn apply(&mut self, patch: CompanyPatch) {
        patch_field(&mut self.name, patch.name);
        patch_optional(&mut self.description, patch.description);
        patch_optional(&mut self.website, patch.website);
        patch_optional(&mut self.logo_url, patch.logo_url);
        patch_optional(&mut self.industry, patch.industry);
        patch_optional(&mut self.size, patch.size);
        patch_optional(&mut self.location, patch.location);
        self.updated_at = Utc::now();
    }
}

/// Partial company update.
#[derive(Debug, Clone, Default)]
pub struct CompanyPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub industry: Option<String>,
    pub size: Option<String>,
    pub location: Option<String>,
}
