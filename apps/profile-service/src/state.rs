use std::sync::Arc;

use jobconnect_core::services::ProfileService;
use jobconnect_infra::Repositories;

#[derive(Clone)]
pub struct AppState {
    pub profiles: Arc<ProfileService>,
}

impl AppState {
    pub fn new(repos: &Repositories) -> Self {
        Self {
            profiles: Arc::new(ProfileService::new(repos.profiles.clone())),
        }
    }
}
