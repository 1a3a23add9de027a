//! Application state - shared across all handlers.

use std::sync::Arc;

use jobconnect_core::services::FeedService;
use jobconnect_infra::Repositories;

#[derive(Clone)]
pub struct AppState {
    pub feed: Arc<FeedService>,
}

impl AppState {
    pub fn new(repos: &Repositories) -> Self {
        Self {
            feed: Arc::new(FeedService::new(
                repos.posts.clone(),
                repos.comments.clone(),
                repos.likes.clone(),
            )),
        }
    }
}
