//! HTTP handlers and route configuration.

mod profile;

use actix_web::web;

use crate::state::AppState;

/// Configure all profile routes under `/api/profile`.
pub fn configure_routes(cfg: &mut web::ServiceConfig, state: AppState) {
    cfg.app_data(web::Data::new(state)).service(
        web::scope("/api/profile")
            .route("", web::post().to(profile::create_profile))
            .route("", web::get().to(profile::profiles))
            .route("/", web::post().to(profile::create_profile))
            .route("/", web::get().to(profile::profiles))
            .route("/addprofile", web::post().to(profile::create_profile))
            .route("/search", web::get().to(profile::search))
            .route("/location/{location}", web::get().to(profile::by_location))
            .route("/skill/{skill}", web::get().to(profile::by_skill))
            .route("/user/{user_id}", web::get().to(profile::by_user))
            .route("/me/skills/{id}", web::put().to(profile::update_skills))
            .route("/me/experience/{id}", web::put().to(profile::update_experience))
            .route("/me/education/{id}", web::put().to(profile::update_education))
            .route("/{id}", web::get().to(profile::profile))
            .route("/{id}", web::put().to(profile::update_profile))
            .route("/{id}", web::delete().to(profile::delete_profile))
            .route("/{id}/headline", web::patch().to(profile::update_headline))
            .route("/{id}/bio", web::patch().to(profile::update_bio))
            .route("/{id}/location", web::patch().to(profile::update_location))
            .route("/{id}/avatar", web::patch().to(profile::update_avatar))
            .route("/{id}/banner", web::patch().to(profile::update_banner)),
    );
}
