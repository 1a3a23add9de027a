//! HTTP handlers and route configuration.

mod feed;

use actix_web::web;

use crate::state::AppState;

/// Configure all feed routes under `/api/feed`.
pub fn configure_routes(cfg: &mut web::ServiceConfig, state: AppState) {
    cfg.app_data(web::Data::new(state)).service(
        web::scope("/api/feed")
            .route("", web::get().to(feed::feed))
            .route("/", web::get().to(feed::feed))
            .route("/user/{user_id}", web::get().to(feed::user_posts))
            .route("/user/{user_id}", web::post().to(feed::create_post))
            .route("/post/{post_id}", web::get().to(feed::post))
            .route("/post/{post_id}", web::delete().to(feed::delete_post))
            .route("/post/{post_id}/like", web::post().to(feed::toggle_like))
            .route("/post/{post_id}/comment", web::post().to(feed::add_comment))
            .route("/post/{post_id}/comments", web::get().to(feed::comments)),
    );
}
