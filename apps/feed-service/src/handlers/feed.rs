//! Feed endpoints.

use actix_web::{HttpResponse, web};

use jobconnect_shared::dto::feed::{
    CommentRequest, CommentResponse, CreatePostRequest, LikeResponse, PostResponse,
};
use jobconnect_shared::{ApiResponse, PageResponse};
use jobconnect_web::{AppResult, PageQuery, ViewerId};

use crate::state::AppState;

/// GET /api/feed
pub async fn feed(
    state: web::Data<AppState>,
    viewer: ViewerId,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let page = state.feed.feed(viewer.0, query.into_inner().into()).await?;
    let body: PageResponse<PostResponse> = page.into();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(body)))
}

/// GET /api/feed/user/{user_id}
pub async fn user_posts(
    state: web::Data<AppState>,
    viewer: ViewerId,
    path: web::Path<i64>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let page = state
        .feed
        .user_posts(path.into_inner(), viewer.0, query.into_inner().into())
        .await?;
    let body: PageResponse<PostResponse> = page.into();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(body)))
}

/// POST /api/feed/user/{user_id}
pub async fn create_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let view = state
        .feed
        .create_post(path.into_inner(), body.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        PostResponse::from(view),
        "Post created successfully",
    )))
}

/// GET /api/feed/post/{post_id}
pub async fn post(
    state: web::Data<AppState>,
    viewer: ViewerId,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let view = state.feed.post(path.into_inner(), viewer.0).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(PostResponse::from(view))))
}

/// DELETE /api/feed/post/{post_id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    state.feed.delete_post(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// POST /api/feed/post/{post_id}/like
pub async fn toggle_like(
    state: web::Data<AppState>,
    viewer: ViewerId,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let outcome = state.feed.toggle_like(path.into_inner(), viewer.0).await?;
    let message = if outcome.liked {
        "Post liked"
    } else {
        "Post unliked"
    };
    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        LikeResponse::from(outcome),
        message,
    )))
}

/// POST /api/feed/post/{post_id}/comment
pub async fn add_comment(
    state: web::Data<AppState>,
    viewer: ViewerId,
    path: web::Path<i64>,
    body: web::Json<CommentRequest>,
) -> AppResult<HttpResponse> {
    let view = state
        .feed
        .add_comment(path.into_inner(), viewer.0, body.into_inner().content)
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        CommentResponse::from(view),
        "Comment added successfully",
    )))
}

/// GET /api/feed/post/{post_id}/comments
pub async fn comments(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let comments: Vec<CommentResponse> = state
        .feed
        .comments(path.into_inner())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(comments)))
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};
    use serde_json::{Value, json};

    use jobconnect_core::domain::{Role, User};
    use jobconnect_infra::{InMemoryDatabase, Repositories};
    use jobconnect_web::configure_common;

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    async fn seeded_state() -> AppState {
        let db = InMemoryDatabase::new();
        db.insert_user(User::new(
            "ada@example.com".into(),
            Some("Ada".into()),
            Role::Candidate,
        ))
        .await
        .unwrap();
        AppState::new(&Repositories::in_memory(db))
    }

    macro_rules! app {
        ($state:expr) => {{
            let state = $state;
            test::init_service(
                App::new()
                    .configure(configure_common)
                    .configure(move |cfg| configure_routes(cfg, state)),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn create_then_read_feed() {
        let app = app!(seeded_state().await);

        let req = test::TestRequest::post()
            .uri("/api/feed/user/1")
            .set_json(json!({"content": "Open to work", "imageUrl": null}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(res).await;
        assert_eq!(created["success"], true);
        assert_eq!(created["data"]["user"]["name"], "Ada");

        let req = test::TestRequest::get()
            .uri("/api/feed?page=0&size=5")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["totalElements"], 1);
        assert_eq!(body["data"]["size"], 5);
        assert_eq!(body["data"]["content"][0]["content"], "Open to work");
        assert_eq!(body["data"]["content"][0]["isLiked"], false);
    }

    #[actix_web::test]
    async fn blank_post_is_bad_request() {
        let app = app!(seeded_state().await);

        let req = test::TestRequest::post()
            .uri("/api/feed/user/1")
            .set_json(json!({"content": "  "}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn like_toggles_for_header_user() {
        let app = app!(seeded_state().await);

        let req = test::TestRequest::post()
            .uri("/api/feed/user/1")
            .set_json(json!({"content": "hello"}))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let post_id = created["data"]["postId"].as_i64().unwrap();

        let like = || {
            test::TestRequest::post()
                .uri(&format!("/api/feed/post/{post_id}/like"))
                .insert_header(("X-User-Id", "7"))
                .to_request()
        };

        let body: Value = test::call_and_read_body_json(&app, like()).await;
        assert_eq!(body["data"]["liked"], true);
        assert_eq!(body["data"]["likesCount"], 1);

        let body: Value = test::call_and_read_body_json(&app, like()).await;
        assert_eq!(body["data"]["liked"], false);
        assert_eq!(body["data"]["likesCount"], 0);
    }

    #[actix_web::test]
    async fn bad_user_header_is_rejected() {
        let app = app!(seeded_state().await);

        let req = test::TestRequest::get()
            .uri("/api/feed")
            .insert_header(("X-User-Id", "not-a-number"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn comment_flow_and_missing_post() {
        let app = app!(seeded_state().await);

        let req = test::TestRequest::post()
            .uri("/api/feed/user/1")
            .set_json(json!({"content": "hello"}))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let post_id = created["data"]["postId"].as_i64().unwrap();

        let req = test::TestRequest::post()
            .uri(&format!("/api/feed/post/{post_id}/comment"))
            .set_json(json!({"content": "Congrats!"}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);

        let req = test::TestRequest::get()
            .uri(&format!("/api/feed/post/{post_id}/comments"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"][0]["userName"], "Ada");

        let req = test::TestRequest::post()
            .uri("/api/feed/post/999/comment")
            .set_json(json!({"content": "Anyone?"}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn delete_answers_no_content_then_not_found() {
        let app = app!(seeded_state().await);

        let req = test::TestRequest::post()
            .uri("/api/feed/user/1")
            .set_json(json!({"content": "temporary"}))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let post_id = created["data"]["postId"].as_i64().unwrap();

        let delete = || {
            test::TestRequest::delete()
                .uri(&format!("/api/feed/post/{post_id}"))
                .to_request()
        };
        assert_eq!(
            test::call_service(&app, delete()).await.status(),
            StatusCode::NO_CONTENT
        );
        assert_eq!(
            test::call_service(&app, delete()).await.status(),
            StatusCode::NOT_FOUND
        );
    }
}
