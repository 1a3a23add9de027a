//! Profile endpoints.

use actix_web::{HttpResponse, web};

use jobconnect_core::domain::{Profile, ProfileField};
use jobconnect_shared::dto::profile::{
    CreateProfileRequest, ProfileFieldRequest, ProfileResponse, ProfileSearchQuery,
    UpdateProfileRequest,
};
use jobconnect_shared::{ApiResponse, PageResponse};
use jobconnect_web::{AppResult, PageQuery, ViewerId};

use crate::state::AppState;

fn profile_list(profiles: Vec<Profile>) -> Vec<ProfileResponse> {
    profiles.into_iter().map(Into::into).collect()
}

/// POST /api/profile (also /api/profile/addprofile)
pub async fn create_profile(
    state: web::Data<AppState>,
    viewer: ViewerId,
    body: web::Json<CreateProfileRequest>,
) -> AppResult<HttpResponse> {
    let profile = state
        .profiles
        .create_profile(body.into_inner().into_new(viewer.0))
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        ProfileResponse::from(profile),
        "Profile created successfully",
    )))
}

/// GET /api/profile?page=&size=
pub async fn profiles(
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let page = state.profiles.profiles(query.into_inner().into()).await?;
    let body: PageResponse<ProfileResponse> = page.into();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(body)))
}

/// GET /api/profile/search?skills=&location=
pub async fn search(
    state: web::Data<AppState>,
    query: web::Query<ProfileSearchQuery>,
) -> AppResult<HttpResponse> {
    let profiles = state
        .profiles
        .search_profiles(query.skills.as_deref(), query.location.as_deref())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(profile_list(profiles))))
}

/// GET /api/profile/location/{location}
pub async fn by_location(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let profiles = state.profiles.profiles_by_location(&path).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(profile_list(profiles))))
}

/// GET /api/profile/skill/{skill}
pub async fn by_skill(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let profiles = state.profiles.profiles_by_skill(&path).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(profile_list(profiles))))
}

/// GET /api/profile/user/{user_id}
pub async fn by_user(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let profile = state.profiles.profile_by_user(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(ProfileResponse::from(profile))))
}

/// GET /api/profile/{id}
pub async fn profile(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let profile = state.profiles.profile(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(ProfileResponse::from(profile))))
}

/// PUT /api/profile/{id}
pub async fn update_profile(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<UpdateProfileRequest>,
) -> AppResult<HttpResponse> {
    let profile = state
        .profiles
        .update_profile(path.into_inner(), body.into_inner().into())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        ProfileResponse::from(profile),
        "Profile updated successfully",
    )))
}

/// DELETE /api/profile/{id}
pub async fn delete_profile(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    state.profiles.delete_profile(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

async fn update_field(state: &AppState, id: i64, field: ProfileField) -> AppResult<HttpResponse> {
    let name = field.name();
    let profile = state.profiles.update_field(id, field).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        ProfileResponse::from(profile),
        format!("Profile {name} updated"),
    )))
}

/// PUT /api/profile/me/skills/{id}
pub async fn update_skills(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<ProfileFieldRequest>,
) -> AppResult<HttpResponse> {
    let field = ProfileField::Skills(body.into_inner().skills());
    update_field(&state, path.into_inner(), field).await
}

/// PUT /api/profile/me/experience/{id}
pub async fn update_experience(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<ProfileFieldRequest>,
) -> AppResult<HttpResponse> {
    let field = ProfileField::Experience(body.into_inner().experience());
    update_field(&state, path.into_inner(), field).await
}

/// PUT /api/profile/me/education/{id}
pub async fn update_education(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<ProfileFieldRequest>,
) -> AppResult<HttpResponse> {
    let field = ProfileField::Education(body.into_inner().education());
    update_field(&state, path.into_inner(), field).await
}

/// PATCH /api/profile/{id}/headline
pub async fn update_headline(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<ProfileFieldRequest>,
) -> AppResult<HttpResponse> {
    let field = ProfileField::Headline(body.into_inner().headline);
    update_field(&state, path.into_inner(), field).await
}

/// PATCH /api/profile/{id}/bio
pub async fn update_bio(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<ProfileFieldRequest>,
) -> AppResult<HttpResponse> {
    let field = ProfileField::Bio(body.into_inner().bio);
    update_field(&state, path.into_inner(), field).await
}

/// PATCH /api/profile/{id}/location
pub async fn update_location(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<ProfileFieldRequest>,
) -> AppResult<HttpResponse> {
    let field = ProfileField::Location(body.into_inner().location);
    update_field(&state, path.into_inner(), field).await
}

/// PATCH /api/profile/{id}/avatar
pub async fn update_avatar(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<ProfileFieldRequest>,
) -> AppResult<HttpResponse> {
    let field = ProfileField::Avatar(body.into_inner().avatar_url);
    update_field(&state, path.into_inner(), field).await
}

/// PATCH /api/profile/{id}/banner
pub async fn update_banner(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<ProfileFieldRequest>,
) -> AppResult<HttpResponse> {
    let field = ProfileField::Banner(body.into_inner().banner_url);
    update_field(&state, path.into_inner(), field).await
}
