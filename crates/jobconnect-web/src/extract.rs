//! Request extractors shared by the services.

use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpRequest, dev::Payload};
use serde::Deserialize;

use jobconnect_core::pagination::{DEFAULT_PAGE_SIZE, PageRequest};

use crate::error::AppError;

/// Header carrying the id of the calling user.
pub const USER_ID_HEADER: &str = "X-User-Id";

/// Caller used when no `X-User-Id` header is sent.
pub const DEFAULT_VIEWER_ID: i64 = 1;

/// The id of the calling user, read from `X-User-Id`.
///
/// There is no authentication in front of these services; the header is
/// trusted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerId(pub i64);

impl FromRequest for ViewerId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(value) = req.headers().get(USER_ID_HEADER) else {
            return ready(Ok(ViewerId(DEFAULT_VIEWER_ID)));
        };

        let parsed = value
            .to_str()
            .ok()
            .and_then(|s| s.trim().parse::<i64>().ok());

        ready(match parsed {
            Some(id) => Ok(ViewerId(id)),
            None => Err(AppError::BadRequest(format!(
                "{USER_ID_HEADER} header must be an integer"
            ))),
        })
    }
}

/// `?page=&size=` query parameters. Pages are zero-based.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u64>,
    pub size: Option<u64>,
}

impl From<PageQuery> for PageRequest {
    fn from(query: PageQuery) -> Self {
        PageRequest::new(
            query.page.unwrap_or(0),
            query.size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_rt::test]
    async fn viewer_defaults_when_header_missing() {
        let req = TestRequest::default().to_http_request();
        let viewer = ViewerId::extract(&req).await.unwrap();
        assert_eq!(viewer, ViewerId(DEFAULT_VIEWER_ID));
    }

    #[actix_rt::test]
    async fn viewer_reads_header() {
        let req = TestRequest::default()
            .insert_header((USER_ID_HEADER, "42"))
            .to_http_request();
        assert_eq!(ViewerId::extract(&req).await.unwrap(), ViewerId(42));
    }

    #[actix_rt::test]
    async fn garbage_header_is_rejected() {
        let req = TestRequest::default()
            .insert_header((USER_ID_HEADER, "abc"))
            .to_http_request();
        assert!(matches!(
            ViewerId::extract(&req).await,
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn page_query_defaults_and_clamps() {
        let request: PageRequest = PageQuery::default().into();
        assert_eq!(request, PageRequest::new(0, DEFAULT_PAGE_SIZE));

        let request: PageRequest = PageQuery {
            page: Some(3),
            size: Some(1000),
        }
        .into();
        assert_eq!(request.page, 3);
        assert_eq!(request.size, 100);
    }
}
