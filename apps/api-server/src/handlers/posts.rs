//! Post handlers.
//!
//! Each handler hands the request body to one repository operation and
//! answers with its result, or with a bare 500 on any failure.

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, web};
use futures::future::LocalBoxFuture;

use quill_core::domain::PostFields;
use quill_shared::PostSummaryResponse;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Filter fields for the read endpoints.
///
/// Taken from the JSON body when there is one, otherwise from the query
/// string, so `GET /posts?title=t1` and a GET carrying `{"title":"t1"}` are
/// equivalent.
pub struct PostFilter(pub PostFields);

impl FromRequest for PostFilter {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let query = req.query_string().to_owned();
        let body = web::Bytes::from_request(req, payload);

        Box::pin(async move {
            let body = body.await.map_err(|e| AppError::Payload(e.to_string()))?;

            let fields = if body.iter().all(u8::is_ascii_whitespace) {
                web::Query::<PostFields>::from_query(&query)
                    .map_err(|e| AppError::Payload(e.to_string()))?
                    .into_inner()
            } else {
                serde_json::from_slice(&body).map_err(|e| AppError::Payload(e.to_string()))?
            };

            Ok(PostFilter(fields))
        })
    }
}

/// POST /posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<PostFields>,
) -> AppResult<HttpResponse> {
    let post = state.posts.create_post(body.into_inner()).await?;
    tracing::info!(post_id = %post.id, "Post created");

    Ok(HttpResponse::Ok().json(post))
}

/// PUT /posts
pub async fn update(
    state: web::Data<AppState>,
    body: web::Json<PostFields>,
) -> AppResult<HttpResponse> {
    let post = state.posts.update_post(body.into_inner()).await?;
    tracing::info!(post_id = %post.id, "Post updated");

    Ok(HttpResponse::Ok().json(post))
}

/// GET /posts/find
///
/// Answers with the found title and fixed placeholder `content`/`author`,
/// see [`PostSummaryResponse`]. A filter matching nothing is a failure.
pub async fn find_post(
    state: web::Data<AppState>,
    PostFilter(fields): PostFilter,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .find_post(fields)
        .await?
        .ok_or(AppError::NoMatch)?;

    Ok(HttpResponse::Ok().json(PostSummaryResponse::with_title(post.title)))
}

/// GET /posts
pub async fn get_all_posts(
    state: web::Data<AppState>,
    PostFilter(fields): PostFilter,
) -> AppResult<HttpResponse> {
    let posts = state.posts.get_all_posts(fields).await?;

    Ok(HttpResponse::Ok().json(posts))
}
