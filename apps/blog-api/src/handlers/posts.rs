//! Post CRUD handlers. Format translation only; the store owns the rules.

use actix_web::{HttpResponse, web};

use blog_core::domain::{Post, PostChanges, PostDraft, PostId};
use blog_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest, format_timestamp};
use blog_shared::{Field, MessageResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        created_at: format_timestamp(&post.created_at),
        updated_at: format_timestamp(&post.updated_at),
    }
}

/// Absent means "leave as is"; an explicit `null` cannot be stored.
fn change(field: Field<String>, name: &str) -> AppResult<Option<String>> {
    match field {
        Field::Missing => Ok(None),
        Field::Null => Err(AppError::BadRequest(format!("{} must not be null.", name))),
        Field::Present(value) => Ok(Some(value)),
    }
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_all().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let draft = PostDraft {
        title: req.title.into_option(),
        content: req.content.into_option(),
    };

    let post = state.posts.create(draft).await?;
    Ok(HttpResponse::Created().json(to_response(post)))
}

/// PUT /posts/{id}
///
/// An unknown id is 404 whatever the body holds, so the body extraction
/// error is only raised once the post is known to exist.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
    body: Result<web::Json<UpdatePostRequest>, actix_web::Error>,
) -> Result<HttpResponse, actix_web::Error> {
    let id = path.into_inner();
    state.posts.get(id).await.map_err(AppError::from)?;

    let req = body?.into_inner();
    if req.is_empty() {
        return Err(AppError::BadRequest("No data provided.".to_string()).into());
    }

    let changes = PostChanges {
        title: change(req.title, "title")?,
        content: change(req.content, "content")?,
    };

    let post = state.posts.update(id, changes).await.map_err(AppError::from)?;
    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.posts.delete(id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Post deleted successfully.")))
}
