//! Tag handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::api::dto::requests::{CreateTagRequest, UpdateTagRequest};
use crate::api::dto::responses::{ApiResponse, TagResponse};
use crate::api::dto::transformers::tag_to_response;
use crate::api::middleware::{ApiFailure, CurrentUser};
use crate::application::{NewTag, TagChanges, TagService};
use crate::domain::TagId;
use crate::infrastructure::AppDependencies;

fn service(dependencies: &AppDependencies) -> TagService {
    TagService::new(dependencies.tags().clone())
}

/// GET /tags - List the current user's tags.
pub async fn list_tags(
    State(dependencies): State<AppDependencies>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<ApiResponse<Vec<TagResponse>>>, ApiFailure> {
    let tags = service(&dependencies).list(&user).await?;

    Ok(Json(ApiResponse::success(
        tags.iter().map(tag_to_response).collect(),
    )))
}

/// GET /tags/{id} - Owner-scoped lookup.
pub async fn get_tag(
    State(dependencies): State<AppDependencies>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<TagResponse>>, ApiFailure> {
    let tag = service(&dependencies).get(&user, TagId::from(id)).await?;

    Ok(Json(ApiResponse::success(tag_to_response(&tag))))
}

/// POST /tags - Create a tag; the name must be free under this user.
pub async fn create_tag(
    State(dependencies): State<AppDependencies>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<CreateTagRequest>,
) -> Result<Json<ApiResponse<TagResponse>>, ApiFailure> {
    let tag = service(&dependencies)
        .create(
            &user,
            NewTag {
                name: request.name,
                color: request.color,
            },
        )
        .await?;

    Ok(Json(ApiResponse::success_with_message(
        "Tag created successfully",
        tag_to_response(&tag),
    )))
}

/// PUT /tags/{id} - Partial update; absent fields keep their stored value.
pub async fn update_tag(
    State(dependencies): State<AppDependencies>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTagRequest>,
) -> Result<Json<ApiResponse<TagResponse>>, ApiFailure> {
    let tag = service(&dependencies)
        .update(
            &user,
            TagId::from(id),
            TagChanges {
                name: request.name,
                color: request.color,
            },
        )
        .await?;

    Ok(Json(ApiResponse::success_with_message(
        "Tag updated successfully",
        tag_to_response(&tag),
    )))
}

/// DELETE /tags/{id} - Hard delete; detaches the tag from tasks and notes.
pub async fn delete_tag(
    State(dependencies): State<AppDependencies>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiFailure> {
    service(&dependencies).delete(&user, TagId::from(id)).await?;

    Ok(Json(ApiResponse::message_only("Tag deleted successfully")))
}
