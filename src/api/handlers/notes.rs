//! Note handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use crate::api::dto::requests::{CreateNoteRequest, NoteListQuery, UpdateNoteRequest};
use crate::api::dto::responses::{ApiResponse, NoteResponse};
use crate::api::dto::transformers::note_to_response;
use crate::api::middleware::{ApiFailure, CurrentUser};
use crate::application::{NewNote, NoteChanges, NoteService};
use crate::domain::{NoteId, TagId};
use crate::infrastructure::{AppDependencies, NoteFilter};

fn service(dependencies: &AppDependencies) -> NoteService {
    NoteService::new(dependencies.notes().clone(), dependencies.tags().clone())
}

/// GET /notes - List the current user's notes, pinned first.
pub async fn list_notes(
    State(dependencies): State<AppDependencies>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<NoteListQuery>,
) -> Result<Json<ApiResponse<Vec<NoteResponse>>>, ApiFailure> {
    let filter = NoteFilter {
        search: query.search.filter(|search| !search.is_empty()),
    };
    let notes = service(&dependencies).list(&user, &filter).await?;

    Ok(Json(ApiResponse::success(
        notes.iter().map(note_to_response).collect(),
    )))
}

/// GET /notes/{id} - Owner-scoped lookup.
pub async fn get_note(
    State(dependencies): State<AppDependencies>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<NoteResponse>>, ApiFailure> {
    let note = service(&dependencies).get(&user, NoteId::from(id)).await?;

    Ok(Json(ApiResponse::success(note_to_response(&note))))
}

/// POST /notes - Create a note.
pub async fn create_note(
    State(dependencies): State<AppDependencies>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<CreateNoteRequest>,
) -> Result<Json<ApiResponse<NoteResponse>>, ApiFailure> {
    let note = service(&dependencies)
        .create(
            &user,
            NewNote {
                title: request.title,
                content: request.content,
                tag_ids: request.tag_ids.into_iter().map(TagId::from).collect(),
            },
        )
        .await?;

    Ok(Json(ApiResponse::success_with_message(
        "Note created successfully",
        note_to_response(&note),
    )))
}

/// PUT /notes/{id} - Partial update; absent fields keep their stored value.
pub async fn update_note(
    State(dependencies): State<AppDependencies>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateNoteRequest>,
) -> Result<Json<ApiResponse<NoteResponse>>, ApiFailure> {
    let changes = NoteChanges {
        title: request.title,
        content: request.content,
        is_pinned: request.is_pinned,
        tag_ids: request
            .tag_ids
            .map(|ids| ids.into_iter().map(TagId::from).collect()),
    };
    let note = service(&dependencies)
        .update(&user, NoteId::from(id), changes)
        .await?;

    Ok(Json(ApiResponse::success_with_message(
        "Note updated successfully",
        note_to_response(&note),
    )))
}

/// PATCH /notes/{id}/pin - Flip the pinned flag.
pub async fn toggle_note_pin(
    State(dependencies): State<AppDependencies>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<NoteResponse>>, ApiFailure> {
    let note = service(&dependencies)
        .toggle_pinned(&user, NoteId::from(id))
        .await?;

    Ok(Json(ApiResponse::success_with_message(
        "Note pin status updated",
        note_to_response(&note),
    )))
}

/// DELETE /notes/{id} - Hard delete.
pub async fn delete_note(
    State(dependencies): State<AppDependencies>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiFailure> {
    service(&dependencies)
        .delete(&user, NoteId::from(id))
        .await?;

    Ok(Json(ApiResponse::message_only("Note deleted successfully")))
}
