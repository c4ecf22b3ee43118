//! Task handlers.
//!
//! Every handler resolves the current user through the [`CurrentUser`]
//! extractor, so a request that reached this far without an identity fails
//! with the unauthenticated envelope before touching a service.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use crate::api::dto::requests::{CreateTaskRequest, TaskListQuery, UpdateTaskRequest};
use crate::api::dto::responses::{ApiResponse, TaskResponse};
use crate::api::dto::transformers::task_to_response;
use crate::api::middleware::{ApiFailure, CurrentUser};
use crate::application::{NewTask, TaskChanges, TaskService};
use crate::domain::{TagId, TaskId};
use crate::infrastructure::{AppDependencies, TaskFilter};

fn service(dependencies: &AppDependencies) -> TaskService {
    TaskService::new(dependencies.tasks().clone(), dependencies.tags().clone())
}

/// Maps the query string to a store filter: a non-empty search wins over
/// the status filter, and any status other than `completed` means active.
fn filter_from_query(query: &TaskListQuery) -> TaskFilter {
    let search = query
        .search
        .as_deref()
        .filter(|search| !search.is_empty())
        .map(ToString::to_string);
    let completed = if search.is_some() {
        None
    } else {
        query.status.as_deref().map(|status| status == "completed")
    };
    TaskFilter { completed, search }
}

/// GET /tasks - List the current user's tasks.
pub async fn list_tasks(
    State(dependencies): State<AppDependencies>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<TaskListQuery>,
) -> Result<Json<ApiResponse<Vec<TaskResponse>>>, ApiFailure> {
    let tasks = service(&dependencies)
        .list(&user, &filter_from_query(&query))
        .await?;

    Ok(Json(ApiResponse::success(
        tasks.iter().map(task_to_response).collect(),
    )))
}

/// GET /tasks/{id} - Owner-scoped lookup.
pub async fn get_task(
    State(dependencies): State<AppDependencies>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<TaskResponse>>, ApiFailure> {
    let task = service(&dependencies).get(&user, TaskId::from(id)).await?;

    Ok(Json(ApiResponse::success(task_to_response(&task))))
}

/// POST /tasks - Create a task.
pub async fn create_task(
    State(dependencies): State<AppDependencies>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<CreateTaskRequest>,
) -> Result<Json<ApiResponse<TaskResponse>>, ApiFailure> {
    let task = service(&dependencies)
        .create(
            &user,
            NewTask {
                title: request.title,
                description: request.description,
                priority: request.priority,
                due_date: request.due_date,
                tag_ids: request.tag_ids.into_iter().map(TagId::from).collect(),
            },
        )
        .await?;

    Ok(Json(ApiResponse::success_with_message(
        "Task created successfully",
        task_to_response(&task),
    )))
}

/// PUT /tasks/{id} - Partial update; absent fields keep their stored value.
pub async fn update_task(
    State(dependencies): State<AppDependencies>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTaskRequest>,
) -> Result<Json<ApiResponse<TaskResponse>>, ApiFailure> {
    let changes = TaskChanges {
        title: request.title,
        description: request.description,
        priority: request.priority,
        completed: request.completed,
        due_date: request.due_date,
        tag_ids: request
            .tag_ids
            .map(|ids| ids.into_iter().map(TagId::from).collect()),
    };
    let task = service(&dependencies)
        .update(&user, TaskId::from(id), changes)
        .await?;

    Ok(Json(ApiResponse::success_with_message(
        "Task updated successfully",
        task_to_response(&task),
    )))
}

/// PATCH /tasks/{id}/toggle - Flip the completion flag.
pub async fn toggle_task(
    State(dependencies): State<AppDependencies>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<TaskResponse>>, ApiFailure> {
    let task = service(&dependencies)
        .toggle_completion(&user, TaskId::from(id))
        .await?;

    Ok(Json(ApiResponse::success_with_message(
        "Task status updated",
        task_to_response(&task),
    )))
}

/// DELETE /tasks/{id} - Hard delete.
pub async fn delete_task(
    State(dependencies): State<AppDependencies>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiFailure> {
    service(&dependencies)
        .delete(&user, TaskId::from(id))
        .await?;

    Ok(Json(ApiResponse::message_only("Task deleted successfully")))
}
