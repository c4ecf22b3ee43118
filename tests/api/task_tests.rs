//! Integration tests for the task endpoints.

use crate::common::*;
use rstest::rstest;
use serde_json::json;

async fn create_task(client: &ApiClient, body: &serde_json::Value) -> TaskBody {
    let (status, envelope) = client.post::<TaskBody>("/tasks", body).await;
    assert_success(status, envelope)
}

#[rstest]
#[tokio::test]
async fn create_applies_defaults() {
    let app = spawn_app().await;
    let client = authenticated_client(&app).await;

    let task = create_task(&client, &task_body("Buy milk")).await;

    assert_eq!(task.title, "Buy milk");
    assert_eq!(task.priority, "medium");
    assert!(!task.completed);
    assert!(task.description.is_none());
    assert!(task.tags.is_empty());
}

#[rstest]
#[tokio::test]
async fn create_rejects_blank_title() {
    let app = spawn_app().await;
    let client = authenticated_client(&app).await;

    let (status, envelope) = client.post::<TaskBody>("/tasks", &json!({"title": "  "})).await;

    assert_eq!(assert_failure(status, envelope), "Title is required");
}

#[rstest]
#[tokio::test]
async fn create_with_tags_embeds_them() {
    let app = spawn_app().await;
    let client = authenticated_client(&app).await;
    let (status, envelope) = client.post::<TagBody>("/tags", &tag_body("errands")).await;
    let tag = assert_success(status, envelope);

    let task = create_task(
        &client,
        &json!({ "title": "Buy milk", "tagIds": [tag.id] }),
    )
    .await;

    assert_eq!(task.tags.len(), 1);
    assert_eq!(task.tags[0].name, "errands");
}

#[rstest]
#[tokio::test]
async fn create_with_foreign_tag_persists_no_task() {
    let app = spawn_app().await;
    let alice = authenticated_client(&app).await;
    let bob = authenticated_client(&app).await;
    let (status, envelope) = bob.post::<TagBody>("/tags", &tag_body("private")).await;
    let bobs_tag = assert_success(status, envelope);

    let (status, envelope) = alice
        .post::<TaskBody>("/tasks", &json!({ "title": "Spy", "tagIds": [bobs_tag.id] }))
        .await;
    let message = assert_failure(status, envelope);
    assert!(message.starts_with("Tag not found"));

    // All-or-nothing: no task row was committed.
    let (status, envelope) = alice.get::<Vec<TaskBody>>("/tasks").await;
    assert!(assert_success(status, envelope).is_empty());
}

#[rstest]
#[tokio::test]
async fn get_update_delete_are_owner_scoped() {
    let app = spawn_app().await;
    let alice = authenticated_client(&app).await;
    let bob = authenticated_client(&app).await;
    let task = create_task(&alice, &task_body("Alice's task")).await;

    let (status, envelope) = bob.get::<TaskBody>(&format!("/tasks/{}", task.id)).await;
    assert_eq!(assert_failure(status, envelope), "Task not found");

    let (status, envelope) = bob
        .put::<TaskBody>(&format!("/tasks/{}", task.id), &json!({"title": "Hijack"}))
        .await;
    assert_eq!(assert_failure(status, envelope), "Task not found");

    let (status, envelope) = bob.delete::<()>(&format!("/tasks/{}", task.id)).await;
    assert_eq!(assert_failure(status, envelope), "Task not found");

    // Alice still sees her unmodified task.
    let (status, envelope) = alice.get::<TaskBody>(&format!("/tasks/{}", task.id)).await;
    let found = assert_success(status, envelope);
    assert_eq!(found.title, "Alice's task");
}

#[rstest]
#[tokio::test]
async fn partial_update_keeps_unsupplied_fields() {
    let app = spawn_app().await;
    let client = authenticated_client(&app).await;
    let task = create_task(
        &client,
        &json!({
            "title": "Buy milk",
            "description": "Whole milk",
            "priority": "high",
            "dueDate": "2026-09-01"
        }),
    )
    .await;

    let (status, envelope) = client
        .put::<TaskBody>(&format!("/tasks/{}", task.id), &json!({"completed": true}))
        .await;

    let updated = assert_success(status, envelope);
    assert!(updated.completed);
    assert_eq!(updated.title, task.title);
    assert_eq!(updated.description, task.description);
    assert_eq!(updated.priority, task.priority);
    assert_eq!(updated.due_date, task.due_date);
    assert_eq!(updated.created_at, task.created_at);
}

#[rstest]
#[tokio::test]
async fn toggle_twice_round_trips() {
    let app = spawn_app().await;
    let client = authenticated_client(&app).await;
    let task = create_task(&client, &task_body("Buy milk")).await;

    let (status, envelope) = client
        .patch::<TaskBody>(&format!("/tasks/{}/toggle", task.id))
        .await;
    let once = assert_success(status, envelope);
    assert!(once.completed);

    let (status, envelope) = client
        .patch::<TaskBody>(&format!("/tasks/{}/toggle", task.id))
        .await;
    let twice = assert_success(status, envelope);
    assert!(!twice.completed);
}

#[rstest]
#[tokio::test]
async fn delete_removes_the_task() {
    let app = spawn_app().await;
    let client = authenticated_client(&app).await;
    let task = create_task(&client, &task_body("Buy milk")).await;

    let (status, envelope) = client.delete::<()>(&format!("/tasks/{}", task.id)).await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(envelope.message.as_deref(), Some("Task deleted successfully"));

    let (status, envelope) = client.get::<TaskBody>(&format!("/tasks/{}", task.id)).await;
    assert_eq!(assert_failure(status, envelope), "Task not found");
}

#[rstest]
#[tokio::test]
async fn status_filter_splits_completed_and_active() {
    let app = spawn_app().await;
    let client = authenticated_client(&app).await;
    let done = create_task(&client, &task_body("Done")).await;
    create_task(&client, &task_body("Open")).await;
    client
        .patch::<TaskBody>(&format!("/tasks/{}/toggle", done.id))
        .await;

    let (status, envelope) = client.get::<Vec<TaskBody>>("/tasks?status=completed").await;
    let completed = assert_success(status, envelope);
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].title, "Done");

    let (status, envelope) = client.get::<Vec<TaskBody>>("/tasks?status=active").await;
    let active = assert_success(status, envelope);
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].title, "Open");
}

#[rstest]
#[tokio::test]
async fn search_matches_title_and_description_case_insensitively() {
    let app = spawn_app().await;
    let client = authenticated_client(&app).await;
    create_task(
        &client,
        &json!({"title": "Groceries", "description": "Buy MILK"}),
    )
    .await;
    create_task(&client, &task_body("Laundry")).await;

    let (status, envelope) = client.get::<Vec<TaskBody>>("/tasks?search=milk").await;

    let found = assert_success(status, envelope);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Groceries");
}

#[rstest]
#[tokio::test]
async fn list_is_isolated_between_users() {
    let app = spawn_app().await;
    let alice = authenticated_client(&app).await;
    let bob = authenticated_client(&app).await;
    create_task(&alice, &task_body("Alice's task")).await;

    let (status, envelope) = bob.get::<Vec<TaskBody>>("/tasks").await;

    assert!(assert_success(status, envelope).is_empty());
}
