//! Integration tests for the statistics endpoint.

use crate::common::*;
use rstest::rstest;

#[rstest]
#[tokio::test]
async fn fresh_user_has_all_zero_stats() {
    let app = spawn_app().await;
    let client = authenticated_client(&app).await;

    let (status, envelope) = client.get::<StatsBody>("/stats").await;

    let stats = assert_success(status, envelope);
    assert_eq!(stats.tasks.total, 0);
    assert_eq!(stats.tasks.completed, 0);
    assert_eq!(stats.tasks.active, 0);
    assert!((stats.tasks.completion_rate - 0.0).abs() < f64::EPSILON);
    assert_eq!(stats.notes.total, 0);
    assert_eq!(stats.notes.pinned, 0);
}

#[rstest]
#[tokio::test]
async fn two_of_three_completed_yields_recurring_rate() {
    let app = spawn_app().await;
    let client = authenticated_client(&app).await;
    for title in ["One", "Two", "Three"] {
        client
            .post::<TaskBody>("/tasks", &task_body(title))
            .await;
    }
    let (_, envelope) = client.get::<Vec<TaskBody>>("/tasks").await;
    let tasks = envelope.data.unwrap();
    for task in tasks.iter().take(2) {
        client
            .patch::<TaskBody>(&format!("/tasks/{}/toggle", task.id))
            .await;
    }

    let (status, envelope) = client.get::<StatsBody>("/stats").await;

    let stats = assert_success(status, envelope);
    assert_eq!(stats.tasks.total, 3);
    assert_eq!(stats.tasks.completed, 2);
    assert_eq!(stats.tasks.active, 1);
    assert!((stats.tasks.completion_rate - 66.666_666_666_666_67).abs() < 1e-9);
}

#[rstest]
#[tokio::test]
async fn note_counters_track_pins() {
    let app = spawn_app().await;
    let client = authenticated_client(&app).await;
    let (_, envelope) = client.post::<NoteBody>("/notes", &note_body("Pinned")).await;
    let pinned = envelope.data.unwrap();
    client.post::<NoteBody>("/notes", &note_body("Plain")).await;
    client
        .patch::<NoteBody>(&format!("/notes/{}/pin", pinned.id))
        .await;

    let (status, envelope) = client.get::<StatsBody>("/stats").await;

    let stats = assert_success(status, envelope);
    assert_eq!(stats.notes.total, 2);
    assert_eq!(stats.notes.pinned, 1);
}

#[rstest]
#[tokio::test]
async fn stats_are_isolated_between_users() {
    let app = spawn_app().await;
    let alice = authenticated_client(&app).await;
    let bob = authenticated_client(&app).await;
    alice
        .post::<TaskBody>("/tasks", &task_body("Alice's task"))
        .await;

    let (status, envelope) = bob.get::<StatsBody>("/stats").await;

    let stats = assert_success(status, envelope);
    assert_eq!(stats.tasks.total, 0);
}
