//! Integration tests for the note endpoints.

use crate::common::*;
use rstest::rstest;
use serde_json::json;

async fn create_note(client: &ApiClient, body: &serde_json::Value) -> NoteBody {
    let (status, envelope) = client.post::<NoteBody>("/notes", body).await;
    assert_success(status, envelope)
}

#[rstest]
#[tokio::test]
async fn create_applies_defaults() {
    let app = spawn_app().await;
    let client = authenticated_client(&app).await;

    let note = create_note(&client, &note_body("Meeting notes")).await;

    assert_eq!(note.title, "Meeting notes");
    assert!(!note.is_pinned);
    assert!(note.content.is_none());
}

#[rstest]
#[tokio::test]
async fn pin_toggle_twice_round_trips() {
    let app = spawn_app().await;
    let client = authenticated_client(&app).await;
    let note = create_note(&client, &note_body("Meeting notes")).await;

    let (status, envelope) = client
        .patch::<NoteBody>(&format!("/notes/{}/pin", note.id))
        .await;
    let once = assert_success(status, envelope);
    assert!(once.is_pinned);

    let (status, envelope) = client
        .patch::<NoteBody>(&format!("/notes/{}/pin", note.id))
        .await;
    assert!(!assert_success(status, envelope).is_pinned);
}

#[rstest]
#[tokio::test]
async fn pinned_notes_list_before_unpinned() {
    let app = spawn_app().await;
    let client = authenticated_client(&app).await;
    create_note(&client, &note_body("Plain")).await;
    let important = create_note(&client, &note_body("Important")).await;
    client
        .patch::<NoteBody>(&format!("/notes/{}/pin", important.id))
        .await;

    let (status, envelope) = client.get::<Vec<NoteBody>>("/notes").await;

    let notes = assert_success(status, envelope);
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].title, "Important");
}

#[rstest]
#[tokio::test]
async fn partial_update_keeps_unsupplied_fields() {
    let app = spawn_app().await;
    let client = authenticated_client(&app).await;
    let note = create_note(
        &client,
        &json!({"title": "Meeting notes", "content": "Agenda"}),
    )
    .await;

    let (status, envelope) = client
        .put::<NoteBody>(&format!("/notes/{}", note.id), &json!({"isPinned": true}))
        .await;

    let updated = assert_success(status, envelope);
    assert!(updated.is_pinned);
    assert_eq!(updated.title, note.title);
    assert_eq!(updated.content, note.content);
    assert_eq!(updated.created_at, note.created_at);
}

#[rstest]
#[tokio::test]
async fn notes_are_owner_scoped() {
    let app = spawn_app().await;
    let alice = authenticated_client(&app).await;
    let bob = authenticated_client(&app).await;
    let note = create_note(&alice, &note_body("Alice's note")).await;

    let (status, envelope) = bob.get::<NoteBody>(&format!("/notes/{}", note.id)).await;
    assert_eq!(assert_failure(status, envelope), "Note not found");

    let (status, envelope) = bob.delete::<()>(&format!("/notes/{}", note.id)).await;
    assert_eq!(assert_failure(status, envelope), "Note not found");
}

#[rstest]
#[tokio::test]
async fn search_matches_content() {
    let app = spawn_app().await;
    let client = authenticated_client(&app).await;
    create_note(
        &client,
        &json!({"title": "Meeting notes", "content": "Discuss BUDGET"}),
    )
    .await;
    create_note(&client, &note_body("Shopping list")).await;

    let (status, envelope) = client.get::<Vec<NoteBody>>("/notes?search=budget").await;

    let notes = assert_success(status, envelope);
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "Meeting notes");
}

#[rstest]
#[tokio::test]
async fn note_accepts_own_tags_and_rejects_foreign_ones() {
    let app = spawn_app().await;
    let alice = authenticated_client(&app).await;
    let bob = authenticated_client(&app).await;
    let (status, envelope) = alice.post::<TagBody>("/tags", &tag_body("journal")).await;
    let own_tag = assert_success(status, envelope);
    let (status, envelope) = bob.post::<TagBody>("/tags", &tag_body("secret")).await;
    let foreign_tag = assert_success(status, envelope);

    let note = create_note(
        &alice,
        &json!({"title": "Diary", "tagIds": [own_tag.id]}),
    )
    .await;
    assert_eq!(note.tags[0].name, "journal");

    let (status, envelope) = alice
        .post::<NoteBody>(
            "/notes",
            &json!({"title": "Spy", "tagIds": [foreign_tag.id]}),
        )
        .await;
    assert!(assert_failure(status, envelope).starts_with("Tag not found"));
}
