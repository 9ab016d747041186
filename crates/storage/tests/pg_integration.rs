//! Integration tests for PgStorage.
//! Run with: DATABASE_URL=... cargo test -p persona-chat-storage -- --ignored pg_

#![allow(clippy::unwrap_used, reason = "integration test code")]

use chrono::Utc;
use persona_chat_core::{FlatTrait, NewChatMessage, PersonaTrait, User};
use persona_chat_storage::traits::{ChatStore, TraitStore, UserStore};
use persona_chat_storage::{PgStorage, StorageError};
use uuid::Uuid;

async fn create_pg_storage() -> PgStorage {
    let url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for PgStorage integration tests");
    PgStorage::new(&url).await.expect("Failed to connect to PostgreSQL")
}

fn unique_id() -> String {
    format!("test-{}", Uuid::new_v4())
}

fn make_chat(user: &str, persona: &str, session_id: &str, text: &str) -> NewChatMessage {
    NewChatMessage {
        user: user.to_owned(),
        persona: persona.to_owned(),
        session_id: session_id.to_owned(),
        user_message: text.to_owned(),
        ai_response: format!("reply to {text}"),
    }
}

fn make_user(email: &str) -> User {
    User {
        id: unique_id(),
        name: "Integration Tester".to_owned(),
        email: email.to_owned(),
        password_hash: "$pbkdf2-sha256$i=1$AAAA$BBBB".to_owned(),
        created_at: Utc::now(),
    }
}

// ── Chat tests ───────────────────────────────────────────────────

#[tokio::test]
#[ignore]
async fn pg_append_then_query_returns_row() {
    let storage = create_pg_storage().await;
    let user = unique_id();
    let session = unique_id();

    let stored = storage.append_chat(&make_chat(&user, "1", &session, "hello")).await.unwrap();
    assert!(!stored.id.is_empty());

    let rows = storage.chats_by_user(&user, None, None).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, stored.id);
    assert_eq!(rows[0].ai_response, "reply to hello");
}

#[tokio::test]
#[ignore]
async fn pg_query_orders_by_timestamp_ascending() {
    let storage = create_pg_storage().await;
    let user = unique_id();
    let session = unique_id();

    for text in ["one", "two", "three"] {
        storage.append_chat(&make_chat(&user, "1", &session, text)).await.unwrap();
    }

    let rows = storage.chats_by_user(&user, None, Some(&session)).await.unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    assert_eq!(rows[2].user_message, "three");
}

#[tokio::test]
#[ignore]
async fn pg_persona_filter_narrows_results() {
    let storage = create_pg_storage().await;
    let user = unique_id();

    storage.append_chat(&make_chat(&user, "1", "s1", "to one")).await.unwrap();
    storage.append_chat(&make_chat(&user, "2", "s2", "to two")).await.unwrap();

    let all = storage.chats_by_user(&user, None, None).await.unwrap();
    let only_one = storage.chats_by_user(&user, Some("1"), None).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(only_one.len(), 1);
    assert_eq!(only_one[0].persona, "1");
}

#[tokio::test]
#[ignore]
async fn pg_unknown_user_yields_empty_not_error() {
    let storage = create_pg_storage().await;
    let rows = storage.chats_by_user(&unique_id(), None, None).await.unwrap();
    assert!(rows.is_empty());
}

// ── User tests ───────────────────────────────────────────────────

#[tokio::test]
#[ignore]
async fn pg_duplicate_email_is_duplicate_error() {
    let storage = create_pg_storage().await;
    let email = format!("{}@example.com", unique_id());

    storage.create_user(&make_user(&email)).await.unwrap();
    let err = storage.create_user(&make_user(&email)).await.unwrap_err();
    assert!(matches!(err, StorageError::Duplicate(_)), "expected Duplicate, got: {err:?}");
}

#[tokio::test]
#[ignore]
async fn pg_get_user_by_email_round_trip() {
    let storage = create_pg_storage().await;
    let email = format!("{}@example.com", unique_id());
    let user = make_user(&email);

    storage.create_user(&user).await.unwrap();
    let fetched = storage.get_user_by_email(&email).await.unwrap().unwrap();
    assert_eq!(fetched.id, user.id);
    assert_eq!(fetched.password_hash, user.password_hash);

    let missing = storage.get_user_by_email("nobody@example.com").await.unwrap();
    assert!(missing.is_none());
}

// ── Trait tests ──────────────────────────────────────────────────

#[tokio::test]
#[ignore]
async fn pg_persona_trait_upsert_is_wholesale() {
    let storage = create_pg_storage().await;
    let persona_id = unique_id();

    let mut doc = PersonaTrait {
        persona_id: persona_id.clone(),
        about: "first".to_owned(),
        core_expertise: vec!["a".to_owned(), "b".to_owned()],
        communication_style: "direct".to_owned(),
        traits: vec!["curious".to_owned()],
        pain_points: vec![],
        key_responsibilities: vec![],
        timestamp: Utc::now(),
    };
    storage.upsert_persona_traits(&doc).await.unwrap();

    doc.about = "second".to_owned();
    doc.core_expertise = vec!["c".to_owned()];
    storage.upsert_persona_traits(&doc).await.unwrap();

    let fetched = storage.get_persona_traits(&persona_id).await.unwrap().unwrap();
    assert_eq!(fetched.about, "second");
    assert_eq!(fetched.core_expertise, vec!["c"]);
}

#[tokio::test]
#[ignore]
async fn pg_flat_traits_replace_preserves_order() {
    let storage = create_pg_storage().await;
    let traits: Vec<FlatTrait> = ["Zeta", "Alpha", "Mid"]
        .iter()
        .map(|t| FlatTrait {
            title: (*t).to_owned(),
            category: "About".to_owned(),
            description: format!("{t} description"),
        })
        .collect();

    let count = storage.replace_flat_traits(&traits).await.unwrap();
    assert_eq!(count, 3);

    let listed = storage.list_flat_traits().await.unwrap();
    let titles: Vec<&str> = listed.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Zeta", "Alpha", "Mid"]);
}

#[tokio::test]
#[ignore]
async fn pg_persona_profile_upsert_reports_creation() {
    let storage = create_pg_storage().await;
    let persona_id = unique_id();
    let traits = vec![FlatTrait {
        title: "About".to_owned(),
        category: "About".to_owned(),
        description: "profile".to_owned(),
    }];

    let created = storage.upsert_persona_profile(&persona_id, &traits).await.unwrap();
    assert!(created);
    let updated = storage.upsert_persona_profile(&persona_id, &traits).await.unwrap();
    assert!(!updated);

    let fetched = storage.get_persona_profile(&persona_id).await.unwrap().unwrap();
    assert_eq!(fetched.len(), 1);
    assert_eq!(fetched[0].description, "profile");
}
