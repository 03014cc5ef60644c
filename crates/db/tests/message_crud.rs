//! Integration tests for message and category persistence.
//!
//! Exercises the repository layer against a real database:
//! - Create with implicit category creation
//! - Partial updates
//! - Id monotonicity across deletes
//! - Cascade delete from category to messages
//! - Unique constraint violations

use assert_matches::assert_matches;
use msgapi_core::message::{MessagePatch, NewMessage};
use msgapi_db::repositories::{CategoryRepo, MessageRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_message(text: &str, category: &str) -> NewMessage {
    NewMessage {
        message: text.to_string(),
        duration: 5,
        category: category.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_message_creates_category(pool: PgPool) {
    let created = MessageRepo::create(&pool, &new_message("Clean dishes", "chore"))
        .await
        .unwrap();

    assert!(created.id >= 1);
    assert_eq!(created.message, "Clean dishes");
    assert_eq!(created.duration, 5);
    assert_eq!(created.category_name, "chore");
    assert_eq!(created.printed_times, 0);
    assert!(!created.printed_once);

    let category = CategoryRepo::find_by_name(&pool, "chore")
        .await
        .unwrap()
        .expect("category should exist");
    assert_eq!(category.id, created.category_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_reuses_existing_category(pool: PgPool) {
    let first = MessageRepo::create(&pool, &new_message("one", "chore")).await.unwrap();
    let second = MessageRepo::create(&pool, &new_message("two", "chore")).await.unwrap();

    assert_eq!(first.category_id, second.category_id);
    assert_eq!(CategoryRepo::list(&pool).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_by_id_round_trip(pool: PgPool) {
    let created = MessageRepo::create(&pool, &new_message("round", "trip")).await.unwrap();

    let found = MessageRepo::find_by_id(&pool, created.id).await.unwrap();
    assert_eq!(found, Some(created));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_ids_increase_and_are_not_reused(pool: PgPool) {
    let a = MessageRepo::create(&pool, &new_message("a", "ids")).await.unwrap();
    let b = MessageRepo::create(&pool, &new_message("b", "ids")).await.unwrap();
    assert!(b.id > a.id);

    assert!(MessageRepo::delete(&pool, b.id).await.unwrap());
    let c = MessageRepo::create(&pool, &new_message("c", "ids")).await.unwrap();
    assert!(c.id > b.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_orders_by_id(pool: PgPool) {
    for text in ["zeta", "alpha", "mid"] {
        MessageRepo::create(&pool, &new_message(text, "order")).await.unwrap();
    }

    let texts: Vec<_> = MessageRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.message)
        .collect();
    assert_eq!(texts, ["zeta", "alpha", "mid"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_patch_changes_nothing(pool: PgPool) {
    let created = MessageRepo::create(&pool, &new_message("same", "patch")).await.unwrap();

    let updated = MessageRepo::update(&pool, created.id, &MessagePatch::default())
        .await
        .unwrap();
    assert_eq!(updated, Some(created));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_patch_changes_only_supplied_fields(pool: PgPool) {
    let created = MessageRepo::create(&pool, &new_message("partial", "patch")).await.unwrap();

    let patch = MessagePatch {
        duration: Some(42),
        printed_once: Some(true),
        ..Default::default()
    };
    let updated = MessageRepo::update(&pool, created.id, &patch)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.duration, 42);
    assert!(updated.printed_once);
    assert_eq!(updated.message, created.message);
    assert_eq!(updated.printed_times, created.printed_times);
    assert_eq!(updated.creation_date, created.creation_date);
    assert_eq!(updated.category_name, created.category_name);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_returns_none(pool: PgPool) {
    let updated = MessageRepo::update(&pool, 999_999, &MessagePatch::default())
        .await
        .unwrap();
    assert!(updated.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_missing_returns_false(pool: PgPool) {
    assert!(!MessageRepo::delete(&pool, 999_999).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_message_text_violates_unique(pool: PgPool) {
    MessageRepo::create(&pool, &new_message("dup", "unique")).await.unwrap();

    let err = MessageRepo::create(&pool, &new_message("dup", "other"))
        .await
        .unwrap_err();
    assert_matches!(err, sqlx::Error::Database(ref db) if db.constraint() == Some("uq_message_message"));

    // The failed insert rolled back its implicit category.
    assert!(CategoryRepo::find_by_name(&pool, "other").await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_category_crud(pool: PgPool) {
    let created = CategoryRepo::create(&pool, "errands").await.unwrap();
    assert_eq!(created.name, "errands");

    let renamed = CategoryRepo::update(&pool, created.id, Some("shopping"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(renamed.name, "shopping");

    let unchanged = CategoryRepo::update(&pool, created.id, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged.name, "shopping");

    assert!(CategoryRepo::delete(&pool, created.id).await.unwrap());
    assert!(CategoryRepo::find_by_id(&pool, created.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_category_name_violates_unique(pool: PgPool) {
    CategoryRepo::create(&pool, "errands").await.unwrap();

    let err = CategoryRepo::create(&pool, "errands").await.unwrap_err();
    assert_matches!(err, sqlx::Error::Database(ref db) if db.constraint() == Some("uq_category_name"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_category_cascades_to_messages(pool: PgPool) {
    let kept = MessageRepo::create(&pool, &new_message("kept", "keep")).await.unwrap();
    let gone_a = MessageRepo::create(&pool, &new_message("gone a", "drop")).await.unwrap();
    let gone_b = MessageRepo::create(&pool, &new_message("gone b", "drop")).await.unwrap();

    assert!(CategoryRepo::delete(&pool, gone_a.category_id).await.unwrap());

    assert!(MessageRepo::find_by_id(&pool, gone_a.id).await.unwrap().is_none());
    assert!(MessageRepo::find_by_id(&pool, gone_b.id).await.unwrap().is_none());
    assert!(MessageRepo::find_by_id(&pool, kept.id).await.unwrap().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_by_category_orders_by_text(pool: PgPool) {
    let b = MessageRepo::create(&pool, &new_message("b task", "sorted")).await.unwrap();
    MessageRepo::create(&pool, &new_message("a task", "sorted")).await.unwrap();
    MessageRepo::create(&pool, &new_message("elsewhere", "other")).await.unwrap();

    let texts: Vec<_> = MessageRepo::list_by_category(&pool, b.category_id)
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.message)
        .collect();
    assert_eq!(texts, ["a task", "b task"]);
}
