//! Integration tests for the `/commentsOfUser/{id}` endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, comment_doc, get, seed_photo, seed_user};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: comments are globally sorted newest first across photos
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn comments_are_sorted_newest_first_across_photos(pool: PgPool) {
    let alice = seed_user(&pool, "Alice", "Archer").await;
    let bob = seed_user(&pool, "Bob", "Baker").await;

    // Bob comments three times across two of Alice's photos with timestamps
    // T1 < T3 < T2; expected output order is [T2, T3, T1].
    seed_photo(
        &pool,
        alice,
        "one.jpg",
        "2023-12-01T10:00:00Z",
        json!([comment_doc(11, bob, "t1", "2024-01-01T00:00:00Z")]),
    )
    .await;
    seed_photo(
        &pool,
        alice,
        "two.jpg",
        "2023-12-02T10:00:00Z",
        json!([
            comment_doc(12, bob, "t2", "2024-03-01T00:00:00Z"),
            comment_doc(13, bob, "t3", "2024-02-01T00:00:00Z"),
        ]),
    )
    .await;

    let app = build_test_app(pool);
    let response = get(app, &format!("/commentsOfUser/{bob}")).await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["_id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![12, 13, 11]);
}

// ---------------------------------------------------------------------------
// Test: each comment carries a trimmed photo reference
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn comments_carry_a_trimmed_photo_reference(pool: PgPool) {
    let alice = seed_user(&pool, "Alice", "Archer").await;
    let bob = seed_user(&pool, "Bob", "Baker").await;

    let photo = seed_photo(
        &pool,
        alice,
        "beach.jpg",
        "2024-01-05T10:00:00Z",
        json!([comment_doc(1, bob, "lovely", "2024-01-06T09:00:00Z")]),
    )
    .await;

    let app = build_test_app(pool);
    let body = body_json(get(app, &format!("/commentsOfUser/{bob}")).await).await;

    let item = &body[0];
    assert_eq!(item["_id"], 1);
    assert_eq!(item["comment"], "lovely");
    assert_eq!(
        item["photo"],
        json!({ "_id": photo, "user_id": alice, "file_name": "beach.jpg" })
    );
}

// ---------------------------------------------------------------------------
// Test: only the requested user's comments are returned
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn only_the_requested_users_comments_are_returned(pool: PgPool) {
    let alice = seed_user(&pool, "Alice", "Archer").await;
    let bob = seed_user(&pool, "Bob", "Baker").await;

    seed_photo(
        &pool,
        alice,
        "mixed.jpg",
        "2024-01-05T10:00:00Z",
        json!([
            comment_doc(1, bob, "from bob", "2024-01-06T09:00:00Z"),
            comment_doc(2, alice, "from alice", "2024-01-06T10:00:00Z"),
            comment_doc(3, bob, "bob again", "2024-01-06T11:00:00Z"),
        ]),
    )
    .await;

    let app = build_test_app(pool);
    let body = body_json(get(app, &format!("/commentsOfUser/{bob}")).await).await;

    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|c| c["comment"].as_str().unwrap().contains("bob")));
}

// ---------------------------------------------------------------------------
// Test: a user who has commented nowhere yields an empty array
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn user_without_comments_yields_empty_array(pool: PgPool) {
    let alice = seed_user(&pool, "Alice", "Archer").await;

    let app = build_test_app(pool);
    let response = get(app, &format!("/commentsOfUser/{alice}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await.as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: unknown and malformed user ids both return 400
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_and_malformed_user_ids_return_400(pool: PgPool) {
    let app = build_test_app(pool);

    let missing = get(app.clone(), "/commentsOfUser/999999").await;
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(missing).await,
        json!({ "error": "Invalid user ID" })
    );

    let malformed = get(app, "/commentsOfUser/not-a-number").await;
    assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(malformed).await,
        json!({ "error": "Invalid user ID" })
    );
}
