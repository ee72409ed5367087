mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;

use common::{app_with, app_without_store, get, post, FailingStore, MemoryStore};
use mindwell_core::collections;

fn default_resources() -> serde_json::Value {
    json!([
        {
            "title": "Coping with Exam Stress (IT)",
            "description": "Practical steps for managing deadlines and exams.",
            "url": "https://www.mind.org.uk/",
            "category": "guide"
        },
        {
            "title": "Understanding Burnout",
            "description": "Signs and strategies for students in tech.",
            "url": "https://www.helpguide.org/",
            "category": "article"
        },
        {
            "title": "Breathing Exercise",
            "description": "4-7-8 guided breathing timer.",
            "url": "https://www.boxbreathingapp.com/",
            "category": "tool"
        },
        {
            "title": "24/7 Helpline",
            "description": "Immediate assistance if you’re in crisis.",
            "url": "https://988lifeline.org/",
            "category": "helpline"
        }
    ])
}

fn default_team() -> serde_json::Value {
    json!([
        { "name": "Ava Patel", "role": "Clinical Advisor", "bio": "Guides assessment criteria", "avatar": null },
        { "name": "Liam Chen", "role": "Data Analyst", "bio": "Turns mood logs into insight", "avatar": null },
        { "name": "Sara Gomez", "role": "Frontend", "bio": "Designs interactive tools", "avatar": null },
        { "name": "Noah Singh", "role": "Backend", "bio": "APIs and data layer", "avatar": null }
    ])
}

#[tokio::test]
async fn resources_fall_back_to_defaults() {
    let apps = [
        app_without_store(),
        app_with(Arc::new(FailingStore)),
        app_with(Arc::new(MemoryStore::default())),
        // An unmappable record rejects the whole stored set.
        app_with(Arc::new(MemoryStore::with(
            collections::RESOURCES,
            vec![json!({ "title": "ok" }), json!({ "category": "podcast" })],
        ))),
    ];
    for app in apps {
        let (status, body) = get(&app, "/api/resources").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, default_resources());
    }
}

#[tokio::test]
async fn stored_resources_are_mapped() {
    let store = MemoryStore::with(
        collections::RESOURCES,
        vec![
            json!({ "title": "Sleep and study", "url": "https://example.org/sleep", "category": "video" }),
            json!({ "title": "Peer support", "description": "Weekly group", "_id": "abc" }),
        ],
    );
    let app = app_with(Arc::new(store));

    let (status, body) = get(&app, "/api/resources").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "title": "Sleep and study", "description": "", "url": "https://example.org/sleep", "category": "video" },
            { "title": "Peer support", "description": "Weekly group", "url": "", "category": "article" }
        ])
    );
}

#[tokio::test]
async fn team_falls_back_to_defaults() {
    for app in [
        app_without_store(),
        app_with(Arc::new(FailingStore)),
        app_with(Arc::new(MemoryStore::default())),
    ] {
        let (status, body) = get(&app, "/api/team").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, default_team());
    }
}

#[tokio::test]
async fn stored_team_is_mapped() {
    let store = MemoryStore::with(
        collections::TEAM_MEMBERS,
        vec![json!({ "name": "Kim Lee", "role": "Counsellor", "avatar": "/img/kim.png" })],
    );
    let app = app_with(Arc::new(store));

    let (_, body) = get(&app, "/api/team").await;
    assert_eq!(
        body,
        json!([{ "name": "Kim Lee", "role": "Counsellor", "bio": null, "avatar": "/img/kim.png" }])
    );
}

#[tokio::test]
async fn contact_is_acknowledged_and_stored() {
    let store = Arc::new(MemoryStore::default());
    let app = app_with(store.clone());
    let message = json!({
        "name": "Sam",
        "email": "sam@uni.edu",
        "subject": "Workshop",
        "message": "Is there a session next week?"
    });

    let (status, body) = post(&app, "/api/contact", message.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));
    assert_eq!(store.documents(collections::CONTACT_MESSAGES), vec![message]);
}

#[tokio::test]
async fn contact_is_acknowledged_when_write_fails() {
    let app = app_with(Arc::new(FailingStore));
    let (status, body) = post(
        &app,
        "/api/contact",
        json!({ "name": "Sam", "email": "sam@uni.edu", "subject": "Hi", "message": "Hello" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));
}

#[tokio::test]
async fn contact_requires_every_field_and_a_valid_email() {
    let app = app_without_store();
    for message in [
        json!({ "name": "Sam", "email": "sam@uni.edu", "subject": "Hi" }),
        json!({ "name": "Sam", "email": "sam at uni", "subject": "Hi", "message": "Hello" }),
    ] {
        let (status, body) = post(&app, "/api/contact", message).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }
}
