use content_console::lifecycle::ConsoleSystem;
use content_console::model::{EventDraft, EventId, ProductPageId};
use content_framework::mock::MockTransport;
use content_framework::{
    ApiClient, ConsoleError, ContentScreen, ListPhase, LocalFile, Method, Payload,
    ValidationError,
};
use serde_json::json;
use std::sync::Arc;

fn system(mock: &Arc<MockTransport>) -> ConsoleSystem {
    ConsoleSystem::with_api(ApiClient::new(mock.clone()), 10)
}

/// Create an event end to end: banner upload, POST, refetch, modal closed.
#[tokio::test]
async fn create_event_scenario() {
    let mock = Arc::new(MockTransport::new());
    mock.expect(Method::Post, "/api/events/upload_banner")
        .return_json(200, json!({"bannerUrl": "https://cdn.test/launch.png"}));
    mock.expect(Method::Post, "/api/events/create_events")
        .return_json(201, json!({"status": true, "message": "Created"}));
    mock.expect(Method::Get, "/api/events").return_json(
        200,
        json!({"success": true, "data": {"events": [{
            "_id": "e1",
            "eventName": "Launch",
            "eventDate": "2024-05-01",
            "eventTime": "10:00",
            "location": "HQ",
            "eventBanner": "https://cdn.test/launch.png"
        }]}}),
    );

    let system = system(&mock);
    let mut editor = system.events.create();
    if let Some(draft) = editor.draft_mut() {
        *draft = EventDraft::new("Launch", "2024-05-01", "10:00", "HQ");
    }

    let report = editor
        .attach(vec![LocalFile::new("launch.png", "image/png", vec![0x89, 0x50])])
        .await
        .expect("banner upload");
    assert_eq!(report.uploaded.len(), 1);

    editor.submit().await.expect("create event");

    let requests = mock.requests();
    assert_eq!(
        requests[1].payload,
        Payload::Json(json!({
            "eventName": "Launch",
            "eventDate": "2024-05-01",
            "eventTime": "10:00",
            "location": "HQ",
            "eventBanner": "https://cdn.test/launch.png"
        }))
    );
    assert_eq!(mock.count(Method::Get, "/api/events"), 1);
    assert!(!editor.is_open());
    assert!(editor.draft().is_none());

    let view = system.events.snapshot().await.unwrap();
    assert_eq!(view.phase, ListPhase::Ready);
    assert_eq!(view.items[0].id, EventId::from("e1"));

    drop(editor);
    system.shutdown().await.expect("shutdown");
    mock.verify();
}

#[tokio::test]
async fn event_without_banner_is_not_sent() {
    let mock = Arc::new(MockTransport::new());
    let system = system(&mock);

    let mut editor = system.events.create();
    if let Some(draft) = editor.draft_mut() {
        *draft = EventDraft::new("Launch", "2024-05-01", " ", "HQ");
    }
    let err = editor.submit().await.unwrap_err();
    assert_eq!(
        err,
        ConsoleError::Validation(ValidationError {
            missing: vec!["eventTime", "eventBanner"]
        })
    );
    assert!(editor.is_open());
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn product_page_update_bundles_new_media() {
    let mock = Arc::new(MockTransport::new());
    mock.expect(Method::Get, "/api/products").return_json(
        200,
        json!({"success": true, "data": {"products": [{
            "_id": "p1",
            "name": "Widget",
            "slug": "widget",
            "media": [{"_id": "m1", "type": "image", "url": "https://cdn.test/m1.png"}]
        }]}, "pagination": {"page": 1, "limit": 10, "total": 1, "totalPages": 1}}),
    );
    mock.expect(Method::Put, "/api/products/p1")
        .return_json(200, json!({"success": true, "data": {"_id": "p1"}}));
    mock.expect(Method::Get, "/api/products")
        .return_json(200, json!({"success": true, "data": {"products": []}}));

    let system = system(&mock);
    let view = system.product_pages.load().await.unwrap();
    assert_eq!(view.total_items, 1);

    let mut editor = system
        .product_pages
        .edit(ProductPageId::from("p1"))
        .await
        .unwrap();
    let report = editor
        .attach(vec![
            LocalFile::new("demo.mp4", "video/mp4", vec![1, 2]),
            LocalFile::new("brochure.pdf", "application/pdf", vec![3]),
        ])
        .await
        .unwrap();
    assert_eq!(report.queued, 1);
    assert_eq!(editor.pending_files().len(), 1);
    assert_eq!(
        editor.warnings(),
        &["brochure.pdf is not an image or video and was skipped".to_string()]
    );

    editor.submit().await.unwrap();

    match &mock.requests()[1].payload {
        Payload::Multipart(body) => {
            assert!(body.fields.contains(&("name".into(), "Widget".into())));
            assert!(body
                .fields
                .contains(&("retainedMedia".into(), "[\"m1\"]".into())));
            assert_eq!(body.files.len(), 1);
            assert_eq!(body.files[0].0, "media");
        }
        other => panic!("expected multipart payload, got {other:?}"),
    }
    mock.verify();
}

#[tokio::test]
async fn deleting_an_event_refetches_the_list() {
    let mock = Arc::new(MockTransport::new());
    mock.expect(Method::Get, "/api/events").return_json(
        200,
        json!([
            {"_id": "e1", "eventName": "A", "eventDate": "2024-01-01", "eventTime": "09:00", "location": "X"},
            {"_id": "e2", "eventName": "B", "eventDate": "2024-01-02", "eventTime": "09:00", "location": "Y"}
        ]),
    );
    mock.expect(Method::Delete, "/api/events/e1")
        .return_json(200, json!({"status": true, "message": "Deleted"}));
    mock.expect(Method::Get, "/api/events").return_json(
        200,
        json!([
            {"_id": "e2", "eventName": "B", "eventDate": "2024-01-02", "eventTime": "09:00", "location": "Y"}
        ]),
    );

    let system = system(&mock);
    let view = system.events.load().await.unwrap();
    assert_eq!(view.total_items, 2);
    assert_eq!(view.total_pages, 1);

    let mut deleter = system.events.delete(EventId::from("e1"));
    assert!(mock.count(Method::Delete, "/api/events/e1") == 0);
    deleter.confirm().await.unwrap();

    let view = system.events.snapshot().await.unwrap();
    let ids: Vec<_> = view.items.iter().map(|e| e.id.0.as_str()).collect();
    assert_eq!(ids, vec!["e2"]);
    mock.verify();
}
