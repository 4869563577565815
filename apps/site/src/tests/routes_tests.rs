use super::*;
use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
};
use client_core::{DirectoryApi, NetworkError};
use shared::domain::{Event, Post, Professional};
use tokio::sync::Mutex;
use tower::ServiceExt;

#[derive(Default)]
struct FixedDirectory {
    searches: Mutex<Vec<SearchParams>>,
}

#[async_trait::async_trait]
impl DirectoryApi for FixedDirectory {
    async fn professionals(
        &self,
        params: &SearchParams,
    ) -> Result<Vec<Professional>, NetworkError> {
        self.searches.lock().await.push(params.clone());
        let name = if params.query().is_empty() {
            "Ayo Balogun"
        } else {
            "Zanele Dube"
        };
        Ok(vec![Professional {
            name: Some(name.into()),
            title: Some("Product Manager".into()),
            ..Professional::default()
        }])
    }

    async fn events(&self) -> Result<Vec<Event>, NetworkError> {
        Ok(vec![Event {
            title: Some("Nairobi Founders Breakfast".into()),
            start_time: Some("2024-03-01T10:00:00Z".into()),
            ..Event::default()
        }])
    }

    async fn posts(&self) -> Result<Vec<Post>, NetworkError> {
        Ok(Vec::new())
    }
}

fn test_app() -> (Router, Arc<FetchOrchestrator>, Arc<FixedDirectory>) {
    let api = Arc::new(FixedDirectory::default());
    let orchestrator = Arc::new(FetchOrchestrator::new(api.clone()));
    let app = build_router(Arc::new(AppState {
        orchestrator: orchestrator.clone(),
    }));
    (app, orchestrator, api)
}

async fn get_page(app: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::get(uri).body(Body::empty()).expect("request");
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, String::from_utf8(body.to_vec()).expect("utf8"))
}

#[tokio::test]
async fn healthz_reports_ok() {
    let (app, _orchestrator, _api) = test_app();
    let (status, body) = get_page(app, "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn index_before_mount_shows_empty_states() {
    let (app, _orchestrator, _api) = test_app();
    let (status, body) = get_page(app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No professionals found yet."));
    assert!(body.contains("No upcoming events yet."));
    assert!(body.contains("No posts yet."));
}

#[tokio::test]
async fn index_after_mount_renders_loaded_collections() {
    let (app, orchestrator, _api) = test_app();
    orchestrator.mount().await;

    let (_, body) = get_page(app, "/").await;
    assert!(body.contains("Ayo Balogun"));
    assert!(body.contains("Nairobi Founders Breakfast"));
    assert!(body.contains("3/1/2024, 10:00:00 AM"));
    assert!(body.contains("No posts yet."));
}

#[tokio::test]
async fn search_form_reloads_professionals_with_form_values() {
    let (app, orchestrator, api) = test_app();
    orchestrator.mount().await;

    let (status, body) = get_page(app, "/search?q=Product+Manager&state=").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Zanele Dube"));
    assert!(!body.contains("Ayo Balogun"));
    assert!(body.contains(r#"value="Product Manager""#));
    assert!(body.contains("Nairobi Founders Breakfast"));

    let searches = api.searches.lock().await.clone();
    assert_eq!(searches.len(), 2);
    assert_eq!(searches[1], SearchParams::new("Product Manager", ""));
}

#[tokio::test]
async fn search_results_stay_with_the_searching_request() {
    let (app, orchestrator, _api) = test_app();
    orchestrator.mount().await;

    let (_, searched) = get_page(app.clone(), "/search?q=Secret+Query&state=Ghana").await;
    assert!(searched.contains("Zanele Dube"));
    assert!(searched.contains(r#"value="Secret Query""#));
    assert!(searched.contains(r#"<option value="Ghana" selected>"#));

    let (status, index) = get_page(app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(index.contains("Ayo Balogun"));
    assert!(!index.contains("Zanele Dube"));
    assert!(!index.contains(r#"value="Secret Query""#));
    assert!(!index.contains(r#"<option value="Ghana" selected>"#));
    assert_eq!(orchestrator.snapshot().await.search, SearchParams::default());
}

#[test]
fn loading_snapshot_renders_spinner() {
    let snapshot = DirectorySnapshot {
        professionals_loading: true,
        ..DirectorySnapshot::default()
    };
    let body = render_snapshot(&snapshot).into_string();
    assert!(body.contains("Loading..."));
    assert!(!body.contains("No professionals found yet."));
}
