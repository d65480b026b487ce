use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use taskly::api::{ApiError, DashboardApi, HttpApiClient};
use taskly::core::family::NewFamily;
use taskly::core::quick_task::{NewQuickTask, QuickTaskType};
use taskly::core::task::TaskStatus;
use taskly::dashboard::{QuickTasksWidget, Sidebar, TaskCompletionChart};
use taskly::store::{FileBackend, LocalStore};

fn signed_in_store() -> LocalStore {
    let store = LocalStore::in_memory();
    store.set_token("secret").unwrap();
    store
}

async fn client(server: &MockServer, store: LocalStore) -> HttpApiClient {
    HttpApiClient::new(&format!("{}/api", server.uri()), store).unwrap()
}

#[tokio::test]
async fn list_requests_carry_the_token_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/family/"))
        .and(header("Authorization", "Token secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "title": "Home", "color": "bg-red-500"},
            {"id": 2, "title": "Work"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server, signed_in_store()).await;
    let families = api.list_families().await.unwrap();

    assert_eq!(families.len(), 2);
    assert_eq!(families[0].color.as_deref(), Some("bg-red-500"));
    assert_eq!(families[1].color, None);
}

#[tokio::test]
async fn missing_token_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let api = client(&server, LocalStore::in_memory()).await;
    assert_eq!(api.list_tasks().await, Err(ApiError::MissingToken));
}

#[tokio::test]
async fn server_errors_map_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/quickTasks/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let api = client(&server, signed_in_store()).await;
    match api.list_quick_tasks().await {
        Err(ApiError::Status { status, method, .. }) => {
            assert_eq!(status, 500);
            assert_eq!(method, "GET");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn unauthorized_is_recognised() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks/"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let api = client(&server, signed_in_store()).await;
    let err = api.list_tasks().await.unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let api = client(&server, signed_in_store()).await;
    assert!(matches!(api.list_tasks().await, Err(ApiError::Decode { .. })));
}

#[tokio::test]
async fn creates_post_json_bodies() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/family/"))
        .and(body_json(json!({"title": "Club"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 3, "title": "Club"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/quickTasks/"))
        .and(body_json(json!({"title": "Water plants", "type": "DAY"})))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server, signed_in_store()).await;
    api.create_family(&NewFamily {
        title: "Club".into(),
        color: None,
    })
    .await
    .unwrap();
    api.create_quick_task(&NewQuickTask {
        title: "Water plants".into(),
        kind: QuickTaskType::Day,
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn deletes_hit_the_item_path() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/family/7/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/quickTasks/9/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server, signed_in_store()).await;
    api.delete_family(7).await.unwrap();
    api.delete_quick_task(9).await.unwrap();
}

#[tokio::test]
async fn dashboard_loads_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/family/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "title": "Home", "color": "bg-blue-500"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/tasks/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 10, "title": "Dishes", "family": 1, "status": "DONE"},
            {"id": "abc", "title": "Laundry", "family": 1, "status": "TODO"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/quickTasks/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "title": "Feed cat", "completed": false, "type": "DAY"},
            {"id": 2, "title": "Pay rent", "completed": false, "type": "MONTH"}
        ])))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::new(FileBackend::open(dir.path().join("local_store.json")));
    store.set_token("secret").unwrap();
    let api = client(&server, store.clone()).await;

    let mut sidebar = Sidebar::mount(store.clone());
    assert!(sidebar.needs_fetch());
    assert!(sidebar.load(&api).await);

    let mut quick_tasks = QuickTasksWidget::new();
    assert!(quick_tasks.load(&api).await);
    assert_eq!(quick_tasks.tasks().len(), 1);

    let mut chart = TaskCompletionChart::new();
    chart.load(&api).await;
    assert_eq!(chart.error(), None);
    let done = chart.rows().into_iter().find(|r| r.status == TaskStatus::Done).unwrap();
    assert_eq!(done.count(1), Some(1));

    // A fresh mount over the same file reads the mirrored families.
    let reopened = LocalStore::new(FileBackend::open(dir.path().join("local_store.json")));
    let cached = Sidebar::mount(reopened);
    assert!(!cached.needs_fetch());
    assert_eq!(cached.families(), sidebar.families());
}
