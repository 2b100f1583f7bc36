//! Drives the HTTP clients against an in-process fake of the bookmark /
//! comment store and the open-data endpoint.
//!
//! Run with `cargo test -p crime-tracker --features ssr`.

#![cfg(feature = "ssr")]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post, put},
    Json, Router,
};
use crime_tracker::api::{ApiError, BackendClient, OpenDataClient};
use shared_types::bookmark::{remove_bookmark, replace_bookmark};
use shared_types::{
    Bookmark, BookmarkOutcome, Comment, Incident, IncidentQuery, IncidentRecord, NewBookmark,
    NewComment, NoteUpdate,
};

#[derive(Default)]
struct FakeStore {
    bookmarks: Vec<Bookmark>,
    comments: Vec<Comment>,
    next_id: u32,
    fail_creates: bool,
    fail_deletes: bool,
    last_query: Option<HashMap<String, String>>,
    last_token: Option<String>,
}

impl FakeStore {
    fn next_id(&mut self) -> String {
        self.next_id += 1;
        format!("id-{}", self.next_id)
    }
}

type Shared = Arc<Mutex<FakeStore>>;

async fn list_bookmarks(State(store): State<Shared>) -> Json<Vec<Bookmark>> {
    Json(store.lock().unwrap().bookmarks.clone())
}

async fn create_bookmark(
    State(store): State<Shared>,
    Json(mut body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<Bookmark>), StatusCode> {
    let mut store = store.lock().unwrap();
    if store.fail_creates {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let key = body["cmplntNum"].as_str().map(str::to_string);
    if store
        .bookmarks
        .iter()
        .any(|b| b.cmplnt_num.is_some() && b.cmplnt_num == key)
    {
        return Err(StatusCode::CONFLICT);
    }
    body["_id"] = store.next_id().into();
    let bookmark: Bookmark = serde_json::from_value(body).map_err(|_| StatusCode::BAD_REQUEST)?;
    store.bookmarks.push(bookmark.clone());
    Ok((StatusCode::CREATED, Json(bookmark)))
}

async fn update_bookmark(
    State(store): State<Shared>,
    Path(id): Path<String>,
    Json(update): Json<NoteUpdate>,
) -> Result<Json<Bookmark>, StatusCode> {
    let mut store = store.lock().unwrap();
    let bookmark = store
        .bookmarks
        .iter_mut()
        .find(|b| b.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    bookmark.notes = Some(update.notes);
    Ok(Json(bookmark.clone()))
}

async fn delete_bookmark(State(store): State<Shared>, Path(id): Path<String>) -> StatusCode {
    let mut store = store.lock().unwrap();
    if store.fail_deletes {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }
    if remove_bookmark(&mut store.bookmarks, &id) {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn list_comments(State(store): State<Shared>, Path(area): Path<String>) -> Json<Vec<Comment>> {
    let store = store.lock().unwrap();
    Json(
        store
            .comments
            .iter()
            .filter(|c| c.area == area)
            .cloned()
            .collect(),
    )
}

async fn post_comment(
    State(store): State<Shared>,
    Json(body): Json<NewComment>,
) -> (StatusCode, Json<Comment>) {
    let mut store = store.lock().unwrap();
    let comment = Comment {
        id: store.next_id(),
        area: body.area,
        text: body.text,
        latitude: body.latitude,
        longitude: body.longitude,
    };
    store.comments.push(comment.clone());
    (StatusCode::CREATED, Json(comment))
}

async fn incidents(
    State(store): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Json<serde_json::Value> {
    let mut store = store.lock().unwrap();
    store.last_query = Some(params);
    store.last_token = headers
        .get("x-app-token")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    Json(serde_json::json!([
        {
            "cmplnt_num": "100",
            "boro_nm": "MANHATTAN",
            "rpt_dt": "2025-01-02T00:00:00.000",
            "ofns_desc": "PETIT LARCENY",
            "law_cat_cd": "MISDEMEANOR",
            "latitude": "40.75",
            "longitude": "-73.99"
        },
        {
            "cmplnt_num": "101",
            "boro_nm": "QUEENS",
            "rpt_dt": "2025-01-01T00:00:00.000",
            "latitude": "not-a-number",
            "longitude": "-73.80"
        }
    ]))
}

async fn spawn_fake(store: Shared) -> String {
    let app = Router::new()
        .route("/api/bookmarks", get(list_bookmarks).post(create_bookmark))
        .route("/api/bookmarks/:id", put(update_bookmark).delete(delete_bookmark))
        .route("/api/comments", post(post_comment))
        .route("/api/comments/:area", get(list_comments))
        .route("/resource/qb7u-rbmr.json", get(incidents))
        .with_state(store);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn backend_with_store() -> (BackendClient, Shared) {
    let store = Shared::default();
    let base = spawn_fake(store.clone()).await;
    let client = BackendClient::new(reqwest::Client::new(), &format!("{}/api/", base)).unwrap();
    (client, store)
}

fn incident(key: &str, offense: Option<&str>) -> Incident {
    Incident::from_record(
        0,
        &IncidentRecord {
            cmplnt_num: Some(key.to_string()),
            boro_nm: Some("BRONX".to_string()),
            ofns_desc: offense.map(str::to_string),
            latitude: Some("40.84".to_string()),
            longitude: Some("-73.86".to_string()),
            ..Default::default()
        },
    )
}

fn snapshot(key: &str) -> NewBookmark {
    NewBookmark::from_incident(&incident(key, Some("ROBBERY"))).unwrap()
}

#[tokio::test]
async fn test_new_bookmark_is_created_and_listed() {
    let (client, _store) = backend_with_store().await;

    let outcome = client.create_bookmark(&snapshot("500")).await.unwrap();
    let BookmarkOutcome::Created(created) = outcome else {
        panic!("expected a created bookmark");
    };
    assert_eq!(created.cmplnt_num.as_deref(), Some("500"));

    let listed = client.list_bookmarks().await.unwrap();
    assert_eq!(listed, vec![created]);
}

#[tokio::test]
async fn test_duplicate_key_reports_already_bookmarked() {
    let (client, _store) = backend_with_store().await;

    let first = client.create_bookmark(&snapshot("777")).await.unwrap();
    let second = client.create_bookmark(&snapshot("777")).await.unwrap();

    assert!(matches!(first, BookmarkOutcome::Created(_)));
    assert_eq!(second, BookmarkOutcome::AlreadyBookmarked);
    assert_eq!(client.list_bookmarks().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_concurrent_duplicate_posts_persist_once() {
    let (client, _store) = backend_with_store().await;
    let payload = snapshot("888");

    let (a, b) = tokio::join!(client.create_bookmark(&payload), client.create_bookmark(&payload));
    let outcomes = [a.unwrap(), b.unwrap()];

    let created = outcomes
        .iter()
        .filter(|o| matches!(o, BookmarkOutcome::Created(_)))
        .count();
    assert_eq!(created, 1);
    assert!(outcomes.contains(&BookmarkOutcome::AlreadyBookmarked));
    assert_eq!(client.list_bookmarks().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_server_error_is_not_a_conflict() {
    let (client, store) = backend_with_store().await;
    store.lock().unwrap().fail_creates = true;

    let err = client.create_bookmark(&snapshot("1")).await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            ..
        }
    ));
}

#[tokio::test]
async fn test_unreachable_backend_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = BackendClient::new(reqwest::Client::new(), &format!("http://{}/api", addr)).unwrap();
    let err = client.create_bookmark(&snapshot("1")).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[tokio::test]
async fn test_note_edit_persists_and_updates_the_list() {
    let (client, _store) = backend_with_store().await;
    client.create_bookmark(&snapshot("10")).await.unwrap();
    client.create_bookmark(&snapshot("11")).await.unwrap();
    let mut list = client.list_bookmarks().await.unwrap();
    let target = list[1].id.clone();

    let updated = client
        .update_note(&target, "walked past this corner".to_string())
        .await
        .unwrap();
    assert!(replace_bookmark(&mut list, updated));

    assert_eq!(list[1].notes(), "walked past this corner");
    assert_eq!(client.list_bookmarks().await.unwrap(), list);
}

#[tokio::test]
async fn test_delete_removes_only_on_success() {
    let (client, store) = backend_with_store().await;
    client.create_bookmark(&snapshot("20")).await.unwrap();
    client.create_bookmark(&snapshot("21")).await.unwrap();
    let mut list = client.list_bookmarks().await.unwrap();
    let first = list[0].id.clone();

    store.lock().unwrap().fail_deletes = true;
    if client.delete_bookmark(&first).await.is_ok() {
        remove_bookmark(&mut list, &first);
    }
    assert_eq!(list.len(), 2);

    store.lock().unwrap().fail_deletes = false;
    if client.delete_bookmark(&first).await.is_ok() {
        remove_bookmark(&mut list, &first);
    }
    assert_eq!(list.len(), 1);
    assert_eq!(client.list_bookmarks().await.unwrap(), list);
}

#[tokio::test]
async fn test_missing_offense_reaches_the_card_as_placeholder() {
    let (client, _store) = backend_with_store().await;
    let payload = NewBookmark::from_incident(&incident("30", None)).unwrap();

    client.create_bookmark(&payload).await.unwrap();
    let stored = client.list_bookmarks().await.unwrap();
    assert_eq!(stored[0].offense(), "Unknown Offense");
}

#[tokio::test]
async fn test_comments_are_scoped_by_borough() {
    let (client, _store) = backend_with_store().await;
    let position = incident("1", None).position;

    let posted = client
        .post_comment(&NewComment::new("Staten Island", "ferry terminal is well lit", position).unwrap())
        .await
        .unwrap();
    client
        .post_comment(&NewComment::new("Bronx", "quiet block", None).unwrap())
        .await
        .unwrap();

    let staten = client.list_comments("Staten Island").await.unwrap();
    assert_eq!(staten, vec![posted]);
    assert_eq!(staten[0].position(), position);
    assert!(client.list_comments("Queens").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_open_data_query_and_token_header() {
    let store = Shared::default();
    let base = spawn_fake(store.clone()).await;
    let client = OpenDataClient::new(
        reqwest::Client::new(),
        &format!("{}/resource/qb7u-rbmr.json", base),
        Some("token-123".to_string()),
    )
    .unwrap();

    let incidents = client.fetch_incidents(&IncidentQuery::map()).await.unwrap();

    let store = store.lock().unwrap();
    let query = store.last_query.as_ref().unwrap();
    assert_eq!(query["$limit"], "500");
    assert_eq!(query["$order"], "rpt_dt DESC");
    assert_eq!(query["$where"], "latitude IS NOT NULL AND longitude IS NOT NULL");
    assert!(query["$select"].contains("loc_of_occur_desc"));
    assert_eq!(store.last_token.as_deref(), Some("token-123"));

    assert_eq!(incidents.len(), 2);
    assert_eq!(incidents[0].offense, "PETIT LARCENY");
    assert_eq!(incidents[0].report_date, "2025-01-02");
    assert!(incidents[0].is_mappable());
    assert_eq!(incidents[1].offense, "Unknown Offense");
    assert!(!incidents[1].is_mappable());
}

#[tokio::test]
async fn test_open_data_omits_token_when_unset() {
    let store = Shared::default();
    let base = spawn_fake(store.clone()).await;
    let client = OpenDataClient::new(
        reqwest::Client::new(),
        &format!("{}/resource/qb7u-rbmr.json", base),
        None,
    )
    .unwrap();

    client.fetch_records(&IncidentQuery::live_data()).await.unwrap();

    let store = store.lock().unwrap();
    assert_eq!(store.last_token, None);
    assert_eq!(store.last_query.as_ref().unwrap()["$limit"], "100");
}
